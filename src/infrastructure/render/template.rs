use crate::application::{
    ApplicationResult, dto::ArticleView, error::ApplicationError,
    ports::render::TemplateRenderer, queries::articles::ARTICLE_TEMPLATE,
};
use std::{error::Error as _, path::Path};
use tera::{Context, Tera};

pub const DEFAULT_ARTICLE_TEMPLATE: &str = r#"<article data-category="{{ category | default(value="") }}" data-author="{{ author | default(value="") }}">
  <header>
    <h1>{{ title | default(value="") }}</h1>
    <div class="byline">
      By <address><a href="{{ authorUrl | default(value="") }}">{{ author | default(value="") }}</a></address>
      <time datetime="{{ publishedOn | default(value="") }}">{{ publishStatus | default(value="") }}</time>
    </div>
  </header>
  <section class="article-body">{{ body | default(value="") | safe }}</section>
</article>
"#;

/// Tera-backed renderer holding the article template. Text fields are HTML
/// escaped; `body` is trusted because it is already rendered HTML.
pub struct TeraTemplateRenderer {
    tera: Tera,
}

impl TeraTemplateRenderer {
    pub fn new(source: &str) -> ApplicationResult<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![ARTICLE_TEMPLATE]);
        tera.add_raw_template(ARTICLE_TEMPLATE, source)
            .map_err(|err| ApplicationError::render(describe(&err)))?;
        Ok(Self { tera })
    }

    pub fn with_default_template() -> ApplicationResult<Self> {
        Self::new(DEFAULT_ARTICLE_TEMPLATE)
    }

    pub async fn from_file(path: &Path) -> ApplicationResult<Self> {
        let source = tokio::fs::read_to_string(path).await.map_err(|err| {
            ApplicationError::render(format!("cannot read template {}: {err}", path.display()))
        })?;
        Self::new(&source)
    }
}

impl TemplateRenderer for TeraTemplateRenderer {
    fn render(&self, template: &str, view: &ArticleView) -> ApplicationResult<String> {
        let context = Context::from_serialize(view)
            .map_err(|err| ApplicationError::render(describe(&err)))?;
        self.tera
            .render(template, &context)
            .map_err(|err| ApplicationError::render(describe(&err)))
    }
}

// tera keeps the useful part of a failure in its source chain.
fn describe(err: &tera::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
