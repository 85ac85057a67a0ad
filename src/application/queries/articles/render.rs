use std::sync::Arc;

use crate::{
    application::{
        dto::ArticleView,
        error::ApplicationResult,
        ports::{
            render::{MarkdownRenderer, TemplateRenderer},
            time::Clock,
        },
    },
    domain::article::{Article, ArticleCollection},
};

/// Name of the template every article is rendered through.
pub const ARTICLE_TEMPLATE: &str = "article-template";

pub struct ArticleRenderService {
    markdown: Arc<dyn MarkdownRenderer>,
    templates: Arc<dyn TemplateRenderer>,
    clock: Arc<dyn Clock>,
}

impl ArticleRenderService {
    pub fn new(
        markdown: Arc<dyn MarkdownRenderer>,
        templates: Arc<dyn TemplateRenderer>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            markdown,
            templates,
            clock,
        }
    }

    /// Fills in `days_ago` and `publish_status`, replaces `body` with its
    /// HTML rendering, then renders the article template.
    ///
    /// The article is mutated in place, so a second call renders the already
    /// converted body again and recomputes the day count against a new `now`.
    pub fn render_to_html(&self, article: &mut Article) -> ApplicationResult<String> {
        article.derive_publish_state(self.clock.now());
        if let Some(body) = article.body.take() {
            article.body = Some(self.markdown.to_html(&body));
        }

        let view = ArticleView::from(&*article);
        self.templates.render(ARTICLE_TEMPLATE, &view)
    }

    /// Renders every article in collection order.
    pub fn render_collection(
        &self,
        collection: &mut ArticleCollection,
    ) -> ApplicationResult<Vec<String>> {
        collection
            .iter_mut()
            .map(|article| self.render_to_html(article))
            .collect()
    }
}
