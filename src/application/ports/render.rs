// src/application/ports/render.rs
use crate::application::{ApplicationResult, dto::ArticleView};

pub trait MarkdownRenderer: Send + Sync {
    /// Converts Markdown to HTML. Embedded HTML passes through unchanged.
    fn to_html(&self, source: &str) -> String;
}

pub trait TemplateRenderer: Send + Sync {
    fn render(&self, template: &str, view: &ArticleView) -> ApplicationResult<String>;
}
