mod markdown;
mod template;

pub use markdown::PulldownMarkdownRenderer;
pub use template::{DEFAULT_ARTICLE_TEMPLATE, TeraTemplateRenderer};
