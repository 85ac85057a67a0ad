mod fetch_all;
mod render;
mod service;

pub use render::{ARTICLE_TEMPLATE, ArticleRenderService};
pub use service::ArticleQueryService;
