pub mod articles;
pub mod outcomes;

pub use articles::ArticleView;
pub use outcomes::FetchOutcome;
