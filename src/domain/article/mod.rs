pub mod collection;
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use collection::ArticleCollection;
pub use entity::{Article, ArticlePayload, ArticleRow};
pub use repository::{ArticleRemote, RemoteResponse};
pub use value_objects::{ArticleId, PublishedOn};
