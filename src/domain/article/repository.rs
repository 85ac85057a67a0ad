use crate::domain::article::entity::{ArticlePayload, ArticleRow};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Whatever the backend answered with. Non-JSON bodies arrive as a string.
pub type RemoteResponse = serde_json::Value;

/// The remote `articles` resource.
#[async_trait]
pub trait ArticleRemote: Send + Sync {
    async fn list(&self) -> DomainResult<Vec<ArticleRow>>;
    async fn insert(&self, payload: ArticlePayload) -> DomainResult<RemoteResponse>;
    async fn update(&self, id: ArticleId, payload: ArticlePayload) -> DomainResult<RemoteResponse>;
    async fn delete(&self, id: ArticleId) -> DomainResult<RemoteResponse>;
    async fn truncate(&self) -> DomainResult<RemoteResponse>;
}
