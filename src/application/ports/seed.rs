// src/application/ports/seed.rs
use crate::{application::ApplicationResult, domain::article::ArticleRow};
use async_trait::async_trait;

/// The bundled dataset used to populate an empty backend.
#[async_trait]
pub trait SeedSource: Send + Sync {
    async fn load(&self) -> ApplicationResult<Vec<ArticleRow>>;
}
