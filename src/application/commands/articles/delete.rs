// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::error::ApplicationResult,
    domain::article::{Article, RemoteResponse},
};

impl ArticleCommandService {
    pub async fn delete_record(&self, article: &Article) -> ApplicationResult<RemoteResponse> {
        let id = Self::require_id(article)?;
        let response = self.remote.delete(id).await?;
        tracing::info!(%response, article_id = id.get(), "article deleted");
        Ok(response)
    }
}
