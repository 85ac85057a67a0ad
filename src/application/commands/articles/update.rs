// src/application/commands/articles/update.rs
use super::ArticleCommandService;
use crate::{
    application::error::ApplicationResult,
    domain::article::{Article, RemoteResponse},
};

impl ArticleCommandService {
    /// `PUT /articles/{article_id}`. Fails without a request when the
    /// article has no identifier.
    pub async fn update_record(&self, article: &Article) -> ApplicationResult<RemoteResponse> {
        let id = Self::require_id(article)?;
        let response = self.remote.update(id, article.payload()).await?;
        tracing::info!(%response, article_id = id.get(), "article updated");
        Ok(response)
    }
}
