// src/application/commands/articles/truncate.rs
use super::ArticleCommandService;
use crate::{application::error::ApplicationResult, domain::article::RemoteResponse};

impl ArticleCommandService {
    /// `DELETE /articles`. Only the remote table is emptied; an
    /// `ArticleCollection` already loaded keeps its entries until the caller
    /// clears it.
    pub async fn truncate_table(&self) -> ApplicationResult<RemoteResponse> {
        let response = self.remote.truncate().await?;
        tracing::info!(%response, "article table truncated");
        Ok(response)
    }
}
