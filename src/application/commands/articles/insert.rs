// src/application/commands/articles/insert.rs
use super::ArticleCommandService;
use crate::{
    application::error::ApplicationResult,
    domain::article::{Article, RemoteResponse},
};

impl ArticleCommandService {
    /// `POST /articles` with the article's whitelisted fields.
    pub async fn insert_record(&self, article: &Article) -> ApplicationResult<RemoteResponse> {
        let response = self.remote.insert(article.payload()).await?;
        tracing::info!(%response, title = article.title.as_deref(), "article inserted");
        Ok(response)
    }
}
