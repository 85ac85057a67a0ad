// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::article::{Article, ArticleId, ArticleRemote},
};

pub struct ArticleCommandService {
    pub(super) remote: Arc<dyn ArticleRemote>,
}

impl ArticleCommandService {
    pub fn new(remote: Arc<dyn ArticleRemote>) -> Self {
        Self { remote }
    }

    pub(super) fn require_id(article: &Article) -> ApplicationResult<ArticleId> {
        article
            .id
            .ok_or_else(|| ApplicationError::malformed_row("article has no article_id"))
    }
}
