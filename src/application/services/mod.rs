// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::articles::ArticleCommandService,
        ports::{
            render::{MarkdownRenderer, TemplateRenderer},
            seed::SeedSource,
            time::Clock,
        },
        queries::articles::{ArticleQueryService, ArticleRenderService},
    },
    domain::article::ArticleRemote,
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub article_rendering: Arc<ArticleRenderService>,
}

impl ApplicationServices {
    pub fn new(
        remote: Arc<dyn ArticleRemote>,
        seed: Arc<dyn SeedSource>,
        markdown: Arc<dyn MarkdownRenderer>,
        templates: Arc<dyn TemplateRenderer>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(Arc::clone(&remote)));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&remote),
            Arc::clone(&seed),
            Arc::clone(&article_commands),
        ));

        let article_rendering = Arc::new(ArticleRenderService::new(
            Arc::clone(&markdown),
            Arc::clone(&templates),
            Arc::clone(&clock),
        ));

        Self {
            article_commands,
            article_queries,
            article_rendering,
        }
    }
}
