use std::sync::Arc;

use crate::{
    application::{commands::articles::ArticleCommandService, ports::seed::SeedSource},
    domain::article::ArticleRemote,
};

pub struct ArticleQueryService {
    pub(super) remote: Arc<dyn ArticleRemote>,
    pub(super) seed: Arc<dyn SeedSource>,
    pub(super) commands: Arc<ArticleCommandService>,
}

impl ArticleQueryService {
    pub fn new(
        remote: Arc<dyn ArticleRemote>,
        seed: Arc<dyn SeedSource>,
        commands: Arc<ArticleCommandService>,
    ) -> Self {
        Self {
            remote,
            seed,
            commands,
        }
    }
}
