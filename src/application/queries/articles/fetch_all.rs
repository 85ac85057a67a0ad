use super::ArticleQueryService;
use crate::{
    application::{
        dto::FetchOutcome,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{Article, ArticleCollection},
        errors::DomainResult,
    },
};
use futures::future::join_all;

impl ArticleQueryService {
    /// Reads `GET /articles` into `collection`.
    ///
    /// An empty backend is populated from the seed dataset: every seed article
    /// is inserted and every insert is awaited, even after one fails, then the list is read exactly once
    /// more. The seed source is not consulted when the first read has rows.
    pub async fn fetch_all(
        &self,
        collection: &mut ArticleCollection,
    ) -> ApplicationResult<FetchOutcome> {
        let rows = self.remote.list().await?;
        if !rows.is_empty() {
            let count = collection.load_all(rows)?;
            return Ok(FetchOutcome::Loaded { count });
        }

        tracing::warn!("article table is empty, inserting seed dataset");
        self.seed_and_reload(collection).await.inspect_err(|err| {
            tracing::error!(error = %err, "seeding the article table failed");
        })
    }

    async fn seed_and_reload(
        &self,
        collection: &mut ArticleCollection,
    ) -> ApplicationResult<FetchOutcome> {
        let seed_rows = self.seed.load().await?;
        if seed_rows.is_empty() {
            return Err(ApplicationError::seed("seed dataset contains no articles"));
        }

        let articles = seed_rows
            .into_iter()
            .map(Article::from_fields)
            .collect::<DomainResult<Vec<_>>>()?;

        // Every insert settles before the first failure is reported.
        let results = join_all(
            articles
                .iter()
                .map(|article| self.commands.insert_record(article)),
        )
        .await;
        let inserted = articles.len();
        let failed = results.iter().filter(|result| result.is_err()).count();
        if let Some(err) = results.into_iter().find_map(Result::err) {
            tracing::error!(inserted, failed, "seed inserts did not all succeed");
            return Err(err);
        }

        let rows = self.remote.list().await?;
        if rows.is_empty() {
            return Err(ApplicationError::empty_result_race(format!(
                "{inserted} seed articles inserted but the article list is still empty"
            )));
        }

        let count = collection.load_all(rows)?;
        tracing::info!(inserted, count, "article table seeded");
        Ok(FetchOutcome::Seeded { inserted, count })
    }
}
