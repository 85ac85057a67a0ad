use crate::application::{
    ApplicationResult, error::ApplicationError, ports::seed::SeedSource,
};
use crate::domain::article::ArticleRow;
use async_trait::async_trait;
use reqwest::{Client, Url};
use std::{path::PathBuf, sync::Arc};

/// Seed dataset stored as a JSON array on disk.
#[derive(Debug, Clone)]
pub struct FileSeedSource {
    path: PathBuf,
}

impl FileSeedSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SeedSource for FileSeedSource {
    async fn load(&self) -> ApplicationResult<Vec<ArticleRow>> {
        let text = tokio::fs::read_to_string(&self.path).await.map_err(|err| {
            ApplicationError::seed(format!("cannot read {}: {err}", self.path.display()))
        })?;
        parse_rows(&text, &self.path.display().to_string())
    }
}

/// Seed dataset served as a static JSON resource.
#[derive(Clone)]
pub struct HttpSeedSource {
    http: Client,
    url: Url,
}

impl HttpSeedSource {
    pub fn new(http: Client, url: Url) -> Self {
        Self { http, url }
    }
}

#[async_trait]
impl SeedSource for HttpSeedSource {
    async fn load(&self) -> ApplicationResult<Vec<ArticleRow>> {
        let response = self
            .http
            .get(self.url.clone())
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|err| ApplicationError::seed(format!("cannot fetch {}: {err}", self.url)))?;
        let text = response
            .text()
            .await
            .map_err(|err| ApplicationError::seed(format!("cannot read {}: {err}", self.url)))?;
        parse_rows(&text, self.url.as_str())
    }
}

/// Picks the HTTP source for `http(s)://` locations and the file source
/// otherwise.
pub fn seed_source_for(location: &str, http: Client) -> Arc<dyn SeedSource> {
    match Url::parse(location) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {
            Arc::new(HttpSeedSource::new(http, url))
        }
        _ => Arc::new(FileSeedSource::new(location)),
    }
}

fn parse_rows(text: &str, origin: &str) -> ApplicationResult<Vec<ArticleRow>> {
    serde_json::from_str::<Vec<ArticleRow>>(text).map_err(|err| {
        ApplicationError::seed(format!("{origin} is not a JSON array of objects: {err}"))
    })
}
