use super::map_reqwest;
use crate::domain::article::{ArticleId, ArticlePayload, ArticleRemote, ArticleRow, RemoteResponse};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, Url, header};
use serde_json::Value;
use std::time::Duration;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

pub fn build_client(timeout: Duration) -> DomainResult<Client> {
    Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .timeout(timeout)
        .build()
        .map_err(map_reqwest)
}

/// `ArticleRemote` over HTTP. Paths are resolved against `base_url`, so a
/// base of `http://host/api` targets `http://host/api/articles`.
#[derive(Clone)]
pub struct ReqwestArticleRemote {
    http: Client,
    base_url: Url,
}

impl ReqwestArticleRemote {
    pub fn new(http: Client, base_url: &str) -> DomainResult<Self> {
        let mut base_url = Url::parse(base_url)
            .map_err(|err| DomainError::Validation(format!("invalid base url `{base_url}`: {err}")))?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self { http, base_url })
    }

    fn endpoint(&self, path: &str) -> DomainResult<Url> {
        self.base_url
            .join(path)
            .map_err(|err| DomainError::Validation(format!("invalid endpoint `{path}`: {err}")))
    }

    fn collection_url(&self) -> DomainResult<Url> {
        self.endpoint("articles")
    }

    fn record_url(&self, id: ArticleId) -> DomainResult<Url> {
        self.endpoint(&format!("articles/{id}"))
    }

    fn with_form(request: RequestBuilder, payload: &ArticlePayload) -> DomainResult<RequestBuilder> {
        let body = serde_urlencoded::to_string(payload)
            .map_err(|err| DomainError::Validation(format!("cannot encode article: {err}")))?;
        Ok(request
            .header(header::CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body))
    }

    async fn send(&self, request: RequestBuilder) -> DomainResult<RemoteResponse> {
        let response = request.send().await.map_err(map_reqwest)?;
        read_response(response).await
    }
}

async fn read_response(response: Response) -> DomainResult<RemoteResponse> {
    let status = response.status();
    let url = response.url().clone();
    let text = response.text().await.map_err(map_reqwest)?;

    if !status.is_success() {
        return Err(DomainError::Remote(format!(
            "{url} answered {status}: {}",
            text.trim()
        )));
    }

    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(&text).unwrap_or(Value::String(text)))
}

fn into_rows(value: RemoteResponse) -> DomainResult<Vec<ArticleRow>> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(row) => Ok(row),
                other => Err(DomainError::MalformedRow(format!(
                    "row {index} is not an object: {other}"
                ))),
            })
            .collect(),
        other => Err(DomainError::MalformedRow(format!(
            "expected an array of articles, found {other}"
        ))),
    }
}

#[async_trait]
impl ArticleRemote for ReqwestArticleRemote {
    async fn list(&self) -> DomainResult<Vec<ArticleRow>> {
        let url = self.collection_url()?;
        let response = self.send(self.http.get(url)).await?;
        into_rows(response)
    }

    async fn insert(&self, payload: ArticlePayload) -> DomainResult<RemoteResponse> {
        let url = self.collection_url()?;
        let request = Self::with_form(self.http.post(url), &payload)?;
        self.send(request).await
    }

    async fn update(&self, id: ArticleId, payload: ArticlePayload) -> DomainResult<RemoteResponse> {
        let url = self.record_url(id)?;
        let request = Self::with_form(self.http.request(Method::PUT, url), &payload)?;
        self.send(request).await
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<RemoteResponse> {
        let url = self.record_url(id)?;
        self.send(self.http.delete(url)).await
    }

    async fn truncate(&self) -> DomainResult<RemoteResponse> {
        let url = self.collection_url()?;
        self.send(self.http.delete(url)).await
    }
}
