// tests/support/mocks.rs
use async_trait::async_trait;
use blog_articles::application::{
    ApplicationResult, error::ApplicationError, ports::seed::SeedSource,
};
use blog_articles::domain::article::{
    ArticleId, ArticlePayload, ArticleRemote, ArticleRow, RemoteResponse,
};
use blog_articles::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde_json::json;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Fixed timestamp used across tests.
static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks.rs")
        .with_timezone(&Utc)
});

pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

/* -------------------------------- ArticleRemote -------------------------------- */

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteCall {
    List,
    Insert(ArticlePayload),
    Update(ArticleId, ArticlePayload),
    Delete(ArticleId),
    Truncate,
}

/// Scripted remote: `list` pops the next queued answer (empty once the queue
/// runs dry) and every call is recorded.
#[derive(Default)]
pub struct RecordingRemote {
    lists: Mutex<VecDeque<DomainResult<Vec<ArticleRow>>>>,
    calls: Mutex<Vec<RemoteCall>>,
    fail_inserts: bool,
    failing_titles: Vec<String>,
}

impl RecordingRemote {
    pub fn with_lists(lists: Vec<Vec<ArticleRow>>) -> Self {
        Self {
            lists: Mutex::new(lists.into_iter().map(Ok).collect()),
            ..Self::default()
        }
    }

    pub fn failing_list(message: &str) -> Self {
        Self {
            lists: Mutex::new(VecDeque::from([Err(DomainError::Remote(message.into()))])),
            ..Self::default()
        }
    }

    pub fn failing_inserts(mut self) -> Self {
        self.fail_inserts = true;
        self
    }

    /// Only inserts of an article titled `title` are refused.
    pub fn failing_insert_for(mut self, title: &str) -> Self {
        self.failing_titles.push(title.to_owned());
        self
    }

    pub fn calls(&self) -> Vec<RemoteCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn list_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, RemoteCall::List))
            .count()
    }

    pub fn inserted(&self) -> Vec<ArticlePayload> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                RemoteCall::Insert(payload) => Some(payload),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: RemoteCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ArticleRemote for RecordingRemote {
    async fn list(&self) -> DomainResult<Vec<ArticleRow>> {
        self.record(RemoteCall::List);
        self.lists
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn insert(&self, payload: ArticlePayload) -> DomainResult<RemoteResponse> {
        let refused = payload
            .title
            .as_ref()
            .is_some_and(|title| self.failing_titles.contains(title));
        self.record(RemoteCall::Insert(payload));
        if self.fail_inserts || refused {
            return Err(DomainError::Remote("insert refused".into()));
        }
        Ok(json!("insert complete"))
    }

    async fn update(&self, id: ArticleId, payload: ArticlePayload) -> DomainResult<RemoteResponse> {
        self.record(RemoteCall::Update(id, payload));
        Ok(json!("update complete"))
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<RemoteResponse> {
        self.record(RemoteCall::Delete(id));
        Ok(json!("delete complete"))
    }

    async fn truncate(&self) -> DomainResult<RemoteResponse> {
        self.record(RemoteCall::Truncate);
        Ok(json!("delete complete"))
    }
}

/* -------------------------------- SeedSource -------------------------------- */

pub struct StaticSeed {
    rows: Vec<ArticleRow>,
    loads: AtomicUsize,
    fail: bool,
}

impl StaticSeed {
    pub fn new(rows: Vec<ArticleRow>) -> Self {
        Self {
            rows,
            loads: AtomicUsize::new(0),
            fail: false,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            fail: true,
            ..Self::new(Vec::new())
        }
    }

    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SeedSource for StaticSeed {
    async fn load(&self) -> ApplicationResult<Vec<ArticleRow>> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(ApplicationError::seed("hackerIpsum.json not found"));
        }
        Ok(self.rows.clone())
    }
}
