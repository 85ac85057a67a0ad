// tests/support/fake_backend.rs
use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header::CONTENT_TYPE},
    routing::{get, put},
};
use blog_articles::domain::article::ArticleRow;
use serde_json::{Value, json};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

/// A request as the fake backend saw it.
#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub method: &'static str,
    pub path: String,
    pub content_type: Option<String>,
    pub form: Vec<(String, String)>,
}

#[derive(Default)]
struct BackendState {
    rows: Vec<ArticleRow>,
    next_id: i64,
    seen: Vec<SeenRequest>,
    fail_with: Option<StatusCode>,
}

#[derive(Clone, Default)]
pub struct FakeBackend {
    state: Arc<Mutex<BackendState>>,
}

impl FakeBackend {
    pub fn with_rows(rows: Vec<ArticleRow>) -> Self {
        let backend = Self::default();
        {
            let mut state = backend.state.lock().unwrap();
            state.next_id = rows.len() as i64;
            state.rows = rows;
        }
        backend
    }

    /// Every request is answered with `status` from now on.
    pub fn fail_with(&self, status: StatusCode) {
        self.state.lock().unwrap().fail_with = Some(status);
    }

    pub fn seen(&self) -> Vec<SeenRequest> {
        self.state.lock().unwrap().seen.clone()
    }

    pub fn rows(&self) -> Vec<ArticleRow> {
        self.state.lock().unwrap().rows.clone()
    }

    /// Binds to an ephemeral port and serves until the test runtime ends.
    /// Returns the base url, e.g. `http://127.0.0.1:40211`.
    pub async fn spawn(&self) -> String {
        let app = Router::new()
            .route("/articles", get(list).post(create).delete(truncate))
            .route("/articles/{id}", put(update).delete(remove))
            .with_state(self.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind fake backend");
        let address: SocketAddr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve fake backend");
        });
        format!("http://{address}")
    }

    fn observe(
        &self,
        method: &'static str,
        path: String,
        headers: &HeaderMap,
        body: &str,
    ) -> Result<(), StatusCode> {
        let form = serde_urlencoded::from_str::<Vec<(String, String)>>(body).unwrap_or_default();
        let content_type = headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        let mut state = self.state.lock().unwrap();
        state.seen.push(SeenRequest {
            method,
            path,
            content_type,
            form,
        });
        match state.fail_with {
            Some(status) => Err(status),
            None => Ok(()),
        }
    }
}

fn form_to_row(form: &[(String, String)]) -> ArticleRow {
    form.iter()
        .map(|(key, value)| (key.clone(), Value::String(value.clone())))
        .collect()
}

async fn list(State(backend): State<FakeBackend>, headers: HeaderMap) -> Result<Json<Value>, StatusCode> {
    backend.observe("GET", "/articles".into(), &headers, "")?;
    Ok(Json(Value::Array(
        backend.rows().into_iter().map(Value::Object).collect(),
    )))
}

async fn create(
    State(backend): State<FakeBackend>,
    headers: HeaderMap,
    body: String,
) -> Result<String, StatusCode> {
    backend.observe("POST", "/articles".into(), &headers, &body)?;
    let form = serde_urlencoded::from_str::<Vec<(String, String)>>(&body).unwrap_or_default();
    let mut state = backend.state.lock().unwrap();
    state.next_id += 1;
    let mut row = form_to_row(&form);
    row.insert("article_id".into(), json!(state.next_id));
    state.rows.push(row);
    Ok("insert complete".into())
}

async fn update(
    State(backend): State<FakeBackend>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    body: String,
) -> Result<Json<Value>, StatusCode> {
    backend.observe("PUT", format!("/articles/{id}"), &headers, &body)?;
    let form = serde_urlencoded::from_str::<Vec<(String, String)>>(&body).unwrap_or_default();
    let mut state = backend.state.lock().unwrap();
    let row = state
        .rows
        .iter_mut()
        .find(|row| row.get("article_id") == Some(&json!(id)))
        .ok_or(StatusCode::NOT_FOUND)?;
    row.extend(form_to_row(&form));
    Ok(Json(json!({ "updated": id })))
}

async fn remove(
    State(backend): State<FakeBackend>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Result<String, StatusCode> {
    backend.observe("DELETE", format!("/articles/{id}"), &headers, "")?;
    let mut state = backend.state.lock().unwrap();
    state.rows.retain(|row| row.get("article_id") != Some(&json!(id)));
    Ok("delete complete".into())
}

async fn truncate(State(backend): State<FakeBackend>, headers: HeaderMap) -> Result<String, StatusCode> {
    backend.observe("DELETE", "/articles".into(), &headers, "")?;
    backend.state.lock().unwrap().rows.clear();
    Ok("delete complete".into())
}
