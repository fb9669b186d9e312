//! In-process HTTP stand-in for the completion and storage services.
//!
//! [`serve`] binds an axum router to an ephemeral port, records every request
//! it receives, and answers with whatever the supplied closure returns.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::Query;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::Router;
use serde_json::Value;

use crate::config::{AppConfig, CompletionSettings, DEFAULT_MODEL, DEFAULT_TEMPERATURE};

#[derive(Debug, Clone)]
pub struct Captured {
    pub method: String,
    pub path: String,
    pub query: HashMap<String, String>,
    pub headers: HeaderMap,
    pub body: Value,
}

impl Captured {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

pub struct MockServer {
    pub url: String,
    captured: Arc<Mutex<Vec<Captured>>>,
}

impl MockServer {
    pub fn requests(&self) -> Vec<Captured> {
        self.captured.lock().unwrap().clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<Captured> {
        self.requests()
            .into_iter()
            .filter(|r| r.path == path)
            .collect()
    }

    /// Wait for background requests (the audit insert) to land.
    pub async fn wait_for(&self, path: &str, count: usize) -> Vec<Captured> {
        for _ in 0..50 {
            let seen = self.requests_to(path);
            if seen.len() >= count {
                return seen;
            }
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        }
        self.requests_to(path)
    }
}

pub fn ok(body: Value) -> (StatusCode, String) {
    (StatusCode::OK, body.to_string())
}

pub fn created(body: Value) -> (StatusCode, String) {
    (StatusCode::CREATED, body.to_string())
}

pub async fn serve<F>(respond: F) -> MockServer
where
    F: Fn(&Captured) -> (StatusCode, String) + Send + Sync + 'static,
{
    let captured: Arc<Mutex<Vec<Captured>>> = Arc::default();
    let respond = Arc::new(respond);

    let app = Router::new().fallback({
        let captured = captured.clone();
        move |method: Method,
              uri: Uri,
              Query(query): Query<HashMap<String, String>>,
              headers: HeaderMap,
              body: Bytes| {
            let captured = captured.clone();
            let respond = respond.clone();
            async move {
                let request = Captured {
                    method: method.to_string(),
                    path: uri.path().to_string(),
                    query,
                    headers,
                    body: serde_json::from_slice(&body).unwrap_or(Value::Null),
                };
                let (status, body) = respond(&request);
                captured.lock().unwrap().push(request);
                (status, [(header::CONTENT_TYPE, "application/json")], body)
            }
        }
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockServer {
        url: format!("http://{addr}"),
        captured,
    }
}

pub fn config(completion_url: &str, backend_url: &str) -> AppConfig {
    AppConfig {
        completion_key: "test-completion-key".into(),
        backend_url: backend_url.into(),
        backend_key: "test-anon-key".into(),
        completion: CompletionSettings {
            url: completion_url.into(),
            model: DEFAULT_MODEL.into(),
            temperature: DEFAULT_TEMPERATURE,
        },
    }
}
