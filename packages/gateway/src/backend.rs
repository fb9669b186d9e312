//! PostgREST client for the storage backend.
//!
//! Rows are addressed as `{url}/rest/v1/{table}` with the anon key sent both as
//! `apikey` and as a bearer token. Inserts ask for the created row back so the
//! backend-assigned id can be shown to the user.

use std::marker::PhantomData;

use civic::Record;
use reqwest::RequestBuilder;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::error::BackendError;

/// A read against one table: a column list, at most one equality filter, and
/// an optional newest-first ordering.
pub struct Select<R> {
    columns: Option<String>,
    filter: Option<(&'static str, String)>,
    newest_first: bool,
    _record: PhantomData<R>,
}

impl<R: Record> Select<R> {
    pub fn all() -> Self {
        Self {
            columns: None,
            filter: None,
            newest_first: false,
            _record: PhantomData,
        }
    }

    pub fn columns(mut self, columns: &[&str]) -> Self {
        self.columns = Some(columns.join(","));
        self
    }

    pub fn eq(mut self, column: &'static str, value: impl ToString) -> Self {
        self.filter = Some((column, format!("eq.{}", value.to_string())));
        self
    }

    pub fn newest_first(mut self) -> Self {
        self.newest_first = true;
        self
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![(
            "select",
            self.columns.clone().unwrap_or_else(|| "*".to_string()),
        )];
        if let Some((column, value)) = &self.filter {
            query.push((*column, value.clone()));
        }
        if self.newest_first {
            query.push(("order", "created_at.desc".to_string()));
        }
        query
    }
}

pub struct BackendClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl BackendClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.backend_url.trim_end_matches('/').to_string(),
            api_key: config.backend_key.clone(),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.base_url)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    /// Insert one row and return it as stored, id and timestamp included.
    pub async fn insert<R: Record>(&self, record: &R) -> Result<R, BackendError> {
        debug!(table = R::TABLE, "inserting row");
        let request = self
            .client
            .post(self.table_url(R::TABLE))
            .header("Prefer", "return=representation")
            .json(&[record]);
        let rows: Vec<R> = self.send(request).await?;

        let row = rows
            .into_iter()
            .next()
            .ok_or(BackendError::NoRow { table: R::TABLE })?;
        info!(table = R::TABLE, id = row.id().unwrap_or("-"), "row inserted");
        Ok(row)
    }

    pub async fn select<R: Record>(&self, select: &Select<R>) -> Result<Vec<R>, BackendError> {
        let request = self
            .client
            .get(self.table_url(R::TABLE))
            .query(&select.query());
        let rows: Vec<R> = self.send(request).await?;
        debug!(table = R::TABLE, count = rows.len(), "rows selected");
        Ok(rows)
    }

    async fn send<T: serde::de::DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, BackendError> {
        let resp = self.authorized(request).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(BackendError::Server {
                status: status.as_u16(),
                body,
            });
        }
        let raw = resp.text().await?;
        Ok(serde_json::from_str(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{self, MockServer};
    use axum::http::StatusCode;
    use civic::{LegalQuery, Official};
    use serde_json::json;

    fn client(server: &MockServer) -> BackendClient {
        BackendClient::new(&testing::config(&server.url, &format!("{}/", server.url)))
    }

    #[tokio::test]
    async fn insert_posts_single_row_array() {
        let server = testing::serve(|request| {
            let mut row = request.body[0].clone();
            row["id"] = json!(17);
            row["created_at"] = json!("2026-10-19T08:00:00Z");
            testing::created(json!([row]))
        })
        .await;

        let stored = client(&server)
            .insert(&LegalQuery::new("How do I file an FIR?", "police"))
            .await
            .unwrap();
        assert_eq!(stored.id(), Some("17"));
        assert_eq!(stored.created_at.as_deref(), Some("2026-10-19T08:00:00Z"));

        let requests = server.requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.method, "POST");
        assert_eq!(request.path, "/rest/v1/legal_queries");
        assert_eq!(request.header("apikey"), Some("test-anon-key"));
        assert_eq!(request.header("authorization"), Some("Bearer test-anon-key"));
        assert_eq!(request.header("prefer"), Some("return=representation"));
        assert_eq!(
            request.body,
            json!([{ "query": "How do I file an FIR?", "category": "police", "urgency": "Normal" }])
        );
    }

    #[tokio::test]
    async fn empty_insert_response_is_no_row() {
        let server = testing::serve(|_| testing::created(json!([]))).await;

        let err = client(&server)
            .insert(&LegalQuery::new("q", ""))
            .await
            .unwrap_err();
        assert!(matches!(err, BackendError::NoRow { table: "legal_queries" }));
    }

    #[tokio::test]
    async fn rejected_insert_keeps_status_and_body() {
        let server = testing::serve(|_| {
            (
                StatusCode::UNAUTHORIZED,
                json!({ "message": "Invalid API key" }).to_string(),
            )
        })
        .await;

        let err = client(&server)
            .insert(&LegalQuery::new("q", ""))
            .await
            .unwrap_err();
        match err {
            BackendError::Server { status, body } => {
                assert_eq!(status, 401);
                assert!(body.contains("Invalid API key"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn select_applies_filter_and_order() {
        let server = testing::serve(|_| {
            testing::ok(json!([{
                "id": "a1", "name": "A. Rao", "designation": "Ward Officer",
                "department": "Municipal Corporation", "jurisdiction": "Ward 12",
                "phone": null, "email": "rao@example.org",
                "description": "Sanitation", "verified": true
            }]))
        })
        .await;

        let select = Select::<Official>::all()
            .columns(&["id", "name"])
            .eq("verified", true)
            .newest_first();
        let rows = client(&server).select(&select).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].verified);
        assert_eq!(rows[0].email.as_deref(), Some("rao@example.org"));

        let request = &server.requests()[0];
        assert_eq!(request.method, "GET");
        assert_eq!(request.path, "/rest/v1/officials");
        assert_eq!(request.query["select"], "id,name");
        assert_eq!(request.query["verified"], "eq.true");
        assert_eq!(request.query["order"], "created_at.desc");
    }

    #[test]
    fn default_select_is_star() {
        let query = Select::<LegalQuery>::all().query();
        assert_eq!(query, vec![("select", "*".to_string())]);
    }
}
