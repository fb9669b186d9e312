//! The guidance pipeline shared by every AI-backed feature.
//!
//! A request is answered first and recorded second. A failed completion means
//! nothing is written; a failed write never hides a completed answer.

use std::sync::Arc;

use civic::records::OFFICIAL_DIRECTORY_COLUMNS;
use civic::{ChatPrompt, GuidanceReply, Official, Record, SystemLog};
use tracing::{error, info, warn};

use crate::backend::{BackendClient, Select};
use crate::completion::CompletionClient;
use crate::config::AppConfig;
use crate::error::{BackendError, RequestFailed};

/// Whether a record made it into storage.
#[derive(Debug)]
pub enum PersistOutcome {
    Persisted { id: String },
    NotPersisted(BackendError),
}

impl PersistOutcome {
    pub fn into_id(self) -> Option<String> {
        match self {
            PersistOutcome::Persisted { id } => Some(id),
            PersistOutcome::NotPersisted(_) => None,
        }
    }
}

pub struct Services {
    completion: CompletionClient,
    backend: Arc<BackendClient>,
}

impl Services {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            completion: CompletionClient::new(config),
            backend: Arc::new(BackendClient::new(config)),
        }
    }

    /// Answer without recording anything.
    pub async fn respond(&self, prompt: &ChatPrompt) -> Result<GuidanceReply, RequestFailed> {
        Ok(self.completion.complete(prompt).await?.into())
    }

    /// Answer, then record `record`. The reply carries the new row's id when
    /// the insert succeeded.
    pub async fn respond_and_record<R: Record>(
        &self,
        prompt: &ChatPrompt,
        record: R,
    ) -> Result<GuidanceReply, RequestFailed> {
        let text = self.completion.complete(prompt).await?;
        let outcome = self.record(&record).await;
        Ok(GuidanceReply::recorded(text, outcome.into_id()))
    }

    /// Best-effort insert; failures are logged and reported, never raised.
    pub async fn record<R: Record>(&self, record: &R) -> PersistOutcome {
        match self.submit(record).await {
            Ok(id) => PersistOutcome::Persisted { id },
            Err(err) => {
                warn!(table = R::TABLE, error = %err, "record not persisted");
                PersistOutcome::NotPersisted(err)
            }
        }
    }

    /// Insert a record the user explicitly submitted and return its id.
    pub async fn submit<R: Record>(&self, record: &R) -> Result<String, BackendError> {
        let row = self.backend.insert(record).await?;
        let id = row
            .id()
            .map(str::to_string)
            .ok_or(BackendError::NoId { table: R::TABLE })?;
        self.audit(R::TABLE, &id);
        Ok(id)
    }

    /// Officials a moderator has verified, newest first. The ID proof column
    /// is never selected.
    pub async fn verified_officials(&self) -> Result<Vec<Official>, BackendError> {
        let select = Select::<Official>::all()
            .columns(OFFICIAL_DIRECTORY_COLUMNS)
            .eq("verified", true)
            .newest_first();
        let mut officials = self.backend.select(&select).await?;
        officials.retain(|official| official.verified);
        info!(count = officials.len(), "verified officials loaded");
        Ok(officials)
    }

    fn audit(&self, table: &'static str, id: &str) {
        let backend = Arc::clone(&self.backend);
        let entry = SystemLog::created(table, id);
        tokio::spawn(async move {
            if let Err(err) = backend.insert(&entry).await {
                error!(table, error = %err, "audit log insert failed");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{self, Captured, MockServer};
    use axum::http::StatusCode;
    use civic::{CivicIssue, IssueReport, UserFeedback};
    use serde_json::json;

    const COMPLETION_PATH: &str = "/openai/v1/chat/completions";

    fn services(server: &MockServer) -> Services {
        let completion_url = format!("{}{COMPLETION_PATH}", server.url);
        Services::new(&testing::config(&completion_url, &server.url))
    }

    fn echo_insert(request: &Captured, id: serde_json::Value) -> (StatusCode, String) {
        let mut row = request.body[0].clone();
        row["id"] = id;
        testing::created(json!([row]))
    }

    fn completion(content: &str) -> (StatusCode, String) {
        testing::ok(json!({ "choices": [{ "message": { "content": content } }] }))
    }

    fn streetlight() -> CivicIssue {
        CivicIssue::from_report(&IssueReport {
            description: "streetlight broken on Main St".into(),
            location: "Springfield".into(),
            category: String::new(),
            authority: "Municipal Corporation".into(),
        })
    }

    #[tokio::test]
    async fn civic_issue_is_answered_then_recorded() {
        let server = testing::serve(|request| match request.path.as_str() {
            COMPLETION_PATH => completion("## Next steps\nWrite to the **ward office**."),
            "/rest/v1/civic_issues" => echo_insert(request, json!("issue-1")),
            _ => echo_insert(request, json!(99)),
        })
        .await;

        let prompt = civic::prompt::civic_issue("streetlight broken on Main St", "Springfield");
        let reply = services(&server)
            .respond_and_record(&prompt, streetlight())
            .await
            .unwrap();

        assert_eq!(reply.text, "Next steps\nWrite to the ward office.");
        assert_eq!(reply.record_id.as_deref(), Some("issue-1"));
        assert!(reply
            .display()
            .ends_with("✅ Your submission has been recorded with ID: issue-1"));

        let completions = server.requests_to(COMPLETION_PATH);
        assert_eq!(completions.len(), 1);
        let system = completions[0].body["messages"][0]["content"]
            .as_str()
            .unwrap();
        assert!(system.contains("Springfield"));

        let inserts = server.requests_to("/rest/v1/civic_issues");
        assert_eq!(inserts.len(), 1);
        assert_eq!(inserts[0].body[0]["location"], "Springfield");
        assert_eq!(inserts[0].body[0]["authority"], "Municipal Corporation");
        assert_eq!(inserts[0].body[0]["category"], "Other");

        let audit = server.wait_for("/rest/v1/system_logs", 1).await;
        assert_eq!(audit.len(), 1);
        assert_eq!(audit[0].body[0]["action"], "create");
        assert_eq!(audit[0].body[0]["table_name"], "civic_issues");
        assert_eq!(audit[0].body[0]["record_id"], "issue-1");
    }

    #[tokio::test]
    async fn failed_completion_writes_nothing() {
        let server = testing::serve(|request| match request.path.as_str() {
            COMPLETION_PATH => (StatusCode::INTERNAL_SERVER_ERROR, "boom".into()),
            _ => echo_insert(request, json!(1)),
        })
        .await;

        let prompt = civic::prompt::civic_issue("x", "");
        let result = services(&server)
            .respond_and_record(&prompt, streetlight())
            .await;

        assert!(result.is_err());
        assert_eq!(civic::panel_text(result), civic::FALLBACK_MESSAGE);
        assert_eq!(server.requests().len(), 1);
    }

    #[tokio::test]
    async fn failed_insert_still_answers() {
        let server = testing::serve(|request| match request.path.as_str() {
            COMPLETION_PATH => completion("Contact the ward office."),
            _ => (StatusCode::SERVICE_UNAVAILABLE, "down".into()),
        })
        .await;

        let prompt = civic::prompt::civic_issue("x", "");
        let reply = services(&server)
            .respond_and_record(&prompt, streetlight())
            .await
            .unwrap();

        assert_eq!(reply.record_id, None);
        assert_eq!(reply.display(), "Contact the ward office.");
    }

    #[tokio::test]
    async fn record_reports_outcome() {
        let server = testing::serve(|_| testing::created(json!([{ "service_type": "legal", "rating": 4 }]))).await;

        let feedback = UserFeedback::new("legal", 4, "", "").unwrap();
        let outcome = services(&server).record(&feedback).await;
        assert!(matches!(
            outcome,
            PersistOutcome::NotPersisted(BackendError::NoId { table: "user_feedback" })
        ));
    }

    #[tokio::test]
    async fn directory_excludes_unverified_rows() {
        let server = testing::serve(|_| {
            testing::ok(json!([
                { "id": 1, "name": "A", "designation": "d", "department": "Water Board",
                  "jurisdiction": "j", "description": "x", "verified": true },
                { "id": 2, "name": "B", "designation": "d", "department": "Water Board",
                  "jurisdiction": "j", "description": "x", "verified": false }
            ]))
        })
        .await;

        let officials = services(&server).verified_officials().await.unwrap();
        assert_eq!(officials.len(), 1);
        assert_eq!(officials[0].name, "A");

        let request = &server.requests()[0];
        assert_eq!(request.query["verified"], "eq.true");
        assert!(!request.query["select"].contains("id_proof"));
    }
}
