//! # API crate: fullstack server functions for Civic Justice
//!
//! Every public `async fn` in this file is a Dioxus server function, annotated with
//! `#[get(...)]` or `#[post(...)]` and compiled twice: once with the real server logic
//! (behind `#[cfg(feature = "server")]`) and once as a thin client stub that forwards
//! the call over HTTP.
//!
//! Server bodies receive the shared [`gateway::AppState`] through an
//! `axum::Extension` installed by the `web` crate. They never read the environment.
//!
//! - **Configuration**: `config_status`
//! - **Guidance**: `welcome_message`, `legal_guidance`, `report_civic_issue`,
//!   `complaint_guidance`, `helpline_guidance`, `awareness_info`, `suggest_authority`
//! - **Submissions**: `submit_feedback`, `register_official`
//! - **Directory**: `verified_officials`
//!
//! Failures reach the client as a `ServerFnError` carrying only a fixed sentence;
//! causes stay in the server log.

use dioxus::prelude::*;

pub use civic::{ConfigStatus, GuidanceReply, Official, OfficialRegistration};

/// Shown when an explicit submission could not be stored.
pub const SUBMISSION_FAILED: &str = "Your submission could not be saved. Please try again.";

#[cfg(feature = "server")]
mod server {
    use dioxus::prelude::ServerFnError;
    use gateway::{AppState, Services};

    pub type State = axum::Extension<AppState>;

    pub fn services(state: &AppState) -> Result<&Services, ServerFnError> {
        state.services().ok_or_else(|| {
            tracing::warn!("guidance requested while services are not configured");
            ServerFnError::new(civic::FALLBACK_MESSAGE)
        })
    }

    /// The completion client has already logged the cause.
    pub fn guidance_failed(_: gateway::RequestFailed) -> ServerFnError {
        ServerFnError::new(civic::FALLBACK_MESSAGE)
    }

    pub fn submission_failed(err: impl std::fmt::Display) -> ServerFnError {
        tracing::error!(error = %err, "submission failed");
        ServerFnError::new(super::SUBMISSION_FAILED)
    }
}

/// Which required configuration keys are missing, if any.
#[cfg(feature = "server")]
#[get("/api/config/status", state: server::State)]
pub async fn config_status() -> Result<ConfigStatus, ServerFnError> {
    Ok(state.status().clone())
}

#[cfg(not(feature = "server"))]
#[get("/api/config/status")]
pub async fn config_status() -> Result<ConfigStatus, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// AI-written welcome banner for the home page.
#[cfg(feature = "server")]
#[get("/api/guidance/welcome", state: server::State)]
pub async fn welcome_message() -> Result<String, ServerFnError> {
    let services = server::services(&state)?;
    let reply = services
        .respond(&civic::prompt::welcome())
        .await
        .map_err(server::guidance_failed)?;
    Ok(reply.text)
}

#[cfg(not(feature = "server"))]
#[get("/api/guidance/welcome")]
pub async fn welcome_message() -> Result<String, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Legal procedure guidance; the question is recorded.
#[cfg(feature = "server")]
#[post("/api/guidance/legal", state: server::State)]
pub async fn legal_guidance(query: String, category: String) -> Result<GuidanceReply, ServerFnError> {
    let services = server::services(&state)?;
    let prompt = civic::prompt::legal_guidance(&query, &category);
    services
        .respond_and_record(&prompt, civic::LegalQuery::new(&query, &category))
        .await
        .map_err(server::guidance_failed)
}

#[cfg(not(feature = "server"))]
#[post("/api/guidance/legal")]
pub async fn legal_guidance(query: String, category: String) -> Result<GuidanceReply, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Civic issue triage; the report is recorded as a civic issue.
#[cfg(feature = "server")]
#[post("/api/guidance/civic-issue", state: server::State)]
pub async fn report_civic_issue(
    description: String,
    location: String,
    category: String,
    authority: String,
) -> Result<GuidanceReply, ServerFnError> {
    let services = server::services(&state)?;
    let report = civic::IssueReport {
        description,
        location,
        category,
        authority,
    };
    let prompt = civic::prompt::civic_issue(&report.description, &report.location);
    services
        .respond_and_record(&prompt, civic::CivicIssue::from_report(&report))
        .await
        .map_err(server::guidance_failed)
}

#[cfg(not(feature = "server"))]
#[post("/api/guidance/civic-issue")]
pub async fn report_civic_issue(
    description: String,
    location: String,
    category: String,
    authority: String,
) -> Result<GuidanceReply, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Complaint process guidance; the question is recorded.
#[cfg(feature = "server")]
#[post("/api/guidance/complaint", state: server::State)]
pub async fn complaint_guidance(
    issue_type: String,
    question: String,
) -> Result<GuidanceReply, ServerFnError> {
    let services = server::services(&state)?;
    let prompt = civic::prompt::complaint_guidance(&question, &issue_type);
    services
        .respond_and_record(&prompt, civic::ComplaintGuidance::new(&issue_type, &question))
        .await
        .map_err(server::guidance_failed)
}

#[cfg(not(feature = "server"))]
#[post("/api/guidance/complaint")]
pub async fn complaint_guidance(
    issue_type: String,
    question: String,
) -> Result<GuidanceReply, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Helpline suggestions for a described problem. Not recorded.
#[cfg(feature = "server")]
#[post("/api/guidance/helpline", state: server::State)]
pub async fn helpline_guidance(
    question: String,
    location: String,
) -> Result<GuidanceReply, ServerFnError> {
    let services = server::services(&state)?;
    services
        .respond(&civic::prompt::helpline_finder(&question, &location))
        .await
        .map_err(server::guidance_failed)
}

#[cfg(not(feature = "server"))]
#[post("/api/guidance/helpline")]
pub async fn helpline_guidance(
    question: String,
    location: String,
) -> Result<GuidanceReply, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Rights and civic duties education; the question is recorded.
#[cfg(feature = "server")]
#[post("/api/guidance/awareness", state: server::State)]
pub async fn awareness_info(topic: String, question: String) -> Result<GuidanceReply, ServerFnError> {
    let services = server::services(&state)?;
    let prompt = civic::prompt::awareness(&topic, &question);
    services
        .respond_and_record(&prompt, civic::AwarenessQuery::new(&topic, &question))
        .await
        .map_err(server::guidance_failed)
}

#[cfg(not(feature = "server"))]
#[post("/api/guidance/awareness")]
pub async fn awareness_info(topic: String, question: String) -> Result<GuidanceReply, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Suggested authority and category for a Civic Lens report. Not recorded.
#[cfg(feature = "server")]
#[post("/api/guidance/civic-lens", state: server::State)]
pub async fn suggest_authority(
    description: String,
    location: String,
) -> Result<GuidanceReply, ServerFnError> {
    let services = server::services(&state)?;
    services
        .respond(&civic::prompt::lens_suggestion(&description, &location))
        .await
        .map_err(server::guidance_failed)
}

#[cfg(not(feature = "server"))]
#[post("/api/guidance/civic-lens")]
pub async fn suggest_authority(
    description: String,
    location: String,
) -> Result<GuidanceReply, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Store a star rating with optional comments. Returns the new row id.
#[cfg(feature = "server")]
#[post("/api/feedback", state: server::State)]
pub async fn submit_feedback(
    service_type: String,
    rating: u8,
    feedback: String,
    suggestions: String,
) -> Result<String, ServerFnError> {
    let feedback = civic::UserFeedback::new(&service_type, rating, &feedback, &suggestions)
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    let services = server::services(&state)?;
    services
        .submit(&feedback)
        .await
        .map_err(server::submission_failed)
}

#[cfg(not(feature = "server"))]
#[post("/api/feedback")]
pub async fn submit_feedback(
    service_type: String,
    rating: u8,
    feedback: String,
    suggestions: String,
) -> Result<String, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// The verified official directory.
#[cfg(feature = "server")]
#[get("/api/officials", state: server::State)]
pub async fn verified_officials() -> Result<Vec<Official>, ServerFnError> {
    let services = server::services(&state)?;
    services.verified_officials().await.map_err(|e| {
        tracing::warn!(error = %e, "official directory unavailable");
        ServerFnError::new("Unable to load officials. Please try again.")
    })
}

#[cfg(not(feature = "server"))]
#[get("/api/officials")]
pub async fn verified_officials() -> Result<Vec<Official>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Register an official for moderator review. Returns the new row id.
#[cfg(feature = "server")]
#[post("/api/officials", state: server::State)]
pub async fn register_official(registration: OfficialRegistration) -> Result<String, ServerFnError> {
    let official =
        Official::register(&registration).map_err(|e| ServerFnError::new(e.to_string()))?;
    let services = server::services(&state)?;
    let id = services
        .submit(&official)
        .await
        .map_err(server::submission_failed)?;
    tracing::info!(id = %id, department = %official.department, "official registered");
    Ok(id)
}

#[cfg(not(feature = "server"))]
#[post("/api/officials")]
pub async fn register_official(registration: OfficialRegistration) -> Result<String, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
