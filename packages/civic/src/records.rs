//! # Backend records
//!
//! One struct per backend table. Records built on the client carry `id: None`
//! and `created_at: None`; both are omitted from insert bodies and only ever
//! filled in from rows the backend returns.
//!
//! | Struct | Table |
//! |--------|-------|
//! | [`CivicIssue`] | `civic_issues` |
//! | [`LegalQuery`] | `legal_queries` |
//! | [`ComplaintGuidance`] | `complaint_guidance` |
//! | [`AwarenessQuery`] | `awareness_queries` |
//! | [`Official`] | `officials` |
//! | [`UserFeedback`] | `user_feedback` |
//! | [`SystemLog`] | `system_logs` |
//!
//! Validation that must happen before any request is issued lives here too:
//! [`Rating`] only admits 1 to 5, and [`Official::register`] checks the
//! registration form.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::DEPARTMENTS;
use crate::media;

/// Urgency recorded for guidance requests made from the forms.
pub const NORMAL_URGENCY: &str = "Normal";

const TITLE_LIMIT: usize = 100;

/// A row type stored in one backend table.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    const TABLE: &'static str;

    /// Backend-assigned identifier, present only on returned rows.
    fn id(&self) -> Option<&str>;
}

macro_rules! record {
    ($ty:ty, $table:literal) => {
        impl Record for $ty {
            const TABLE: &'static str = $table;

            fn id(&self) -> Option<&str> {
                self.id.as_deref()
            }
        }
    };
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("unknown department {0:?}")]
    UnknownDepartment(String),
}

/// Identifiers may come back as UUID strings or as integers depending on the
/// table definition; both are kept as text.
mod record_id {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
            Raw::Text(text) => text,
            Raw::Number(n) => n.to_string(),
        }))
    }
}

/// A civic issue report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CivicIssue {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "record_id::deserialize")]
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub location: String,
    pub category: String,
    pub authority: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// The civic reporting form as submitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IssueReport {
    pub description: String,
    pub location: String,
    pub category: String,
    /// Already resolved: a catalog label or the user's own text.
    pub authority: String,
}

impl CivicIssue {
    /// Build the row for a report, filling the defaults for optional fields.
    pub fn from_report(report: &IssueReport) -> Self {
        Self {
            id: None,
            title: title_from(&report.description),
            description: report.description.clone(),
            location: non_blank_or(&report.location, "Not specified"),
            category: non_blank_or(&report.category, "Other"),
            authority: non_blank_or(&report.authority, "Municipal Corporation"),
            status: None,
            created_at: None,
        }
    }
}

/// A legal guidance question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegalQuery {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "record_id::deserialize")]
    pub id: Option<String>,
    pub query: String,
    pub category: String,
    pub urgency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl LegalQuery {
    pub fn new(query: &str, category: &str) -> Self {
        Self {
            id: None,
            query: query.to_string(),
            category: non_blank_or(category, "general"),
            urgency: NORMAL_URGENCY.to_string(),
            created_at: None,
        }
    }
}

/// A complaint process guidance request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplaintGuidance {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "record_id::deserialize")]
    pub id: Option<String>,
    pub issue_type: String,
    pub description: String,
    pub urgency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl ComplaintGuidance {
    pub fn new(issue_type: &str, description: &str) -> Self {
        Self {
            id: None,
            issue_type: non_blank_or(issue_type, "general"),
            description: description.to_string(),
            urgency: NORMAL_URGENCY.to_string(),
            created_at: None,
        }
    }
}

/// A rights-awareness question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AwarenessQuery {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "record_id::deserialize")]
    pub id: Option<String>,
    pub topic: String,
    pub query: String,
    pub user_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl AwarenessQuery {
    pub fn new(topic: &str, question: &str) -> Self {
        let query = if question.trim().is_empty() {
            format!("General information about {topic}")
        } else {
            question.to_string()
        };
        Self {
            id: None,
            topic: topic.to_string(),
            query,
            user_type: "General".to_string(),
            created_at: None,
        }
    }
}

/// A government official listed in the directory.
///
/// Only officials with `verified == true` are shown to citizens. The flag is
/// set by moderators outside this application; registrations always start
/// unverified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Official {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "record_id::deserialize")]
    pub id: Option<String>,
    pub name: String,
    pub designation: String,
    pub department: String,
    pub jurisdiction: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub description: String,
    #[serde(default)]
    pub verified: bool,
    /// The uploaded government ID as a `data:` URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_proof_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Columns safe to send to citizens; the ID proof never leaves the backend.
pub const OFFICIAL_DIRECTORY_COLUMNS: &[&str] = &[
    "id",
    "name",
    "designation",
    "department",
    "jurisdiction",
    "phone",
    "email",
    "description",
    "verified",
    "created_at",
];

/// The official registration form as submitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OfficialRegistration {
    pub name: String,
    pub designation: String,
    pub department: String,
    pub jurisdiction: String,
    pub phone: String,
    pub email: String,
    pub description: String,
    pub id_proof_name: String,
    pub id_proof: Vec<u8>,
}

impl Official {
    /// Validate a registration and build the unverified row for it.
    pub fn register(registration: &OfficialRegistration) -> Result<Self, RecordError> {
        let required = [
            ("name", &registration.name),
            ("designation", &registration.designation),
            ("department", &registration.department),
            ("jurisdiction", &registration.jurisdiction),
            ("description", &registration.description),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(RecordError::MissingField(field));
            }
        }
        let department = registration.department.trim();
        if !DEPARTMENTS.contains(&department) {
            return Err(RecordError::UnknownDepartment(department.to_string()));
        }
        if registration.id_proof.is_empty() {
            return Err(RecordError::MissingField("id proof"));
        }

        Ok(Self {
            id: None,
            name: registration.name.trim().to_string(),
            designation: registration.designation.trim().to_string(),
            department: department.to_string(),
            jurisdiction: registration.jurisdiction.trim().to_string(),
            phone: optional(&registration.phone),
            email: optional(&registration.email),
            description: registration.description.trim().to_string(),
            verified: false,
            id_proof_url: Some(media::data_url(
                &registration.id_proof_name,
                &registration.id_proof,
            )),
            created_at: None,
        })
    }
}

/// A star rating between 1 and 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MAX: u8 = 5;

    pub fn new(stars: u8) -> Result<Self, RecordError> {
        if (1..=Self::MAX).contains(&stars) {
            Ok(Self(stars))
        } else {
            Err(RecordError::InvalidRating(stars))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = RecordError;

    fn try_from(stars: u8) -> Result<Self, Self::Error> {
        Self::new(stars)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

/// Feedback on one of the services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserFeedback {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "record_id::deserialize")]
    pub id: Option<String>,
    pub service_type: String,
    pub rating: Rating,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl UserFeedback {
    pub fn new(
        service_type: &str,
        stars: u8,
        feedback: &str,
        suggestions: &str,
    ) -> Result<Self, RecordError> {
        Ok(Self {
            id: None,
            service_type: service_type.to_string(),
            rating: Rating::new(stars)?,
            feedback: optional(feedback),
            suggestions: optional(suggestions),
            created_at: None,
        })
    }
}

/// Audit entry written after a record is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemLog {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "record_id::deserialize")]
    pub id: Option<String>,
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl SystemLog {
    pub fn created(table: &str, record_id: &str) -> Self {
        Self {
            id: None,
            action: "create".to_string(),
            table_name: Some(table.to_string()),
            record_id: Some(record_id.to_string()),
            details: None,
            created_at: None,
        }
    }
}

record!(CivicIssue, "civic_issues");
record!(LegalQuery, "legal_queries");
record!(ComplaintGuidance, "complaint_guidance");
record!(AwarenessQuery, "awareness_queries");
record!(Official, "officials");
record!(UserFeedback, "user_feedback");
record!(SystemLog, "system_logs");

/// First 100 characters of the description, with an ellipsis when cut.
fn title_from(description: &str) -> String {
    let mut chars = description.chars();
    let title: String = chars.by_ref().take(TITLE_LIMIT).collect();
    if chars.next().is_some() {
        format!("{title}...")
    } else {
        title
    }
}

fn non_blank_or(value: &str, default: &str) -> String {
    if value.trim().is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rating_accepts_one_to_five_only() {
        assert_eq!(Rating::new(0), Err(RecordError::InvalidRating(0)));
        assert_eq!(Rating::new(6), Err(RecordError::InvalidRating(6)));
        for stars in 1..=5 {
            assert_eq!(Rating::new(stars).map(Rating::get), Ok(stars));
        }
    }

    #[test]
    fn rating_is_checked_when_deserializing() {
        assert!(serde_json::from_value::<Rating>(json!(0)).is_err());
        assert!(serde_json::from_value::<Rating>(json!(7)).is_err());
        assert_eq!(serde_json::from_value::<Rating>(json!(4)).unwrap().get(), 4);
    }

    #[test]
    fn feedback_without_rating_is_rejected() {
        assert!(UserFeedback::new("legal", 0, "great", "").is_err());

        let feedback = UserFeedback::new("legal", 5, "  great  ", "").unwrap();
        assert_eq!(feedback.feedback.as_deref(), Some("great"));
        assert!(feedback.suggestions.is_none());
        let body = serde_json::to_value(&feedback).unwrap();
        assert_eq!(
            body,
            json!({ "service_type": "legal", "rating": 5, "feedback": "great" })
        );
    }

    #[test]
    fn issue_from_report_fills_defaults() {
        let issue = CivicIssue::from_report(&IssueReport {
            description: "streetlight broken on Main St".into(),
            ..Default::default()
        });
        assert_eq!(issue.title, "streetlight broken on Main St");
        assert_eq!(issue.location, "Not specified");
        assert_eq!(issue.category, "Other");
        assert_eq!(issue.authority, "Municipal Corporation");
    }

    #[test]
    fn long_titles_are_truncated_on_char_boundaries() {
        let description = "é".repeat(150);
        let issue = CivicIssue::from_report(&IssueReport {
            description: description.clone(),
            ..Default::default()
        });
        assert_eq!(issue.title, format!("{}...", "é".repeat(100)));
        assert_eq!(issue.description, description);

        let exact = "x".repeat(100);
        assert_eq!(title_from(&exact), exact);
    }

    #[test]
    fn insert_body_omits_backend_assigned_fields() {
        let body = serde_json::to_value(LegalQuery::new("How do I file an FIR?", "police")).unwrap();
        assert_eq!(
            body,
            json!({ "query": "How do I file an FIR?", "category": "police", "urgency": "Normal" })
        );
    }

    #[test]
    fn returned_ids_may_be_numbers_or_strings() {
        let row: LegalQuery = serde_json::from_value(json!({
            "id": 42, "query": "q", "category": "general", "urgency": "Normal",
            "created_at": "2026-01-01T00:00:00Z"
        }))
        .unwrap();
        assert_eq!(row.id(), Some("42"));

        let row: CivicIssue = serde_json::from_value(json!({
            "id": "7f0c", "title": "t", "description": "d", "location": "l",
            "category": "c", "authority": "a", "status": null
        }))
        .unwrap();
        assert_eq!(row.id(), Some("7f0c"));
        assert!(row.status.is_none());
    }

    #[test]
    fn awareness_query_text_defaults_to_topic() {
        let query = AwarenessQuery::new("civic-duties", "");
        assert_eq!(query.query, "General information about civic-duties");
        assert_eq!(query.user_type, "General");
    }

    #[test]
    fn official_registration_is_validated() {
        let mut registration = OfficialRegistration {
            name: "A. Rao".into(),
            designation: "Ward Officer".into(),
            department: "Municipal Corporation".into(),
            jurisdiction: "Ward 12".into(),
            description: "Handles sanitation complaints".into(),
            ..Default::default()
        };
        assert_eq!(
            Official::register(&registration),
            Err(RecordError::MissingField("id proof"))
        );

        registration.id_proof_name = "badge.png".into();
        registration.id_proof = b"hi!".to_vec();
        let official = Official::register(&registration).unwrap();
        assert!(!official.verified);
        assert_eq!(official.id_proof_url.as_deref(), Some("data:image/png;base64,aGkh"));
        assert!(official.phone.is_none());

        let body = serde_json::to_value(&official).unwrap();
        assert_eq!(body["id_proof_url"], "data:image/png;base64,aGkh");
        assert!(body.get("id_proof").is_none());

        registration.jurisdiction = "  ".into();
        assert_eq!(
            Official::register(&registration),
            Err(RecordError::MissingField("jurisdiction"))
        );
    }

    #[test]
    fn official_department_is_trimmed_and_checked() {
        let mut registration = OfficialRegistration {
            name: "B. Iyer".into(),
            designation: "Assistant Engineer".into(),
            department: " Water Board ".into(),
            jurisdiction: "Zone 4".into(),
            description: "Water supply".into(),
            id_proof_name: "id.pdf".into(),
            id_proof: vec![1, 2],
            ..Default::default()
        };
        assert_eq!(Official::register(&registration).unwrap().department, "Water Board");

        registration.department = "Ministry of Magic".into();
        assert_eq!(
            Official::register(&registration),
            Err(RecordError::UnknownDepartment("Ministry of Magic".into()))
        );
    }

    #[test]
    fn directory_rows_default_to_unverified() {
        let official: Official = serde_json::from_value(json!({
            "id": "1", "name": "n", "designation": "d", "department": "Water Board",
            "jurisdiction": "j", "description": "x"
        }))
        .unwrap();
        assert!(!official.verified);
        assert!(official.id_proof_url.is_none());
    }

    #[test]
    fn tables() {
        assert_eq!(CivicIssue::TABLE, "civic_issues");
        assert_eq!(SystemLog::TABLE, "system_logs");
        assert_eq!(UserFeedback::TABLE, "user_feedback");
    }
}
