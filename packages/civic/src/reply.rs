//! What a guidance panel displays once its request settles.

use serde::{Deserialize, Serialize};

/// Shown in place of a reply whenever a request fails for any reason.
pub const FALLBACK_MESSAGE: &str = "Unable to process your request. Please try again.";

/// Sanitized completion text plus the id of the record it produced, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidanceReply {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,
}

impl GuidanceReply {
    pub fn recorded(text: String, record_id: Option<String>) -> Self {
        Self { text, record_id }
    }

    /// The reply text, followed by the submission id when one was assigned.
    pub fn display(&self) -> String {
        match &self.record_id {
            Some(id) => format!(
                "{}\n\n✅ Your submission has been recorded with ID: {id}",
                self.text
            ),
            None => self.text.clone(),
        }
    }
}

impl From<String> for GuidanceReply {
    fn from(text: String) -> Self {
        Self {
            text,
            record_id: None,
        }
    }
}

/// Panel text for a settled request: the rendered reply, or the fallback.
pub fn panel_text<T, E>(result: Result<T, E>) -> String
where
    T: Into<GuidanceReply>,
{
    match result {
        Ok(reply) => reply.into().display(),
        Err(_) => FALLBACK_MESSAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_suffix_only_when_recorded() {
        let reply = GuidanceReply::recorded("Contact the ward office.".into(), Some("42".into()));
        assert_eq!(
            reply.display(),
            "Contact the ward office.\n\n✅ Your submission has been recorded with ID: 42"
        );
        assert_eq!(
            GuidanceReply::from("Contact the ward office.".to_string()).display(),
            "Contact the ward office."
        );
    }

    #[test]
    fn failure_shows_fallback() {
        let failed: Result<String, &str> = Err("timeout");
        assert_eq!(panel_text(failed), FALLBACK_MESSAGE);

        let ok: Result<String, &str> = Ok("hello".into());
        assert_eq!(panel_text(ok), "hello");
    }
}
