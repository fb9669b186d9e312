//! Result of the startup configuration check, as seen by the client.

use serde::{Deserialize, Serialize};

/// Environment keys the AI-backed features cannot run without.
pub const REQUIRED_KEYS: [&str; 3] = ["GROQ_API_KEY", "SUPABASE_URL", "SUPABASE_ANON_KEY"];

/// Which required keys were missing when the server started.
///
/// The values themselves never cross to the client.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigStatus {
    pub missing: Vec<String>,
}

impl ConfigStatus {
    pub fn ready() -> Self {
        Self::default()
    }

    pub fn missing(keys: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            missing: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Status used when the check itself could not be performed.
    pub fn unavailable() -> Self {
        Self::missing(REQUIRED_KEYS)
    }

    pub fn is_ready(&self) -> bool {
        self.missing.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readiness() {
        assert!(ConfigStatus::ready().is_ready());
        assert!(!ConfigStatus::missing(["GROQ_API_KEY"]).is_ready());
        assert_eq!(ConfigStatus::unavailable().missing.len(), REQUIRED_KEYS.len());
    }
}
