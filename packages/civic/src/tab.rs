use serde::{Deserialize, Serialize};

use crate::ConfigStatus;

/// The seven top-level views.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tab {
    Home,
    Legal,
    Civic,
    Complaint,
    Awareness,
    CivicLens,
    About,
}

impl Tab {
    pub const ALL: [Tab; 7] = [
        Tab::Home,
        Tab::Legal,
        Tab::Civic,
        Tab::Complaint,
        Tab::Awareness,
        Tab::CivicLens,
        Tab::About,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Legal => "Legal Guidance",
            Tab::Civic => "Civic Reporting",
            Tab::Complaint => "Complaint Guidance",
            Tab::Awareness => "Awareness & Rights",
            Tab::CivicLens => "Civic Lens",
            Tab::About => "About",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Tab::Home => "home",
            Tab::Legal => "legal",
            Tab::Civic => "civic",
            Tab::Complaint => "complaint",
            Tab::Awareness => "awareness",
            Tab::CivicLens => "civic-lens",
            Tab::About => "about",
        }
    }

    /// Every view except About talks to the completion or backend services.
    pub fn requires_services(self) -> bool {
        !matches!(self, Tab::About)
    }

    /// Whether the view can be shown, or must be replaced by the
    /// configuration-required notice.
    pub fn is_available(self, status: &ConfigStatus) -> bool {
        !self.requires_services() || status.is_ready()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_about_survives_missing_config() {
        let status = ConfigStatus::missing(["SUPABASE_URL"]);
        let open: Vec<Tab> = Tab::ALL
            .into_iter()
            .filter(|tab| tab.is_available(&status))
            .collect();
        assert_eq!(open, vec![Tab::About]);
    }

    #[test]
    fn everything_open_when_ready() {
        let status = ConfigStatus::ready();
        assert!(Tab::ALL.iter().all(|tab| tab.is_available(&status)));
    }

    #[test]
    fn slugs_are_unique() {
        let mut slugs: Vec<&str> = Tab::ALL.iter().map(|tab| tab.slug()).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), Tab::ALL.len());
    }
}
