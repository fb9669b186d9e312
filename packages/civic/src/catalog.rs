//! Fixed option lists shown by the forms, and the static helpline directory.

use serde::{Deserialize, Serialize};

/// One `<option>` of a select: the value sent with the form and its label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

const fn choice(value: &'static str, label: &'static str) -> Choice {
    Choice { value, label }
}

pub const LEGAL_CATEGORIES: &[Choice] = &[
    choice("general", "General"),
    choice("police", "Police & Law Enforcement"),
    choice("civic", "Civic & Municipal"),
    choice("consumer", "Consumer Rights"),
    choice("safety", "Public Safety"),
];

pub const CIVIC_CATEGORIES: &[Choice] = &[
    choice("", "Auto-detect"),
    choice("water", "Water Supply"),
    choice("electricity", "Electricity"),
    choice("roads", "Roads & Infrastructure"),
    choice("sanitation", "Sanitation & Waste"),
    choice("public-safety", "Public Safety"),
    choice("pollution", "Pollution"),
    choice("other", "Other"),
];

/// Selection value that switches the civic form to a free-text authority.
pub const OTHER_AUTHORITY: &str = "other";

pub const CIVIC_AUTHORITIES: &[Choice] = &[
    choice("", "Select Authority"),
    choice("municipal", "Municipal Corporation"),
    choice("water-board", "Water Board"),
    choice("electricity-board", "Electricity Board"),
    choice("traffic-police", "Traffic Police"),
    choice("pollution-board", "Pollution Board"),
    choice(OTHER_AUTHORITY, "Other (specify)"),
];

pub const COMPLAINT_ISSUE_TYPES: &[Choice] = &[
    choice("general", "General Query"),
    choice("escalation", "Escalation Process"),
    choice("timeline", "Timeline & Follow-up"),
    choice("documentation", "Documentation Required"),
    choice("rights", "Complainant Rights"),
];

pub const AWARENESS_TOPICS: &[Choice] = &[
    choice("fundamental-rights", "Fundamental Rights"),
    choice("civic-duties", "Civic Duties & Responsibilities"),
    choice("government-services", "Government Services"),
    choice("public-participation", "Public Participation"),
    choice("institutional-roles", "Institutional Roles"),
    choice("grievance-redressal", "Grievance Redressal Systems"),
];

pub const LENS_CATEGORIES: &[Choice] = &[
    choice("garbage", "Garbage Dumping"),
    choice("drainage", "Open Drainage"),
    choice("roads", "Damaged Roads"),
    choice("streetlight", "Broken Streetlights"),
    choice("water", "Water Leakage"),
    choice("safety", "Public Safety Hazard"),
];

/// Authorities offered by Civic Lens; also the departments an official can
/// register under.
pub const DEPARTMENTS: &[&str] = &[
    "Municipal Corporation",
    "Panchayat Office",
    "Sanitation Department",
    "Water Board",
    "Electricity Board",
    "Local Civic Body",
    "Public Works Department",
    "Other",
];

/// Label for a select value, or `None` for values not in `choices`.
pub fn label_of(choices: &[Choice], value: &str) -> Option<&'static str> {
    choices.iter().find(|c| c.value == value).map(|c| c.label)
}

/// The authority text stored with a civic issue.
///
/// `other` takes the user's own text; a known selection is stored by its
/// label. Anything left blank is defaulted when the record is built.
pub fn resolve_authority(selection: &str, custom: &str) -> String {
    if selection == OTHER_AUTHORITY {
        return custom.trim().to_string();
    }
    match label_of(CIVIC_AUTHORITIES, selection) {
        Some(_) if selection.is_empty() => String::new(),
        Some(label) => label.to_string(),
        None => selection.to_string(),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HelplineCategory {
    Emergency,
    Police,
    Civic,
    Consumer,
    Social,
}

impl HelplineCategory {
    pub const ALL: [HelplineCategory; 5] = [
        HelplineCategory::Emergency,
        HelplineCategory::Police,
        HelplineCategory::Civic,
        HelplineCategory::Consumer,
        HelplineCategory::Social,
    ];

    pub fn label(self) -> &'static str {
        match self {
            HelplineCategory::Emergency => "Emergency Services",
            HelplineCategory::Police => "Police & Law",
            HelplineCategory::Civic => "Civic & Municipal",
            HelplineCategory::Consumer => "Consumer & Grievances",
            HelplineCategory::Social => "Mental Health & Social",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            HelplineCategory::Emergency => "🚨",
            HelplineCategory::Police => "👮",
            HelplineCategory::Civic => "🏙️",
            HelplineCategory::Consumer => "🧾",
            HelplineCategory::Social => "🧠",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Helpline {
    pub name: &'static str,
    /// Dialable number, or a pointer such as `State DISCOM` where it varies.
    pub number: &'static str,
    pub description: &'static str,
    pub category: HelplineCategory,
}

const fn helpline(
    category: HelplineCategory,
    name: &'static str,
    number: &'static str,
    description: &'static str,
) -> Helpline {
    Helpline {
        name,
        number,
        description,
        category,
    }
}

use HelplineCategory::{Civic, Consumer, Emergency, Police, Social};

pub const HELPLINES: &[Helpline] = &[
    helpline(Emergency, "Police", "112", "Emergency police assistance"),
    helpline(Emergency, "Ambulance", "108", "Medical emergency"),
    helpline(Emergency, "Fire", "101", "Fire emergency"),
    helpline(Emergency, "Disaster Management", "108 / 112", "Natural disasters"),
    helpline(Police, "Women Helpline", "181", "Women in distress"),
    helpline(Police, "Cyber Crime", "1930", "Online fraud, cyber crimes"),
    helpline(Police, "Child Helpline", "1098", "Child abuse, protection"),
    helpline(Police, "Senior Citizen", "14567", "Elderly assistance"),
    helpline(Civic, "Swachh Bharat", "1969", "Cleanliness complaints"),
    helpline(Civic, "Municipal Corporation", "Local", "Civic issues (varies by city)"),
    helpline(Civic, "Water Supply", "State Jal Board", "Water issues (varies by state)"),
    helpline(Civic, "Electricity", "State DISCOM", "Power issues (varies by state)"),
    helpline(Consumer, "Consumer Helpline", "1915", "Consumer complaints"),
    helpline(Consumer, "Consumer WhatsApp", "8800001915", "WhatsApp support"),
    helpline(Consumer, "CPGRAMS", "Online Portal", "Central govt grievances"),
    helpline(Social, "Mental Health (Kiran)", "1800-599-0019", "Mental health support"),
    helpline(Social, "Suicide Prevention", "91-22-27546669", "Crisis intervention"),
];

/// Directory entries for one category, or all of them.
pub fn helplines(filter: Option<HelplineCategory>) -> impl Iterator<Item = &'static Helpline> {
    HELPLINES
        .iter()
        .filter(move |h| filter.is_none_or(|category| h.category == category))
}

impl Helpline {
    /// Whether the number can be put behind a `tel:` link.
    pub fn is_dialable(&self) -> bool {
        self.number
            .chars()
            .all(|c| c.is_ascii_digit() || c == '-')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authority_resolution() {
        assert_eq!(resolve_authority("municipal", ""), "Municipal Corporation");
        assert_eq!(resolve_authority("other", "  Ward 9 office "), "Ward 9 office");
        assert_eq!(resolve_authority("", "ignored"), "");
        assert_eq!(resolve_authority("Water Board", ""), "Water Board");
    }

    #[test]
    fn helpline_filter() {
        assert_eq!(helplines(None).count(), HELPLINES.len());
        let emergency: Vec<_> = helplines(Some(Emergency)).map(|h| h.number).collect();
        assert_eq!(emergency, ["112", "108", "101", "108 / 112"]);
        assert!(helplines(Some(Social)).all(|h| h.category == Social));
    }

    #[test]
    fn dialable_numbers() {
        let dialable: Vec<_> = helplines(Some(Civic)).filter(|h| h.is_dialable()).collect();
        assert_eq!(dialable.len(), 1);
        assert_eq!(dialable[0].number, "1969");
    }

    #[test]
    fn labels() {
        assert_eq!(label_of(LEGAL_CATEGORIES, "police"), Some("Police & Law Enforcement"));
        assert_eq!(label_of(LEGAL_CATEGORIES, "nope"), None);
    }
}
