//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

pub const VIEWS_CSS: Asset = asset!("/assets/views.css");

mod navbar;
pub use navbar::{Navbar, TabIcon};

mod config;
pub use config::{use_config, ConfigProvider, ConfigRequired, ServiceGate};

mod guidance;
pub use guidance::{use_guidance, GuidanceRequest, GuidanceResponse};

mod form;
pub use form::{ChoiceSelect, SubmitButton};

mod feedback;
pub use feedback::{FeedbackButton, FeedbackModal};
