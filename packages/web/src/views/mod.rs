//! Route targets. Each one puts the shared view behind the configuration gate.

use civic::Tab;
use dioxus::prelude::*;
use ui::views::{
    AboutView, AwarenessRightsView, CivicLensView, CivicReportingView, ComplaintGuidanceView,
    HomeView, LegalGuidanceView,
};
use ui::ServiceGate;

use crate::Route;

mod shell;
pub use shell::Shell;

#[component]
pub fn Home() -> Element {
    let nav = use_navigator();

    rsx! {
        ServiceGate {
            tab: Tab::Home,
            HomeView {
                on_navigate: move |tab: Tab| {
                    nav.push(Route::from(tab));
                },
            }
        }
    }
}

#[component]
pub fn Legal() -> Element {
    rsx! {
        ServiceGate { tab: Tab::Legal, LegalGuidanceView {} }
    }
}

#[component]
pub fn Civic() -> Element {
    rsx! {
        ServiceGate { tab: Tab::Civic, CivicReportingView {} }
    }
}

#[component]
pub fn Complaint() -> Element {
    rsx! {
        ServiceGate { tab: Tab::Complaint, ComplaintGuidanceView {} }
    }
}

#[component]
pub fn Awareness() -> Element {
    rsx! {
        ServiceGate { tab: Tab::Awareness, AwarenessRightsView {} }
    }
}

#[component]
pub fn CivicLens() -> Element {
    rsx! {
        ServiceGate { tab: Tab::CivicLens, CivicLensView {} }
    }
}

#[component]
pub fn About() -> Element {
    rsx! {
        ServiceGate { tab: Tab::About, AboutView {} }
    }
}
