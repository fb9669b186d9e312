use civic::Tab;
use dioxus::prelude::*;

use crate::icons::{FaCircleInfo, FaUsers, FaWandMagicSparkles};
use crate::{Icon, TabIcon};

const WELCOME_FALLBACK: &str =
    "Welcome! Explore our platform to learn about your civic rights and responsibilities.";

const FEATURES: [(Tab, &str); 5] = [
    (Tab::Legal, "Understand legal procedures and your rights in simple language"),
    (Tab::Civic, "Report civic issues and get guidance on proper channels"),
    (Tab::Complaint, "Learn how to proceed with complaints and escalations"),
    (Tab::Awareness, "Educate yourself about civic responsibilities and basic rights"),
    (Tab::CivicLens, "Report visible issues with a photo and reach verified officials"),
];

/// Landing view: hero, AI welcome banner, and one card per feature.
#[component]
pub fn HomeView(on_navigate: EventHandler<Tab>) -> Element {
    let welcome = use_resource(|| async move { api::welcome_message().await });

    let banner = match &*welcome.read() {
        None => rsx! { p { class: "muted pulse", "Loading personalized content..." } },
        Some(Ok(text)) => rsx! { p { class: "welcome-text", "{text}" } },
        Some(Err(e)) => {
            tracing::warn!("Welcome message unavailable: {}", e);
            rsx! { p { class: "muted", "{WELCOME_FALLBACK}" } }
        }
    };

    rsx! {
        div {
            class: "page",
            section {
                class: "hero",
                Icon { icon: FaUsers, width: 64, height: 64 }
                h1 { "Civic Justice AI" }
                p { class: "tagline", "Empowering Citizens. Strengthening Institutions." }
                p {
                    class: "muted",
                    "AI-powered civic awareness and responsible issue reporting for sustainable cities and justice."
                }
                div {
                    class: "welcome-banner",
                    Icon { icon: FaWandMagicSparkles, width: 22, height: 22 }
                    div {
                        h3 { "Today's Civic Awareness" }
                        {banner}
                    }
                }
                p {
                    class: "badge",
                    "✓ Privacy-First Design • ✓ Responsible AI • ✓ SDG 11 & 16 Aligned"
                }
            }

            div {
                class: "feature-grid",
                for (tab, description) in FEATURES {
                    button {
                        key: "{tab.slug()}",
                        class: "feature-card",
                        onclick: move |_| on_navigate.call(tab),
                        TabIcon { tab, size: 40 }
                        h3 { "{tab.label()}" }
                        p { "{description}" }
                    }
                }
            }

            div {
                class: "card notice-card",
                Icon { icon: FaCircleInfo, width: 22, height: 22 }
                div {
                    h3 { "Important Notice" }
                    p {
                        "Civic Justice AI provides informational guidance only. We do not provide legal advice, "
                        "represent any authority, or make legal decisions. All suggestions encourage lawful, "
                        "peaceful, and ethical civic engagement."
                    }
                }
            }

            button {
                class: "link-button",
                onclick: move |_| on_navigate.call(Tab::About),
                "Learn more about our mission and ethics →"
            }
        }
    }
}
