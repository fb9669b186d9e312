use dioxus::prelude::*;

use crate::icons::{FaCircleInfo, FaHandshake, FaLock, FaScaleBalanced};
use crate::Icon;

/// Mission and ethics. Needs no services, so it is never gated.
#[component]
pub fn AboutView() -> Element {
    rsx! {
        div {
            class: "page",
            header {
                class: "page-header",
                Icon { icon: FaCircleInfo, width: 48, height: 48 }
                h1 { "About Civic Justice AI" }
                p { class: "muted", "A bridge between citizens and institutions" }
            }

            div {
                class: "card",
                h2 { "Our Mission" }
                p {
                    "Civic Justice AI helps citizens understand legal procedures, report civic issues "
                    "responsibly, and learn about their rights and duties. It supports Sustainable "
                    "Development Goal 11 (sustainable cities and communities) and Goal 16 (peace, "
                    "justice and strong institutions)."
                }
            }

            div {
                class: "feature-grid",
                div {
                    class: "card",
                    Icon { icon: FaScaleBalanced, width: 28, height: 28 }
                    h3 { "Informational Only" }
                    p {
                        "We do not give legal advice, represent any authority, or make decisions. "
                        "Always verify with official sources."
                    }
                }
                div {
                    class: "card",
                    Icon { icon: FaLock, width: 28, height: 28 }
                    h3 { "Privacy First" }
                    p {
                        "No accounts and no tracking. Never share Aadhaar numbers, bank details or OTPs "
                        "in your questions."
                    }
                }
                div {
                    class: "card",
                    Icon { icon: FaHandshake, width: 28, height: 28 }
                    h3 { "Responsible AI" }
                    p {
                        "Every answer encourages lawful, peaceful and ethical civic engagement, and "
                        "points you to the proper authority."
                    }
                }
            }

            div {
                class: "card notice-card",
                h3 { "In an Emergency" }
                p { "Call 112 for police, fire or medical emergencies. Do not wait for an online response." }
            }
        }
    }
}
