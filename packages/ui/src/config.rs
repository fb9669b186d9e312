//! Configuration status context and the gate in front of service-backed views.

use civic::{ConfigStatus, Tab};
use dioxus::prelude::*;

use crate::icons::FaTriangleExclamation;
use crate::Icon;

/// The server's configuration status, `None` until the first check returns.
pub fn use_config() -> Signal<Option<ConfigStatus>> {
    use_context::<Signal<Option<ConfigStatus>>>()
}

/// Asks the server once which required keys are missing and shares the answer.
///
/// If the server cannot be asked at all, every key is treated as missing so
/// the gated views stay closed.
#[component]
pub fn ConfigProvider(children: Element) -> Element {
    let mut status = use_signal(|| Option::<ConfigStatus>::None);

    let _ = use_resource(move || async move {
        let checked = match api::config_status().await {
            Ok(checked) => checked,
            Err(e) => {
                tracing::warn!("Configuration status unavailable: {}", e);
                ConfigStatus::unavailable()
            }
        };
        if !checked.is_ready() {
            tracing::warn!("Missing configuration: {}", checked.missing.join(", "));
        }
        status.set(Some(checked));
    });

    use_context_provider(|| status);

    rsx! {
        {children}
    }
}

/// Renders `children` only when `tab` may be shown under the current status.
#[component]
pub fn ServiceGate(tab: Tab, children: Element) -> Element {
    let status = use_config();

    match status() {
        _ if !tab.requires_services() => rsx! { {children} },
        None => rsx! {
            div { class: "panel-loading", "Checking configuration..." }
        },
        Some(status) if tab.is_available(&status) => rsx! { {children} },
        Some(status) => rsx! {
            ConfigRequired { missing: status.missing }
        },
    }
}

#[component]
pub fn ConfigRequired(missing: Vec<String>) -> Element {
    rsx! {
        div {
            class: "config-required",
            Icon { icon: FaTriangleExclamation, width: 40, height: 40 }
            h2 { "Configuration Required" }
            p {
                "This feature needs the AI and storage services, which are not configured on this server. "
                "Add the following keys to the environment or the "
                code { ".env" }
                " file and restart:"
            }
            ul {
                for key in missing.iter() {
                    li { key: "{key}", code { "{key}" } }
                }
            }
            p { class: "muted", "The About page remains available." }
        }
    }
}
