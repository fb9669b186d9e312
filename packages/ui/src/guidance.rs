//! Request state shared by every AI-backed panel.

use std::fmt::Display;
use std::future::Future;

use civic::GuidanceReply;
use dioxus::prelude::*;

/// Loading flag and rendered response of one panel.
#[derive(Clone, Copy, PartialEq)]
pub struct GuidanceRequest {
    loading: Signal<bool>,
    response: Signal<Option<String>>,
}

pub fn use_guidance() -> GuidanceRequest {
    GuidanceRequest {
        loading: use_signal(|| false),
        response: use_signal(|| None),
    }
}

impl GuidanceRequest {
    pub fn loading(&self) -> bool {
        (self.loading)()
    }

    pub fn response(&self) -> Option<String> {
        (self.response)()
    }

    /// Drop the rendered response, e.g. once the form it answered is reset.
    pub fn clear(&self) {
        let mut response = self.response;
        response.set(None);
    }

    /// Run `call` and render its outcome into the panel.
    ///
    /// Ignored while a previous call is still in flight. Failures render the
    /// fixed fallback sentence.
    pub fn run<T, E>(&self, call: impl Future<Output = Result<T, E>> + 'static)
    where
        T: Into<GuidanceReply> + 'static,
        E: Display + 'static,
    {
        let mut loading = self.loading;
        let mut response = self.response;
        if *loading.peek() {
            return;
        }
        loading.set(true);

        spawn(async move {
            let result = call.await;
            if let Err(e) = &result {
                tracing::warn!("Guidance request failed: {}", e);
            }
            response.set(Some(civic::panel_text(result)));
            loading.set(false);
        });
    }
}

/// The response box under a guidance form.
#[component]
pub fn GuidanceResponse(request: GuidanceRequest, #[props(default)] title: Option<String>) -> Element {
    if request.loading() {
        return rsx! {
            div { class: "response response--loading", "Thinking..." }
        };
    }

    match request.response() {
        Some(text) => rsx! {
            div {
                class: "response",
                if let Some(title) = title {
                    h3 { "{title}" }
                }
                p { class: "response-text", "{text}" }
            }
        },
        None => rsx! {},
    }
}
