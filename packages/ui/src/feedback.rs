//! Star-rating feedback, reachable from every AI-backed panel.

use civic::records::Rating;
use dioxus::prelude::*;

use crate::icons::{FaCommentDots, FaStar, FaXmark};
use crate::Icon;

/// Opens [`FeedbackModal`] for `service_type`.
#[component]
pub fn FeedbackButton(service_type: String) -> Element {
    let mut open = use_signal(|| false);

    rsx! {
        button {
            class: "button button--ghost feedback-button",
            onclick: move |_| open.set(true),
            Icon { icon: FaCommentDots, width: 14, height: 14 }
            " Rate this service"
        }
        if open() {
            FeedbackModal {
                service_type: service_type.clone(),
                on_close: move |_| open.set(false),
            }
        }
    }
}

#[component]
pub fn FeedbackModal(service_type: String, on_close: EventHandler<()>) -> Element {
    let mut rating = use_signal(|| 0u8);
    let mut feedback = use_signal(String::new);
    let mut suggestions = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut thanked = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let service = service_type.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        // No call is made until a star is chosen.
        let Ok(stars) = Rating::new(rating()) else {
            return;
        };
        if submitting() {
            return;
        }
        submitting.set(true);
        error.set(None);

        let service = service.clone();
        spawn(async move {
            match api::submit_feedback(service, stars.get(), feedback(), suggestions()).await {
                Ok(id) => {
                    tracing::info!("Feedback recorded: {}", id);
                    thanked.set(true);
                }
                Err(e) => {
                    tracing::warn!("Feedback not recorded: {}", e);
                    error.set(Some(api::SUBMISSION_FAILED.to_string()));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),

                div {
                    class: "modal-header",
                    h2 { "Share Your Feedback" }
                    button {
                        class: "icon-button",
                        title: "Close",
                        onclick: move |_| on_close.call(()),
                        Icon { icon: FaXmark, width: 16, height: 16 }
                    }
                }

                if thanked() {
                    p { class: "notice notice--success", "Thank you for your feedback!" }
                    button {
                        class: "button button--primary",
                        onclick: move |_| on_close.call(()),
                        "Close"
                    }
                } else {
                    form {
                        onsubmit: handle_submit,
                        div {
                            class: "field",
                            label { "How would you rate this service?" }
                            div {
                                class: "stars",
                                for n in 1..=Rating::MAX {
                                    button {
                                        key: "{n}",
                                        r#type: "button",
                                        class: if n <= rating() { "star star--on" } else { "star" },
                                        title: "{n} star",
                                        onclick: move |_| rating.set(n),
                                        Icon { icon: FaStar, width: 24, height: 24 }
                                    }
                                }
                            }
                        }
                        div {
                            class: "field",
                            label { r#for: "feedback-text", "What did you think? (optional)" }
                            textarea {
                                id: "feedback-text",
                                rows: "3",
                                value: feedback(),
                                oninput: move |evt| feedback.set(evt.value()),
                            }
                        }
                        div {
                            class: "field",
                            label { r#for: "feedback-suggestions", "Suggestions (optional)" }
                            textarea {
                                id: "feedback-suggestions",
                                rows: "3",
                                value: suggestions(),
                                oninput: move |evt| suggestions.set(evt.value()),
                            }
                        }
                        if let Some(message) = error() {
                            p { class: "notice notice--error", "{message}" }
                        }
                        button {
                            class: "button button--primary",
                            r#type: "submit",
                            disabled: rating() == 0 || submitting(),
                            if submitting() { "Submitting..." } else { "Submit Feedback" }
                        }
                    }
                }
            }
        }
    }
}
