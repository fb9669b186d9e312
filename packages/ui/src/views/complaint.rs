use civic::catalog::{helplines, HelplineCategory, COMPLAINT_ISSUE_TYPES};
use dioxus::prelude::*;

use crate::icons::{FaPhone, FaShieldHalved};
use crate::{use_guidance, ChoiceSelect, FeedbackButton, GuidanceResponse, Icon, SubmitButton};

/// Complaint process guidance, the AI helpline finder and the static
/// helpline directory.
#[component]
pub fn ComplaintGuidanceView() -> Element {
    rsx! {
        div {
            class: "page",
            header {
                class: "page-header",
                Icon { icon: FaShieldHalved, width: 48, height: 48 }
                h1 { "Complaint Guidance" }
                p { class: "muted", "Learn how to proceed with complaints and find the right helpline" }
            }
            div {
                class: "columns",
                ProcessGuidance {}
                HelplineFinder {}
            }
            HelplineDirectory {}
        }
    }
}

#[component]
fn ProcessGuidance() -> Element {
    let issue_type = use_signal(|| "general".to_string());
    let mut question = use_signal(String::new);
    let request = use_guidance();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        request.run(api::complaint_guidance(issue_type(), question()));
    };

    rsx! {
        div {
            class: "card",
            h2 { "Complaint Process" }
            form {
                onsubmit: handle_submit,
                ChoiceSelect {
                    id: "complaint-type",
                    label: "What do you need help with?",
                    choices: COMPLAINT_ISSUE_TYPES,
                    value: issue_type,
                }
                div {
                    class: "field",
                    label { r#for: "complaint-question", "Your Question (optional)" }
                    textarea {
                        id: "complaint-question",
                        rows: "4",
                        placeholder: "E.g., My complaint has not been resolved in 30 days. What next?",
                        value: question(),
                        oninput: move |evt| question.set(evt.value()),
                    }
                }
                SubmitButton {
                    label: "Get Process Guidance",
                    busy_label: "Getting guidance...",
                    busy: request.loading(),
                }
            }
            GuidanceResponse { request, title: "Process Guidance" }
            FeedbackButton { service_type: "complaint" }
        }
    }
}

#[component]
fn HelplineFinder() -> Element {
    let mut question = use_signal(String::new);
    let mut location = use_signal(String::new);
    let request = use_guidance();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if question().trim().is_empty() {
            return;
        }
        request.run(api::helpline_guidance(question(), location()));
    };

    rsx! {
        div {
            class: "card",
            h2 { "Find the Right Helpline" }
            form {
                onsubmit: handle_submit,
                div {
                    class: "field",
                    label { r#for: "helpline-question", "Describe your problem" }
                    textarea {
                        id: "helpline-question",
                        rows: "4",
                        placeholder: "E.g., Someone is harassing me online",
                        value: question(),
                        oninput: move |evt| question.set(evt.value()),
                    }
                }
                div {
                    class: "field",
                    label { r#for: "helpline-location", "Location (optional)" }
                    input {
                        id: "helpline-location",
                        r#type: "text",
                        placeholder: "City or state",
                        value: location(),
                        oninput: move |evt| location.set(evt.value()),
                    }
                }
                SubmitButton {
                    label: "Find Helplines",
                    busy_label: "Searching...",
                    busy: request.loading(),
                    disabled: question().trim().is_empty(),
                }
            }
            GuidanceResponse { request, title: "Suggested Contacts" }
        }
    }
}

#[component]
fn HelplineDirectory() -> Element {
    let mut filter = use_signal(|| Option::<HelplineCategory>::None);

    rsx! {
        section {
            class: "card",
            h2 { "Helpline Directory" }
            p {
                class: "notice notice--warning",
                "If this is urgent, contact emergency services immediately (112)."
            }
            div {
                class: "chip-row",
                button {
                    class: if filter().is_none() { "chip chip--active" } else { "chip" },
                    onclick: move |_| filter.set(None),
                    "📋 All Categories"
                }
                for category in HelplineCategory::ALL {
                    button {
                        key: "{category.label()}",
                        class: if filter() == Some(category) { "chip chip--active" } else { "chip" },
                        onclick: move |_| filter.set(Some(category)),
                        "{category.icon()} {category.label()}"
                    }
                }
            }
            div {
                class: "helpline-grid",
                for helpline in helplines(filter()) {
                    div {
                        key: "{helpline.name}",
                        class: "helpline-card",
                        h4 { "{helpline.name}" }
                        p { class: "muted", "{helpline.description}" }
                        if helpline.is_dialable() {
                            a {
                                class: "helpline-number",
                                href: "tel:{helpline.number}",
                                Icon { icon: FaPhone, width: 14, height: 14 }
                                " {helpline.number}"
                            }
                        } else {
                            span { class: "helpline-number", "{helpline.number}" }
                        }
                    }
                }
            }
        }
    }
}
