use civic::catalog::LEGAL_CATEGORIES;
use dioxus::prelude::*;

use crate::icons::FaScaleBalanced;
use crate::{use_guidance, ChoiceSelect, FeedbackButton, GuidanceResponse, Icon, SubmitButton};

#[component]
pub fn LegalGuidanceView() -> Element {
    let category = use_signal(|| "general".to_string());
    let mut query = use_signal(String::new);
    let request = use_guidance();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if query().trim().is_empty() {
            return;
        }
        request.run(api::legal_guidance(query(), category()));
    };

    rsx! {
        div {
            class: "page",
            header {
                class: "page-header",
                Icon { icon: FaScaleBalanced, width: 48, height: 48 }
                h1 { "Legal Guidance" }
                p { class: "muted", "Understand legal procedures and your rights in simple language" }
            }

            div {
                class: "columns",
                div {
                    class: "card",
                    form {
                        onsubmit: handle_submit,
                        ChoiceSelect {
                            id: "legal-category",
                            label: "Category",
                            choices: LEGAL_CATEGORIES,
                            value: category,
                        }
                        div {
                            class: "field",
                            label { r#for: "legal-query", "Your Question" }
                            textarea {
                                id: "legal-query",
                                rows: "5",
                                placeholder: "E.g., How do I file an FIR? What are my rights if stopped by police?",
                                value: query(),
                                oninput: move |evt| query.set(evt.value()),
                            }
                        }
                        SubmitButton {
                            label: "Get Guidance",
                            busy_label: "Getting guidance...",
                            busy: request.loading(),
                            disabled: query().trim().is_empty(),
                        }
                    }
                    GuidanceResponse { request, title: "Guidance" }
                    FeedbackButton { service_type: "legal" }
                }

                aside {
                    class: "card warning-card",
                    h3 { "⚠️ Important Information" }
                    ul {
                        li { "This platform provides general legal awareness only" }
                        li { "It does not replace lawyers, police, courts, or government officials" }
                        li { "Laws may vary based on state and situation" }
                        li { "Always verify with official government sources" }
                        li { "Never share sensitive personal details (Aadhaar, bank details, OTPs)" }
                    }
                    h3 { "Your Basic Rights" }
                    ul {
                        li { "Right to file a complaint" }
                        li { "Right to information (RTI Act)" }
                        li { "Right to receive complaint number" }
                        li { "Right to fair treatment" }
                        li { "Right to legal representation" }
                    }
                    h3 { "Best Practices" }
                    ul {
                        li { "Always file written complaints" }
                        li { "Keep copies and acknowledgements" }
                        li { "Note dates, times, and reference numbers" }
                        li { "Follow proper escalation channels" }
                    }
                }
            }
        }
    }
}
