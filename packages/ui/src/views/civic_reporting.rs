use civic::catalog::{resolve_authority, CIVIC_AUTHORITIES, CIVIC_CATEGORIES, OTHER_AUTHORITY};
use dioxus::prelude::*;

use crate::icons::FaCircleExclamation;
use crate::{use_guidance, ChoiceSelect, FeedbackButton, GuidanceResponse, Icon, SubmitButton};

#[component]
pub fn CivicReportingView() -> Element {
    let category = use_signal(String::new);
    let authority = use_signal(String::new);
    let mut custom_authority = use_signal(String::new);
    let mut location = use_signal(String::new);
    let mut description = use_signal(String::new);
    let request = use_guidance();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if description().trim().is_empty() {
            return;
        }
        let authority = resolve_authority(&authority(), &custom_authority());
        request.run(api::report_civic_issue(
            description(),
            location(),
            category(),
            authority,
        ));
    };

    rsx! {
        div {
            class: "page",
            header {
                class: "page-header",
                Icon { icon: FaCircleExclamation, width: 48, height: 48 }
                h1 { "Civic Issue Reporting" }
                p { class: "muted", "Report civic issues and get guidance on proper channels" }
            }

            div {
                class: "card",
                form {
                    onsubmit: handle_submit,
                    div {
                        class: "form-row",
                        ChoiceSelect {
                            id: "civic-category",
                            label: "Issue Category",
                            choices: CIVIC_CATEGORIES,
                            value: category,
                        }
                        div {
                            class: "field",
                            label { r#for: "civic-location", "Location (optional)" }
                            input {
                                id: "civic-location",
                                r#type: "text",
                                placeholder: "Area, city or landmark",
                                value: location(),
                                oninput: move |evt| location.set(evt.value()),
                            }
                        }
                    }
                    ChoiceSelect {
                        id: "civic-authority",
                        label: "Responsible Authority",
                        choices: CIVIC_AUTHORITIES,
                        value: authority,
                    }
                    if authority() == OTHER_AUTHORITY {
                        div {
                            class: "field",
                            input {
                                r#type: "text",
                                required: true,
                                placeholder: "Please specify the authority",
                                value: custom_authority(),
                                oninput: move |evt| custom_authority.set(evt.value()),
                            }
                        }
                    }
                    div {
                        class: "field",
                        label { r#for: "civic-description", "Describe the Issue" }
                        textarea {
                            id: "civic-description",
                            rows: "5",
                            placeholder: "E.g., Streetlight not working on Main Road for the past week",
                            value: description(),
                            oninput: move |evt| description.set(evt.value()),
                        }
                    }
                    SubmitButton {
                        label: "Get Reporting Guidance",
                        busy_label: "Analyzing issue...",
                        busy: request.loading(),
                        disabled: description().trim().is_empty(),
                    }
                }
                GuidanceResponse { request, title: "Reporting Guidance" }
                FeedbackButton { service_type: "civic" }
            }

            div {
                class: "card",
                h3 { "Reporting Tips" }
                ul {
                    li { "Be specific about the location and time" }
                    li { "Describe the impact on the community" }
                    li { "Keep the complaint number you receive" }
                    li { "Follow up politely if there is no response" }
                }
            }
        }
    }
}
