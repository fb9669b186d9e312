use civic::catalog::AWARENESS_TOPICS;
use dioxus::prelude::*;

use crate::icons::FaBookOpen;
use crate::{use_guidance, ChoiceSelect, FeedbackButton, GuidanceResponse, Icon, SubmitButton};

#[component]
pub fn AwarenessRightsView() -> Element {
    let topic = use_signal(|| "fundamental-rights".to_string());
    let mut question = use_signal(String::new);
    let request = use_guidance();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        request.run(api::awareness_info(topic(), question()));
    };

    rsx! {
        div {
            class: "page",
            header {
                class: "page-header",
                Icon { icon: FaBookOpen, width: 48, height: 48 }
                h1 { "Awareness & Rights" }
                p { class: "muted", "Educate yourself about civic responsibilities and basic rights" }
            }

            div {
                class: "columns",
                div {
                    class: "card",
                    form {
                        onsubmit: handle_submit,
                        ChoiceSelect {
                            id: "awareness-topic",
                            label: "Topic",
                            choices: AWARENESS_TOPICS,
                            value: topic,
                        }
                        div {
                            class: "field",
                            label { r#for: "awareness-question", "Specific Question (optional)" }
                            textarea {
                                id: "awareness-question",
                                rows: "4",
                                placeholder: "Leave empty for a general overview of the topic",
                                value: question(),
                                oninput: move |evt| question.set(evt.value()),
                            }
                        }
                        SubmitButton {
                            label: "Learn More",
                            busy_label: "Loading...",
                            busy: request.loading(),
                        }
                    }
                    GuidanceResponse { request }
                    FeedbackButton { service_type: "awareness" }
                }

                aside {
                    class: "card",
                    h3 { "Did You Know?" }
                    ul {
                        li { "The Right to Information Act lets any citizen request information from public authorities" }
                        li { "Gram Sabhas and ward committees are open to residents" }
                        li { "Every public office must display its grievance redressal contact" }
                    }
                    h3 { "Civic Duties" }
                    ul {
                        li { "Vote in every election" }
                        li { "Keep public spaces clean" }
                        li { "Report issues through proper channels" }
                        li { "Respect the rights of others" }
                    }
                }
            }
        }
    }
}
