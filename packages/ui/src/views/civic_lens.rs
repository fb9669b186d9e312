use civic::catalog::{DEPARTMENTS, LENS_CATEGORIES};
use civic::lens::{LensDraft, LensPhoto, LensReport, OTHER_DEPARTMENT};
use civic::Official;
use dioxus::prelude::*;

use crate::icons::{FaCamera, FaLocationDot, FaPaperPlane, FaUserCheck, FaWandMagicSparkles};
use crate::views::OfficialConnect;
use crate::{use_guidance, ChoiceSelect, FeedbackButton, GuidanceResponse, Icon};

/// Photo-backed issue reports kept for this session only.
#[component]
pub fn CivicLensView() -> Element {
    let mut show_officials = use_signal(|| false);
    let mut photo = use_signal(|| Option::<LensPhoto>::None);
    let category = use_signal(|| LENS_CATEGORIES[0].value.to_string());
    let mut location = use_signal(String::new);
    let mut authority = use_signal(String::new);
    let mut custom_authority = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut official = use_signal(|| Option::<Official>::None);
    let mut reports = use_signal(Vec::<LensReport>::new);
    let mut notice = use_signal(|| Option::<String>::None);
    let suggestion = use_guidance();

    let handle_photo = move |evt: FormEvent| async move {
        let Some(file) = evt.files().into_iter().next() else {
            return;
        };
        let file_name = file.name();
        match file.read_bytes().await {
            Ok(bytes) => photo.set(Some(LensPhoto::from_upload(&file_name, &bytes))),
            Err(e) => {
                tracing::warn!("Could not read {}: {}", file_name, e);
                photo.set(None);
            }
        }
    };

    let handle_suggest = move |_| {
        if description().trim().is_empty() || location().trim().is_empty() {
            return;
        }
        suggestion.run(api::suggest_authority(description(), location()));
    };

    let handle_select_official = move |selected: Official| {
        authority.set(selected.department.clone());
        official.set(Some(selected));
        show_officials.set(false);
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let draft = LensDraft {
            photo: photo(),
            category: category(),
            location: location(),
            description: description(),
            authority: authority(),
            custom_authority: custom_authority(),
        };
        let report = match draft.into_report(reports.peek().len() + 1) {
            Ok(report) => report,
            Err(e) => {
                notice.set(Some(format!("Please check the report: {e}.")));
                return;
            }
        };
        tracing::info!("Civic Lens report {} queued for {}", report.id, report.authority);
        reports.write().insert(0, report);

        notice.set(None);
        photo.set(None);
        description.set(String::new());
        location.set(String::new());
        authority.set(String::new());
        custom_authority.set(String::new());
        official.set(None);
        suggestion.clear();
    };

    rsx! {
        div {
            class: "page",
            header {
                class: "page-header",
                Icon { icon: FaCamera, width: 48, height: 48 }
                h1 { "Civic Lens" }
                p { class: "tagline", "See Issues. Report Responsibly." }
                p { class: "muted", "Visual issue reporting with direct official connections" }
                div {
                    class: "chip-row",
                    button {
                        class: if show_officials() { "chip" } else { "chip chip--active" },
                        onclick: move |_| show_officials.set(false),
                        "Report Issue"
                    }
                    button {
                        class: if show_officials() { "chip chip--active" } else { "chip" },
                        onclick: move |_| show_officials.set(true),
                        Icon { icon: FaUserCheck, width: 14, height: 14 }
                        " Official Connect"
                    }
                }
            }

            if show_officials() {
                OfficialConnect { on_select: handle_select_official }
            } else {
                div {
                    class: "columns",
                    div {
                        class: "card",
                        if let Some(selected) = official() {
                            p {
                                class: "notice notice--success",
                                "Reporting to {selected.name} ({selected.designation}, {selected.department})"
                            }
                        }
                        form {
                            onsubmit: handle_submit,
                            label {
                                class: "upload",
                                Icon { icon: FaCamera, width: 16, height: 16 }
                                if let Some(selected) = photo() {
                                    " {selected.name}"
                                } else {
                                    " Upload a photo of the issue *"
                                }
                                input {
                                    r#type: "file",
                                    accept: "image/*",
                                    class: "visually-hidden",
                                    onchange: handle_photo,
                                }
                            }
                            ChoiceSelect {
                                id: "lens-category",
                                label: "Issue Category",
                                choices: LENS_CATEGORIES,
                                value: category,
                            }
                            div {
                                class: "field",
                                label { r#for: "lens-location", "Location *" }
                                input {
                                    id: "lens-location",
                                    r#type: "text",
                                    placeholder: "Street, ward or landmark",
                                    value: location(),
                                    oninput: move |evt| location.set(evt.value()),
                                }
                            }
                            div {
                                class: "field",
                                label { r#for: "lens-description", "Description *" }
                                textarea {
                                    id: "lens-description",
                                    rows: "4",
                                    value: description(),
                                    oninput: move |evt| description.set(evt.value()),
                                }
                            }
                            button {
                                class: "button button--ghost",
                                r#type: "button",
                                disabled: suggestion.loading()
                                    || description().trim().is_empty()
                                    || location().trim().is_empty(),
                                onclick: handle_suggest,
                                Icon { icon: FaWandMagicSparkles, width: 14, height: 14 }
                                if suggestion.loading() { " Analyzing..." } else { " Suggest Authority" }
                            }
                            GuidanceResponse { request: suggestion, title: "AI Suggestion" }
                            div {
                                class: "field",
                                label { r#for: "lens-authority", "Authority *" }
                                select {
                                    id: "lens-authority",
                                    value: authority(),
                                    onchange: move |evt| authority.set(evt.value()),
                                    option { value: "", "Select Authority" }
                                    for dept in DEPARTMENTS.iter() {
                                        option { key: "{dept}", value: "{dept}", "{dept}" }
                                    }
                                }
                            }
                            if authority() == OTHER_DEPARTMENT {
                                div {
                                    class: "field",
                                    input {
                                        r#type: "text",
                                        placeholder: "Please specify the authority",
                                        value: custom_authority(),
                                        oninput: move |evt| custom_authority.set(evt.value()),
                                    }
                                }
                            }
                            if let Some(message) = notice() {
                                p { class: "notice notice--error", "{message}" }
                            }
                            button {
                                class: "button button--primary",
                                r#type: "submit",
                                Icon { icon: FaPaperPlane, width: 14, height: 14 }
                                " Submit Report"
                            }
                        }
                        FeedbackButton { service_type: "civic-lens" }
                    }

                    div {
                        class: "card",
                        h3 { "Your Reports" }
                        if reports.read().is_empty() {
                            p { class: "muted", "Reports you submit in this session appear here." }
                        }
                        for report in reports.read().iter().cloned() {
                            div {
                                key: "{report.id}",
                                class: "report-card report-card--{report.category}",
                                img {
                                    class: "report-photo",
                                    src: "{report.photo.data_url}",
                                    alt: "{report.photo.name}",
                                }
                                h4 { "{report.title}" }
                                p { "{report.description}" }
                                p {
                                    class: "muted",
                                    Icon { icon: FaLocationDot, width: 12, height: 12 }
                                    " {report.location}"
                                }
                                p { class: "muted", "To: {report.authority}" }
                                span { class: "status", "Submitted" }
                            }
                        }
                    }
                }
            }
        }
    }
}
