use civic::catalog::DEPARTMENTS;
use civic::{Official, OfficialRegistration};
use dioxus::prelude::*;

use crate::icons::{FaEnvelope, FaPhone, FaShieldHalved, FaUpload, FaUserCheck};
use crate::Icon;

const REGISTRATION_SENT: &str =
    "Registration submitted for verification. You will be contacted within 3-5 business days.";

/// Verified official directory plus the registration form for officials.
///
/// Picking an official hands it to `on_select`, which Civic Lens uses to
/// route a report to that official's department.
#[component]
pub fn OfficialConnect(on_select: EventHandler<Official>) -> Element {
    let mut registering = use_signal(|| false);

    rsx! {
        div {
            class: "official-connect",
            div {
                class: "card card--accent",
                div {
                    class: "card-header",
                    Icon { icon: FaShieldHalved, width: 22, height: 22 }
                    h3 { "Verified Civic Officials" }
                    button {
                        class: "button button--success",
                        onclick: move |_| registering.toggle(),
                        if registering() { "View Officials" } else { "Register as Official" }
                    }
                }
                p { class: "muted", "Connect directly with verified government officials for faster issue resolution" }
            }
            if registering() {
                RegistrationForm { on_done: move |_| registering.set(false) }
            } else {
                OfficialDirectory { on_select }
            }
        }
    }
}

#[component]
fn OfficialDirectory(on_select: EventHandler<Official>) -> Element {
    let officials = use_resource(|| async move { api::verified_officials().await });

    let body = match &*officials.read() {
        None => rsx! { p { class: "muted pulse", "Loading officials..." } },
        Some(Err(e)) => {
            tracing::warn!("Official directory unavailable: {}", e);
            rsx! { p { class: "notice notice--error", "Unable to load officials. Please try again." } }
        }
        Some(Ok(list)) if list.is_empty() => rsx! {
            p { class: "muted", "No verified officials yet." }
        },
        Some(Ok(list)) => rsx! {
            div {
                class: "official-grid",
                for official in list.iter().cloned() {
                    OfficialCard { key: "{official.id.clone().unwrap_or_default()}", official, on_select }
                }
            }
        },
    };

    rsx! { {body} }
}

#[component]
fn OfficialCard(official: Official, on_select: EventHandler<Official>) -> Element {
    let selected = official.clone();
    rsx! {
        div {
            class: "official-card",
            div {
                class: "card-header",
                Icon { icon: FaUserCheck, width: 18, height: 18 }
                h4 { "{official.name}" }
            }
            p { class: "official-role", "{official.designation}, {official.department}" }
            p { class: "muted", "{official.jurisdiction}" }
            p { "{official.description}" }
            if let Some(phone) = &official.phone {
                p {
                    Icon { icon: FaPhone, width: 12, height: 12 }
                    " {phone}"
                }
            }
            if let Some(email) = &official.email {
                p {
                    Icon { icon: FaEnvelope, width: 12, height: 12 }
                    " {email}"
                }
            }
            button {
                class: "button button--primary",
                onclick: move |_| on_select.call(selected.clone()),
                "Report to this Official"
            }
        }
    }
}

#[component]
fn RegistrationForm(on_done: EventHandler<()>) -> Element {
    let mut name = use_signal(String::new);
    let mut designation = use_signal(String::new);
    let mut department = use_signal(String::new);
    let mut jurisdiction = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut id_proof = use_signal(|| Option::<(String, Vec<u8>)>::None);
    let mut submitting = use_signal(|| false);
    let mut message = use_signal(|| Option::<(bool, String)>::None);

    let handle_file = move |evt: FormEvent| async move {
        let Some(file) = evt.files().into_iter().next() else {
            return;
        };
        let file_name = file.name();
        match file.read_bytes().await {
            Ok(bytes) => id_proof.set(Some((file_name, bytes.to_vec()))),
            Err(e) => {
                tracing::warn!("Could not read {}: {}", file_name, e);
                id_proof.set(None);
            }
        }
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        let registration = OfficialRegistration {
            name: name(),
            designation: designation(),
            department: department(),
            jurisdiction: jurisdiction(),
            phone: phone(),
            email: email(),
            description: description(),
            id_proof_name: id_proof().map(|(file_name, _)| file_name).unwrap_or_default(),
            id_proof: id_proof().map(|(_, bytes)| bytes).unwrap_or_default(),
        };
        if let Err(e) = Official::register(&registration) {
            message.set(Some((false, format!("Please check the form: {e}."))));
            return;
        }

        submitting.set(true);
        spawn(async move {
            match api::register_official(registration).await {
                Ok(id) => {
                    tracing::info!("Official registration recorded: {}", id);
                    message.set(Some((true, REGISTRATION_SENT.to_string())));
                    for mut field in [name, designation, department, jurisdiction, phone, email, description] {
                        field.set(String::new());
                    }
                    id_proof.set(None);
                }
                Err(e) => {
                    tracing::warn!("Official registration failed: {}", e);
                    message.set(Some((false, api::SUBMISSION_FAILED.to_string())));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "card",
            h4 { "Official Registration" }
            form {
                onsubmit: handle_submit,
                div {
                    class: "form-row",
                    input {
                        r#type: "text",
                        placeholder: "Full Name *",
                        value: name(),
                        oninput: move |evt| name.set(evt.value()),
                    }
                    input {
                        r#type: "text",
                        placeholder: "Designation *",
                        value: designation(),
                        oninput: move |evt| designation.set(evt.value()),
                    }
                }
                div {
                    class: "form-row",
                    select {
                        value: department(),
                        onchange: move |evt| department.set(evt.value()),
                        option { value: "", "Select Department *" }
                        for dept in DEPARTMENTS.iter() {
                            option { key: "{dept}", value: "{dept}", "{dept}" }
                        }
                    }
                    input {
                        r#type: "text",
                        placeholder: "Jurisdiction / Area *",
                        value: jurisdiction(),
                        oninput: move |evt| jurisdiction.set(evt.value()),
                    }
                }
                div {
                    class: "form-row",
                    input {
                        r#type: "tel",
                        placeholder: "Phone",
                        value: phone(),
                        oninput: move |evt| phone.set(evt.value()),
                    }
                    input {
                        r#type: "email",
                        placeholder: "Official Email",
                        value: email(),
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
                textarea {
                    rows: "3",
                    placeholder: "Responsibilities and areas of work *",
                    value: description(),
                    oninput: move |evt| description.set(evt.value()),
                }
                label {
                    class: "upload",
                    Icon { icon: FaUpload, width: 16, height: 16 }
                    if let Some((file_name, _)) = id_proof() {
                        " {file_name}"
                    } else {
                        " Upload Government ID Proof *"
                    }
                    input {
                        r#type: "file",
                        accept: "image/*,.pdf",
                        class: "visually-hidden",
                        onchange: handle_file,
                    }
                }
                if let Some((ok, text)) = message() {
                    p { class: if ok { "notice notice--success" } else { "notice notice--error" }, "{text}" }
                }
                div {
                    class: "form-actions",
                    button {
                        class: "button button--primary",
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() { "Submitting..." } else { "Submit for Verification" }
                    }
                    button {
                        class: "button button--ghost",
                        r#type: "button",
                        onclick: move |_| on_done.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}
