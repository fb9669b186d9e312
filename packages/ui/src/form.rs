use civic::Choice;
use dioxus::prelude::*;

/// A labelled `<select>` over a fixed option list, bound to `value`.
#[component]
pub fn ChoiceSelect(
    id: String,
    label: String,
    choices: &'static [Choice],
    value: Signal<String>,
) -> Element {
    let mut value = value;
    rsx! {
        div {
            class: "field",
            label { r#for: "{id}", "{label}" }
            select {
                id: "{id}",
                value: value(),
                onchange: move |evt| value.set(evt.value()),
                for choice in choices.iter() {
                    option {
                        key: "{choice.value}",
                        value: "{choice.value}",
                        "{choice.label}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn SubmitButton(
    label: String,
    busy_label: String,
    busy: bool,
    #[props(default)] disabled: bool,
) -> Element {
    rsx! {
        button {
            class: "button button--primary",
            r#type: "submit",
            disabled: busy || disabled,
            if busy { "{busy_label}" } else { "{label}" }
        }
    }
}
