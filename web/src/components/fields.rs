#![allow(non_snake_case)]

use dioxus::prelude::*;

use preferences_portal_client::form::FormValues;

#[component]
pub fn TextField(
    mut form: Signal<FormValues>,
    #[props(into)] name: String,
    #[props(into)] label: String,
    #[props(default = "text".to_string(), into)] input_type: String,
    #[props(default, into)] autocomplete: Option<String>,
) -> Element {
    let value = form.read().text(&name).to_string();
    let field = name.clone();

    rsx! {
        label {
            class: "form-control w-full",
            "for": "{name}",

            div { class: "label", span { class: "label-text", "{label}" } }
            input {
                class: "input input-bordered w-full",
                r#type: "{input_type}",
                id: "{name}",
                name: "{name}",
                autocomplete,
                value: "{value}",
                oninput: move |evt| form.write().set_text(&field, evt.value()),
            }
        }
    }
}

#[component]
pub fn ToggleField(
    mut form: Signal<FormValues>,
    #[props(into)] name: String,
    #[props(into)] label: String,
    #[props(default, into)] description: Option<String>,
) -> Element {
    let checked = form.read().flag(&name);
    let field = name.clone();

    rsx! {
        label {
            class: "flex items-center justify-between gap-4 py-2 cursor-pointer",
            "for": "{name}",

            div {
                class: "flex flex-col",
                span { class: "label-text font-medium", "{label}" }
                if let Some(description) = description {
                    span { class: "text-xs text-base-content/60", "{description}" }
                }
            }
            input {
                class: "switch switch-primary",
                r#type: "checkbox",
                id: "{name}",
                name: "{name}",
                checked,
                onchange: move |evt| form.write().set_flag(&field, evt.checked()),
            }
        }
    }
}

/// A select over `(value, label)` options.
#[component]
pub fn SelectField(
    mut form: Signal<FormValues>,
    #[props(into)] name: String,
    #[props(into)] label: String,
    options: Vec<(String, String)>,
) -> Element {
    let selected = form.read().text(&name).to_string();
    let field = name.clone();

    rsx! {
        label {
            class: "form-control w-full",
            "for": "{name}",

            div { class: "label", span { class: "label-text", "{label}" } }
            select {
                class: "select select-bordered w-full",
                id: "{name}",
                name: "{name}",
                onchange: move |evt| form.write().set_text(&field, evt.value()),

                for (value, option_label) in options {
                    option {
                        key: "{value}",
                        value: "{value}",
                        selected: value == selected,
                        "{option_label}"
                    }
                }
            }
        }
    }
}
