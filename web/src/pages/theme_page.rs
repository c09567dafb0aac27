#![allow(non_snake_case)]

use dioxus::prelude::*;
use strum::IntoEnumIterator;

use preferences_portal::theme::{FontFamily, Skin, ThemeMode, DEFAULT_SENTINEL};
use preferences_portal_client::panel::theme::fields;

use crate::{
    components::{fields::SelectField, save_button::SaveButton},
    pages::{submit_panel, use_panel_host},
    portal::Portal,
};

const COLOR_PICKER_FALLBACK: &str = "#4b7bec";

fn font_label(font: FontFamily) -> &'static str {
    match font {
        FontFamily::Default => "System default",
        FontFamily::Sans => "Sans Serif",
        FontFamily::Serif => "Serif",
        FontFamily::Mono => "Monospace",
    }
}

fn options<T: ToString>(
    values: impl Iterator<Item = T>,
    label: impl Fn(&T) -> String,
) -> Vec<(String, String)> {
    values
        .map(|value| (value.to_string(), label(&value)))
        .collect()
}

#[component]
pub fn ThemePage() -> Element {
    let portal = use_context::<Portal>();
    let controller = portal.theme.clone();
    let host = use_panel_host(controller.clone());
    let mut form = host.values();
    let saving = use_signal(|| false);

    let preview_controller = controller.clone();
    use_effect(move || {
        // Subscribes to every form edit
        let _ = form.read();
        preview_controller.preview(&host);
    });

    let color = form.read().text(fields::PRIMARY_COLOR).to_string();
    let uses_default_color = color.is_empty() || color.eq_ignore_ascii_case(DEFAULT_SENTINEL);
    let picker_color = if uses_default_color {
        COLOR_PICKER_FALLBACK.to_string()
    } else {
        color.clone()
    };

    rsx! {
        form {
            class: "flex flex-col gap-4 max-w-2xl",
            onsubmit: move |evt| {
                evt.prevent_default();
                submit_panel(controller.clone(), host, saving);
            },

            SelectField {
                form,
                name: fields::SKIN,
                label: "Skin",
                options: options(Skin::iter(), |skin| {
                    let name = skin.to_string();
                    let mut chars = name.chars();
                    chars
                        .next()
                        .map(|first| first.to_uppercase().chain(chars).collect())
                        .unwrap_or_default()
                })
            }

            div {
                class: "form-control w-full",
                div { class: "label", span { class: "label-text", "Primary color" } }
                div {
                    class: "flex flex-row items-center gap-4",
                    input {
                        class: "h-10 w-16 cursor-pointer rounded",
                        r#type: "color",
                        id: fields::PRIMARY_COLOR,
                        value: "{picker_color}",
                        oninput: move |evt| form.write().set_text(fields::PRIMARY_COLOR, evt.value()),
                    }
                    if uses_default_color {
                        span { class: "text-sm text-base-content/60", "Using the skin color" }
                    } else {
                        span { class: "text-sm font-mono", "{color}" }
                        button {
                            class: "btn btn-sm btn-text",
                            r#type: "button",
                            onclick: move |_| form.write().set_text(fields::PRIMARY_COLOR, DEFAULT_SENTINEL),
                            "Use default color"
                        }
                    }
                }
            }

            SelectField {
                form,
                name: fields::FONT_FAMILY,
                label: "Font",
                options: options(FontFamily::iter(), |font| font_label(*font).to_string())
            }
            SelectField {
                form,
                name: fields::THEME_MODE,
                label: "Mode",
                options: options(ThemeMode::iter(), |mode| match mode {
                    ThemeMode::Light => "Light".to_string(),
                    ThemeMode::Dark => "Dark".to_string(),
                })
            }

            SaveButton { saving }
        }
    }
}
