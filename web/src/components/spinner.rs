#![allow(non_snake_case)]

use dioxus::prelude::*;

#[component]
pub fn Spinner(
    #[props(into)] class: Option<String>,
    #[props(into)] label: Option<String>,
) -> Element {
    let class = class.unwrap_or_default();
    let label = label.unwrap_or_else(|| "Loading...".to_string());

    rsx! {
        div {
            role: "status",
            class: "flex items-center gap-2",

            span { class: "loading loading-ring loading-md text-primary {class}" }
            span { class: "sr-only", "{label}" }
        }
    }
}
