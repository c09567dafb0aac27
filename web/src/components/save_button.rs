#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::components::spinner::Spinner;

#[component]
pub fn SaveButton(saving: ReadOnlySignal<bool>) -> Element {
    rsx! {
        div {
            class: "flex justify-end pt-4",

            button {
                class: "btn btn-primary",
                r#type: "submit",
                disabled: saving(),

                if saving() {
                    Spinner { class: "text-primary-content", label: "Saving..." }
                }
                "Save changes"
            }
        }
    }
}
