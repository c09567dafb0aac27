#![allow(non_snake_case)]

use dioxus::prelude::*;
use strum::IntoEnumIterator;

use preferences_portal::privacy::ProfileVisibility;
use preferences_portal_client::panel::privacy::fields;

use crate::{
    components::{
        fields::{SelectField, ToggleField},
        save_button::SaveButton,
    },
    pages::{submit_panel, use_panel_host},
    portal::Portal,
};

#[component]
pub fn PrivacyPage() -> Element {
    let portal = use_context::<Portal>();
    let controller = portal.privacy.clone();
    let host = use_panel_host(controller.clone());
    let form = host.values();
    let saving = use_signal(|| false);
    let visibility_options = ProfileVisibility::iter()
        .map(|visibility| (visibility.to_string(), visibility.label().to_string()))
        .collect::<Vec<_>>();

    rsx! {
        form {
            class: "flex flex-col gap-4 max-w-2xl",
            onsubmit: move |evt| {
                evt.prevent_default();
                submit_panel(controller.clone(), host, saving);
            },

            SelectField {
                form,
                name: fields::PROFILE_VISIBILITY,
                label: "Who can see your profile",
                options: visibility_options
            }
            ToggleField {
                form,
                name: fields::SHOW_EMAIL,
                label: "Show my email address",
                description: "Other members can see your email on your profile"
            }
            ToggleField {
                form,
                name: fields::DATA_SHARING,
                label: "Share usage data",
                description: "Help us improve the portal with anonymous usage statistics"
            }

            SaveButton { saving }
        }
    }
}
