#![allow(non_snake_case)]

use dioxus::prelude::*;
use strum::IntoEnumIterator;

use preferences_portal::notification::NotificationChannel;

use crate::{
    components::{fields::ToggleField, save_button::SaveButton},
    pages::{submit_panel, use_panel_host},
    portal::Portal,
};

#[component]
pub fn NotificationsPage() -> Element {
    let portal = use_context::<Portal>();
    let controller = portal.notifications.clone();
    let host = use_panel_host(controller.clone());
    let form = host.values();
    let saving = use_signal(|| false);
    let (push_channels, email_channels): (Vec<_>, Vec<_>) =
        NotificationChannel::iter().partition(NotificationChannel::is_push);

    rsx! {
        form {
            class: "flex flex-col gap-4 max-w-2xl",
            onsubmit: move |evt| {
                evt.prevent_default();
                submit_panel(controller.clone(), host, saving);
            },

            fieldset {
                class: "fieldset",
                legend { class: "fieldset-legend", "Push notifications" }
                for channel in push_channels {
                    ToggleField { key: "{channel}", form, name: channel.to_string(), label: channel.label() }
                }
            }

            fieldset {
                class: "fieldset",
                legend { class: "fieldset-legend", "Email notifications" }
                for channel in email_channels {
                    ToggleField { key: "{channel}", form, name: channel.to_string(), label: channel.label() }
                }
            }

            SaveButton { saving }
        }
    }
}
