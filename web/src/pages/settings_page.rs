#![allow(non_snake_case)]

use dioxus::prelude::*;
use log::debug;

use preferences_portal_client::form::PanelKind;

use crate::{
    components::sidebar::Sidebar,
    pages::{
        account_page::AccountPage, notifications_page::NotificationsPage,
        privacy_page::PrivacyPage, theme_page::ThemePage,
    },
};

#[component]
pub fn SettingsPage() -> Element {
    let active_panel = use_context::<Signal<PanelKind>>();
    debug!("Rendering {} panel", active_panel());

    rsx! {
        div {
            class: "h-full flex flex-row",

            Sidebar { active_panel }

            main {
                class: "flex flex-col grow h-full overflow-y-auto p-8",

                h1 { class: "text-2xl font-bold pb-6", "{active_panel().title()} Settings" }

                match active_panel() {
                    PanelKind::Account => rsx! { AccountPage {} },
                    PanelKind::Notifications => rsx! { NotificationsPage {} },
                    PanelKind::Theme => rsx! { ThemePage {} },
                    PanelKind::Privacy => rsx! { PrivacyPage {} },
                }
            }
        }
    }
}
