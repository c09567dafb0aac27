#![allow(non_snake_case)]

use dioxus::prelude::*;
use strum::IntoEnumIterator;

use preferences_portal_client::form::PanelKind;

fn panel_icon(panel: PanelKind) -> &'static str {
    match panel {
        PanelKind::Account => "icon-[tabler--user]",
        PanelKind::Notifications => "icon-[tabler--bell]",
        PanelKind::Theme => "icon-[tabler--palette]",
        PanelKind::Privacy => "icon-[tabler--lock]",
    }
}

#[component]
pub fn Sidebar(mut active_panel: Signal<PanelKind>) -> Element {
    rsx! {
        aside {
            class: "w-64 shrink-0 bg-base-200 flex flex-col",

            div {
                class: "p-5 text-center",
                div { class: "text-lg font-bold", "Preferences" }
                div { class: "text-xs text-base-content/60", "User Settings Portal" }
            }

            ul {
                class: "menu w-full",

                for panel in PanelKind::iter() {
                    li {
                        key: "{panel}",
                        a {
                            class: if active_panel() == panel { "menu-active" } else { "" },
                            onclick: move |_| active_panel.set(panel),
                            span { class: "{panel_icon(panel)} size-5" }
                            "{panel.title()}"
                        }
                    }
                }
            }
        }
    }
}
