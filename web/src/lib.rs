#![allow(non_snake_case)]

use dioxus::prelude::*;
use log::{debug, error};

use preferences_portal_client::{form::PanelKind, panel::theme::bootstrap_theme};

use components::{spinner::Spinner, toast_zone::ToastZone};
use pages::settings_page::SettingsPage;
use portal::Portal;
use services::toast_service::{toast_service, TOASTS};

mod components;
mod config;
mod form_host;
mod pages;
mod portal;
mod services;
mod theme;
mod utils;

#[component]
pub fn App() -> Element {
    let portal = use_hook(|| {
        Portal::from_page().map_err(|err| {
            error!("Unable to start the preferences portal: {err:?}");
            err.to_string()
        })
    });
    let _toast_service_handle = use_coroutine(|rx| toast_service(rx, TOASTS.signal()));
    use_context_provider(|| Signal::new(PanelKind::default()));

    match portal {
        Ok(portal) => rsx! { PortalLayout { portal } },
        Err(message) => rsx! {
            div {
                class: "h-screen flex items-center justify-center",
                div {
                    class: "alert alert-error max-w-lg",
                    role: "alert",
                    "Unable to load your preferences: {message}"
                }
            }
        },
    }
}

#[component]
fn PortalLayout(portal: Portal) -> Element {
    use_context_provider(|| portal.clone());
    let theme_loaded = use_resource(move || {
        let portal = portal.clone();
        async move {
            match bootstrap_theme(portal.api.as_ref(), &*portal.overrides).await {
                Ok(theme) => debug!("Saved theme applied: {theme:?}"),
                Err(err) => error!("Unable to load the saved theme: {err}"),
            }
        }
    });

    rsx! {
        div {
            class: "h-screen flex flex-col text-sm",

            if theme_loaded.read().is_none() {
                div {
                    class: "h-full flex items-center justify-center",
                    Spinner { class: "size-10", label: "Loading your preferences..." }
                }
            } else {
                SettingsPage {}
            }
            ToastZone {}
        }
    }
}
