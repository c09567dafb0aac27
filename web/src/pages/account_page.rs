#![allow(non_snake_case)]

use dioxus::prelude::*;
use log::error;

use preferences_portal_client::panel::account::fields;

use crate::{
    components::{
        fields::TextField,
        save_button::SaveButton,
    },
    pages::{submit_panel, use_panel_host},
    portal::Portal,
    utils::read_selected_file,
};

const PICTURE_INPUT_ID: &str = "profile-picture-input";

#[component]
pub fn AccountPage() -> Element {
    let portal = use_context::<Portal>();
    let controller = portal.account.clone();
    let host = use_panel_host(controller.clone());
    let form = host.values();
    let saving = use_signal(|| false);
    let picture_url = form.read().text(fields::PROFILE_PICTURE_URL).to_string();
    let upload_controller = controller.clone();

    rsx! {
        form {
            class: "flex flex-col gap-4 max-w-2xl",
            onsubmit: move |evt| {
                evt.prevent_default();
                submit_panel(controller.clone(), host, saving);
            },

            div {
                class: "flex flex-row items-center gap-6",

                label {
                    class: "avatar cursor-pointer",
                    "for": PICTURE_INPUT_ID,

                    div {
                        class: "w-32 rounded-full ring ring-primary ring-offset-base-100 ring-offset-2",
                        if picture_url.is_empty() {
                            div {
                                class: "size-full flex items-center justify-center bg-base-300 text-4xl",
                                "+"
                            }
                        } else {
                            img { src: "{picture_url}", alt: "Profile picture" }
                        }
                    }
                }
                input {
                    class: "hidden",
                    r#type: "file",
                    id: PICTURE_INPUT_ID,
                    accept: "image/*",
                    onchange: move |_| {
                        let controller = upload_controller.clone();
                        spawn(async move {
                            match read_selected_file(PICTURE_INPUT_ID).await {
                                Ok(Some(upload)) => {
                                    let _ = controller.upload_profile_picture(&host, upload).await;
                                }
                                Ok(None) => {}
                                Err(error) => error!("Unable to read the selected picture: {error:?}"),
                            }
                        });
                    }
                }
                span { class: "text-sm text-base-content/60", "Click the picture to change it" }
            }

            TextField { form, name: fields::EMAIL, label: "Email", input_type: "email", autocomplete: "email" }
            div {
                class: "flex flex-row gap-4",
                TextField { form, name: fields::FIRST_NAME, label: "First name", autocomplete: "given-name" }
                TextField { form, name: fields::LAST_NAME, label: "Last name", autocomplete: "family-name" }
            }

            fieldset {
                class: "fieldset flex flex-col gap-2 pt-4",
                legend { class: "fieldset-legend", "Change password" }

                TextField {
                    form,
                    name: fields::CURRENT_PASSWORD,
                    label: "Current password",
                    input_type: "password",
                    autocomplete: "current-password"
                }
                TextField {
                    form,
                    name: fields::NEW_PASSWORD,
                    label: "New password",
                    input_type: "password",
                    autocomplete: "new-password"
                }
                TextField {
                    form,
                    name: fields::CONFIRM_PASSWORD,
                    label: "Confirm new password",
                    input_type: "password",
                    autocomplete: "new-password"
                }
            }

            SaveButton { saving }
        }
    }
}
