#![allow(non_snake_case)]

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use uuid::Uuid;

use preferences_portal_client::form::MessageKind;

use crate::services::toast_service::{ToastCommand, TOASTS};

const TOAST_TIMEOUT_MS: u32 = 5_000;

#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub kind: MessageKind,
}

impl Toast {
    pub fn new(kind: MessageKind, message: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.to_string(),
            kind,
        }
    }
}

pub fn toast_style(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Info => "notyf__toast--info bg-info",
        MessageKind::Success => "notyf__toast--success bg-success",
        MessageKind::Error => "notyf__toast--error bg-error",
    }
}

#[component]
pub fn ToastZone() -> Element {
    let toast_service = use_coroutine_handle::<ToastCommand>();

    rsx! {
        div {
            class: "notyf max-lg:justify-start! lg:justify-end!",

            for (id, toast) in TOASTS() {
                ToastElement {
                    key: "{id}",
                    message: toast.message.clone(),
                    kind: toast.kind,
                    on_close: move |_| {
                        toast_service.send(ToastCommand::Close(id))
                    }
                }
            }
        }
    }
}

#[component]
fn ToastElement(
    message: ReadOnlySignal<String>,
    kind: ReadOnlySignal<MessageKind>,
    on_close: EventHandler,
) -> Element {
    let mut dismiss = use_signal(|| "");
    let toast_style = use_memo(move || toast_style(kind()))();

    let _ = use_resource(move || async move {
        TimeoutFuture::new(TOAST_TIMEOUT_MS).await;
        *dismiss.write() = "notyf__toast--disappear";
        TimeoutFuture::new(300).await;
        on_close.call(());
    });

    rsx! {
        div {
            class: "notyf__toast notyf__toast--dismissible notyf__toast--lower max-w-md! {dismiss} {toast_style}",
            role: if kind() == MessageKind::Error { "alert" } else { "status" },

            div {
                class: "notyf__wrapper",

                p { class: "notyf__message text-sm!", "{message}" }

                div {
                    class: "notyf__dismiss",
                    button {
                        "type": "button",
                        class: "notyf__dismiss-btn",
                        onclick: move |_| {
                            spawn(async move {
                                *dismiss.write() = "notyf__toast--disappear";
                                TimeoutFuture::new(300).await;
                                on_close.call(());
                            });
                        }
                    }
                }
            }
        }
    }
}
