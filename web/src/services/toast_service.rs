use std::collections::BTreeMap;

use dioxus::prelude::*;
use futures_util::StreamExt;
use log::debug;
use uuid::Uuid;

use crate::components::toast_zone::Toast;

pub enum ToastCommand {
    Push(Toast),
    Close(Uuid),
}

pub static TOASTS: GlobalSignal<BTreeMap<Uuid, Toast>> = Signal::global(BTreeMap::new);

pub async fn toast_service(
    mut rx: UnboundedReceiver<ToastCommand>,
    mut toasts: Signal<BTreeMap<Uuid, Toast>>,
) {
    loop {
        let msg = rx.next().await;
        match msg {
            Some(ToastCommand::Push(toast)) => {
                debug!("Pushing new Toast {}", toast.id);
                toasts.write().insert(toast.id, toast);
            }
            Some(ToastCommand::Close(id)) => {
                debug!("Closing Toast {}", id);
                toasts.write().remove(&id);
            }
            None => {}
        }
    }
}
