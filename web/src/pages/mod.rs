use std::rc::Rc;

use dioxus::prelude::*;
use log::debug;

use preferences_portal_client::{
    controller::SettingsFormController,
    form::{FormValues, PanelKind},
    panel::SettingsPanel,
};

use crate::{form_host::SignalFormHost, services::toast_service::ToastCommand};

pub mod account_page;
pub mod notifications_page;
pub mod privacy_page;
pub mod settings_page;
pub mod theme_page;

/// Form host of a mounted panel. Loads the panel when it is mounted and
/// marks its pending load stale when it is unmounted.
pub fn use_panel_host<P: SettingsPanel + 'static>(
    controller: Rc<SettingsFormController<P>>,
) -> SignalFormHost {
    let values = use_signal(FormValues::new);
    let active_panel = use_context::<Signal<PanelKind>>();
    let toast_service = use_coroutine_handle::<ToastCommand>();
    let host = SignalFormHost::new(values, active_panel, toast_service);

    let on_display = controller.clone();
    use_hook(move || {
        spawn(async move {
            on_display.on_display(&host).await;
        })
    });
    use_drop(move || controller.on_hide());

    host
}

pub fn submit_panel<P: SettingsPanel + 'static>(
    controller: Rc<SettingsFormController<P>>,
    host: SignalFormHost,
    mut saving: Signal<bool>,
) {
    spawn(async move {
        saving.set(true);
        if let Err(error) = controller.on_submit(&host).await {
            debug!("{} panel not saved: {error}", controller.panel().kind());
        }
        saving.set(false);
    });
}
