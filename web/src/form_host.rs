use dioxus::prelude::*;

use preferences_portal_client::form::{FormHost, FormValues, MessageKind, PanelKind};

use crate::{components::toast_zone::Toast, services::toast_service::ToastCommand};

/// A `FormHost` backed by the panel's form signal, the active panel signal
/// and the toast service.
#[derive(Clone, Copy)]
pub struct SignalFormHost {
    values: Signal<FormValues>,
    active_panel: Signal<PanelKind>,
    toast_service: Coroutine<ToastCommand>,
}

impl SignalFormHost {
    pub fn new(
        values: Signal<FormValues>,
        active_panel: Signal<PanelKind>,
        toast_service: Coroutine<ToastCommand>,
    ) -> Self {
        Self {
            values,
            active_panel,
            toast_service,
        }
    }

    pub fn values(&self) -> Signal<FormValues> {
        self.values
    }
}

impl FormHost for SignalFormHost {
    fn get_values(&self) -> FormValues {
        self.values.peek().clone()
    }

    fn set_values(&self, values: FormValues) {
        let mut form = self.values;
        form.write().merge(values);
    }

    fn navigate_to(&self, panel: PanelKind) {
        let mut active_panel = self.active_panel;
        active_panel.set(panel);
    }

    fn show_message(&self, kind: MessageKind, message: &str) {
        self.toast_service
            .send(ToastCommand::Push(Toast::new(kind, message)));
    }
}
