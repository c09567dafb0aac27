use std::collections::BTreeMap;

use strum::{AsRefStr, Display, EnumIter, EnumString};

use preferences_portal::utils::toggle::{to_bool, to_toggle, TOGGLE_OFF};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValue {
    Text(String),
    /// Switch fields, `0` or `1`
    Toggle(u8),
}

/// Field values of one panel form, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues(pub BTreeMap<String, FormValue>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&FormValue> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Text content of a field, empty when the field is missing or is a
    /// switch.
    pub fn text(&self, name: &str) -> &str {
        match self.0.get(name) {
            Some(FormValue::Text(value)) => value,
            _ => "",
        }
    }

    pub fn toggle(&self, name: &str) -> u8 {
        match self.0.get(name) {
            Some(FormValue::Toggle(value)) => *value,
            Some(FormValue::Text(value)) => value.trim().parse().unwrap_or(TOGGLE_OFF),
            None => TOGGLE_OFF,
        }
    }

    pub fn flag(&self, name: &str) -> bool {
        to_bool(self.toggle(name))
    }

    pub fn set_text(&mut self, name: &str, value: impl Into<String>) {
        self.0.insert(name.to_string(), FormValue::Text(value.into()));
    }

    pub fn set_toggle(&mut self, name: &str, value: u8) {
        self.0.insert(name.to_string(), FormValue::Toggle(value));
    }

    pub fn set_flag(&mut self, name: &str, value: bool) {
        self.set_toggle(name, to_toggle(value));
    }

    pub fn with_text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_text(name, value);
        self
    }

    pub fn with_flag(mut self, name: &str, value: bool) -> Self {
        self.set_flag(name, value);
        self
    }

    /// Overwrites the fields present in `other`, leaving the others as they are.
    pub fn merge(&mut self, other: FormValues) {
        self.0.extend(other.0);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr, Display, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum PanelKind {
    #[default]
    Account,
    Notifications,
    Theme,
    Privacy,
}

impl PanelKind {
    pub fn title(&self) -> &'static str {
        match self {
            PanelKind::Account => "Account",
            PanelKind::Notifications => "Notifications",
            PanelKind::Theme => "Theme",
            PanelKind::Privacy => "Privacy",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Error,
}

/// What a panel controller needs from the UI that renders its form.
pub trait FormHost {
    fn get_values(&self) -> FormValues;
    /// Sets the given fields, leaving fields not present in `values` untouched.
    fn set_values(&self, values: FormValues);
    fn navigate_to(&self, panel: PanelKind);
    fn show_message(&self, kind: MessageKind, message: &str);
}
