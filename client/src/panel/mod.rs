use std::fmt;

use async_trait::async_trait;

use crate::{
    api::{ApiError, SettingsApi},
    form::{FormValues, PanelKind},
};

pub mod account;
pub mod notifications;
pub mod privacy;
pub mod theme;

pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to process your request";
pub const SUBMIT_IN_PROGRESS_MESSAGE: &str = "Your changes are still being saved";

/// A client-side rule violation, carrying the message shown to the user.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct ValidationError(pub String);

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

#[derive(Debug)]
pub enum SubmitOutcome<S> {
    Saved(S),
    /// A multi-step save stopped after some steps were applied. The applied
    /// steps are not rolled back.
    PartiallySaved {
        saved: S,
        error: ApiError,
        fallback_message: &'static str,
    },
    Failed(ApiError),
}

/// How one settings panel maps between the API entity and its form.
#[async_trait(?Send)]
pub trait SettingsPanel {
    type Settings: Clone + Default + fmt::Debug;

    fn kind(&self) -> PanelKind;

    fn success_message(&self) -> &'static str;

    fn failure_message(&self) -> &'static str {
        GENERIC_FAILURE_MESSAGE
    }

    /// Fields cleared from the form once a save fully succeeded.
    fn ephemeral_fields(&self) -> &'static [&'static str] {
        &[]
    }

    async fn load(&self, api: &dyn SettingsApi) -> Result<Self::Settings, ApiError>;

    fn to_form(&self, settings: &Self::Settings) -> FormValues;

    /// Applies the form on top of `base`, the last known server state, so
    /// fields the form does not render are submitted unchanged. Fails on the
    /// first rule the values break.
    fn from_form(
        &self,
        base: &Self::Settings,
        values: &FormValues,
    ) -> Result<Self::Settings, ValidationError>;

    async fn save(
        &self,
        api: &dyn SettingsApi,
        settings: &Self::Settings,
        values: &FormValues,
    ) -> SubmitOutcome<Self::Settings>;

    fn on_loaded(&self, _settings: &Self::Settings) {}

    fn on_saved(&self, _settings: &Self::Settings) {}
}
