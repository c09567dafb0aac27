use async_trait::async_trait;

use preferences_portal::privacy::{PrivacyPreferences, ProfileVisibility};

use crate::{
    api::{ApiError, SettingsApi},
    form::{FormValues, PanelKind},
    panel::{SettingsPanel, SubmitOutcome, ValidationError},
};

pub mod fields {
    pub const PROFILE_VISIBILITY: &str = "profile_visibility";
    pub const SHOW_EMAIL: &str = "show_email";
    pub const DATA_SHARING: &str = "data_sharing";
}

pub const INVALID_VISIBILITY_MESSAGE: &str = "Choose who can see your profile";

#[derive(Debug, Clone, Copy, Default)]
pub struct PrivacyPanel;

#[async_trait(?Send)]
impl SettingsPanel for PrivacyPanel {
    type Settings = PrivacyPreferences;

    fn kind(&self) -> PanelKind {
        PanelKind::Privacy
    }

    fn success_message(&self) -> &'static str {
        "Privacy settings saved"
    }

    async fn load(&self, api: &dyn SettingsApi) -> Result<PrivacyPreferences, ApiError> {
        api.get_privacy_preferences().await
    }

    fn to_form(&self, preferences: &PrivacyPreferences) -> FormValues {
        FormValues::new()
            .with_text(
                fields::PROFILE_VISIBILITY,
                preferences.profile_visibility.to_string(),
            )
            .with_flag(fields::SHOW_EMAIL, preferences.show_email)
            .with_flag(fields::DATA_SHARING, preferences.data_sharing)
    }

    fn from_form(
        &self,
        base: &PrivacyPreferences,
        values: &FormValues,
    ) -> Result<PrivacyPreferences, ValidationError> {
        let profile_visibility = values
            .text(fields::PROFILE_VISIBILITY)
            .parse::<ProfileVisibility>()
            .map_err(|_| ValidationError::new(INVALID_VISIBILITY_MESSAGE))?;

        Ok(PrivacyPreferences {
            profile_visibility,
            show_email: values.flag(fields::SHOW_EMAIL),
            data_sharing: values.flag(fields::DATA_SHARING),
            ..base.clone()
        })
    }

    async fn save(
        &self,
        api: &dyn SettingsApi,
        preferences: &PrivacyPreferences,
        _values: &FormValues,
    ) -> SubmitOutcome<PrivacyPreferences> {
        match api.update_privacy_preferences(preferences).await {
            Ok(saved) => SubmitOutcome::Saved(saved),
            Err(error) => SubmitOutcome::Failed(error),
        }
    }
}
