use async_trait::async_trait;
use strum::IntoEnumIterator;

use preferences_portal::notification::{NotificationChannel, NotificationPreferences};

use crate::{
    api::{ApiError, SettingsApi},
    form::{FormValues, PanelKind},
    panel::{SettingsPanel, SubmitOutcome, ValidationError},
};

/// One switch per channel, named after the channel key.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotificationsPanel;

#[async_trait(?Send)]
impl SettingsPanel for NotificationsPanel {
    type Settings = NotificationPreferences;

    fn kind(&self) -> PanelKind {
        PanelKind::Notifications
    }

    fn success_message(&self) -> &'static str {
        "Notification settings saved"
    }

    async fn load(&self, api: &dyn SettingsApi) -> Result<NotificationPreferences, ApiError> {
        api.get_notification_preferences().await
    }

    fn to_form(&self, preferences: &NotificationPreferences) -> FormValues {
        preferences
            .channels()
            .fold(FormValues::new(), |values, (channel, enabled)| {
                values.with_flag(channel.as_ref(), enabled)
            })
    }

    fn from_form(
        &self,
        base: &NotificationPreferences,
        values: &FormValues,
    ) -> Result<NotificationPreferences, ValidationError> {
        Ok(NotificationChannel::iter().fold(base.clone(), |preferences, channel| {
            preferences.with(channel, values.flag(channel.as_ref()))
        }))
    }

    async fn save(
        &self,
        api: &dyn SettingsApi,
        preferences: &NotificationPreferences,
        _values: &FormValues,
    ) -> SubmitOutcome<NotificationPreferences> {
        match api.update_notification_preferences(preferences).await {
            Ok(saved) => SubmitOutcome::Saved(saved),
            Err(error) => SubmitOutcome::Failed(error),
        }
    }
}
