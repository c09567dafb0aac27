use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

use crate::ExtraFields;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, AsRefStr, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum NotificationChannel {
    PushMessages,
    PushComments,
    PushReminders,
    EmailNews,
    EmailMessages,
    EmailReminders,
}

impl NotificationChannel {
    pub fn label(&self) -> &'static str {
        match self {
            NotificationChannel::PushMessages => "New messages",
            NotificationChannel::PushComments => "Comments on your posts",
            NotificationChannel::PushReminders => "Reminders",
            NotificationChannel::EmailNews => "News and announcements",
            NotificationChannel::EmailMessages => "Message digests",
            NotificationChannel::EmailReminders => "Reminder emails",
        }
    }

    pub fn is_push(&self) -> bool {
        matches!(
            self,
            NotificationChannel::PushMessages
                | NotificationChannel::PushComments
                | NotificationChannel::PushReminders
        )
    }
}

/// Per-channel switches as sent by the server. The whole object is kept so
/// that keys this client does not know about survive a save.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct NotificationPreferences(pub ExtraFields);

impl NotificationPreferences {
    pub fn is_enabled(&self, channel: NotificationChannel) -> bool {
        self.0
            .get(channel.as_ref())
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    pub fn set(&mut self, channel: NotificationChannel, enabled: bool) {
        self.0
            .insert(channel.as_ref().to_string(), Value::Bool(enabled));
    }

    pub fn with(mut self, channel: NotificationChannel, enabled: bool) -> Self {
        self.set(channel, enabled);
        self
    }

    pub fn channels(&self) -> impl Iterator<Item = (NotificationChannel, bool)> + '_ {
        NotificationChannel::iter().map(|channel| (channel, self.is_enabled(channel)))
    }
}
