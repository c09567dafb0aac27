use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::ExtraFields;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ProfileVisibility {
    #[default]
    Public,
    Friends,
    Private,
}

impl ProfileVisibility {
    pub fn label(&self) -> &'static str {
        match self {
            ProfileVisibility::Public => "Public",
            ProfileVisibility::Friends => "Friends only",
            ProfileVisibility::Private => "Only me",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct PrivacyPreferences {
    #[serde(default)]
    pub profile_visibility: ProfileVisibility,
    #[serde(default)]
    pub show_email: bool,
    #[serde(default)]
    pub data_sharing: bool,
    #[serde(flatten)]
    pub extra: ExtraFields,
}
