use std::{fmt, str::FromStr};

use regex::Regex;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};
use thiserror::Error;

use crate::ExtraFields;

pub const DEFAULT_SENTINEL: &str = "default";

lazy_static! {
    static ref HEX_COLOR_RE: Regex =
        Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("valid hex color regex");
}

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
pub enum Skin {
    #[default]
    Material,
    Mini,
    Flat,
    Compact,
    Contrast,
    Willow,
    Dark,
}

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
pub enum FontFamily {
    #[default]
    #[serde(alias = "system")]
    #[strum(to_string = "default", serialize = "system")]
    Default,
    Sans,
    Serif,
    Mono,
}

impl FontFamily {
    /// CSS `font-family` stack, `None` when the skin font must be kept.
    pub fn css_stack(&self) -> Option<&'static str> {
        match self {
            FontFamily::Default => None,
            FontFamily::Sans => Some("\"Helvetica Neue\", Arial, sans-serif"),
            FontFamily::Serif => Some("Georgia, \"Times New Roman\", serif"),
            FontFamily::Mono => Some("\"SFMono-Regular\", Menlo, Consolas, monospace"),
        }
    }
}

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
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("`{0}` is not a valid color, expected `default` or a hex color like #4b7bec")]
pub struct InvalidColor(pub String);

/// Accent color: either the skin's own color or a hex override.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PrimaryColor {
    #[default]
    Default,
    Custom(String),
}

impl PrimaryColor {
    pub fn is_default(&self) -> bool {
        matches!(self, PrimaryColor::Default)
    }
}

impl FromStr for PrimaryColor {
    type Err = InvalidColor;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(DEFAULT_SENTINEL) {
            return Ok(PrimaryColor::Default);
        }

        if HEX_COLOR_RE.is_match(value) {
            Ok(PrimaryColor::Custom(value.to_ascii_lowercase()))
        } else {
            Err(InvalidColor(value.to_string()))
        }
    }
}

impl TryFrom<String> for PrimaryColor {
    type Error = InvalidColor;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PrimaryColor> for String {
    fn from(color: PrimaryColor) -> Self {
        color.to_string()
    }
}

impl fmt::Display for PrimaryColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimaryColor::Default => f.write_str(DEFAULT_SENTINEL),
            PrimaryColor::Custom(color) => f.write_str(color),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct ThemePreferences {
    #[serde(default)]
    pub skin: Skin,
    #[serde(default)]
    pub primary_color: PrimaryColor,
    #[serde(default)]
    pub font_family: FontFamily,
    #[serde(default)]
    pub theme_mode: ThemeMode,
    #[serde(flatten)]
    pub extra: ExtraFields,
}
