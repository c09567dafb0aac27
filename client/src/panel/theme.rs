use std::rc::Rc;

use async_trait::async_trait;
use log::{debug, error};

use preferences_portal::theme::{FontFamily, PrimaryColor, Skin, ThemeMode, ThemePreferences};

use crate::{
    api::{ApiError, SettingsApi},
    form::{FormValues, PanelKind},
    panel::{SettingsPanel, SubmitOutcome, ValidationError},
    theme_override::{StyleDocument, ThemeOverrideManager},
};

pub mod fields {
    pub const SKIN: &str = "skin";
    pub const PRIMARY_COLOR: &str = "primary_color";
    pub const FONT_FAMILY: &str = "font_family";
    pub const THEME_MODE: &str = "theme_mode";
}

pub const INVALID_SKIN_MESSAGE: &str = "Choose one of the available skins";
pub const INVALID_COLOR_MESSAGE: &str = "Enter a color like #4b7bec, or keep the default color";
pub const INVALID_FONT_MESSAGE: &str = "Choose one of the available fonts";
pub const INVALID_MODE_MESSAGE: &str = "Choose light or dark mode";

/// The Theme panel shares the application's override manager: whatever it
/// loads, saves or previews is applied to the page right away.
pub struct ThemePanel<D: StyleDocument> {
    overrides: Rc<ThemeOverrideManager<D>>,
}

impl<D: StyleDocument> ThemePanel<D> {
    pub fn new(overrides: Rc<ThemeOverrideManager<D>>) -> Self {
        Self { overrides }
    }

    /// Applies unsaved form values to the page. Values that do not validate
    /// yet leave the current overrides in place.
    pub fn preview(&self, base: &ThemePreferences, values: &FormValues) {
        match self.from_form(base, values) {
            Ok(preferences) => self.apply(&preferences),
            Err(error) => debug!("Not previewing theme: {error}"),
        }
    }

    fn apply(&self, preferences: &ThemePreferences) {
        if let Err(error) = self.overrides.apply(preferences) {
            error!("Unable to apply theme overrides: {error:?}");
        }
    }
}

/// Applies the saved theme before any panel is displayed.
pub async fn bootstrap_theme<D: StyleDocument>(
    api: &dyn SettingsApi,
    overrides: &ThemeOverrideManager<D>,
) -> Result<ThemePreferences, ApiError> {
    let preferences = api.get_theme_preferences().await.inspect_err(|error| {
        error!("Unable to load theme preferences: {error}");
    })?;

    if let Err(error) = overrides.apply(&preferences) {
        error!("Unable to apply theme overrides: {error:?}");
    }
    Ok(preferences)
}

fn parse_field<T: std::str::FromStr>(
    values: &FormValues,
    field: &str,
    message: &str,
) -> Result<T, ValidationError> {
    values
        .text(field)
        .trim()
        .parse()
        .map_err(|_| ValidationError::new(message))
}

#[async_trait(?Send)]
impl<D: StyleDocument> SettingsPanel for ThemePanel<D> {
    type Settings = ThemePreferences;

    fn kind(&self) -> PanelKind {
        PanelKind::Theme
    }

    fn success_message(&self) -> &'static str {
        "Theme settings saved"
    }

    async fn load(&self, api: &dyn SettingsApi) -> Result<ThemePreferences, ApiError> {
        api.get_theme_preferences().await
    }

    fn to_form(&self, preferences: &ThemePreferences) -> FormValues {
        FormValues::new()
            .with_text(fields::SKIN, preferences.skin.to_string())
            .with_text(fields::PRIMARY_COLOR, preferences.primary_color.to_string())
            .with_text(fields::FONT_FAMILY, preferences.font_family.to_string())
            .with_text(fields::THEME_MODE, preferences.theme_mode.to_string())
    }

    fn from_form(
        &self,
        base: &ThemePreferences,
        values: &FormValues,
    ) -> Result<ThemePreferences, ValidationError> {
        Ok(ThemePreferences {
            skin: parse_field::<Skin>(values, fields::SKIN, INVALID_SKIN_MESSAGE)?,
            primary_color: parse_field::<PrimaryColor>(
                values,
                fields::PRIMARY_COLOR,
                INVALID_COLOR_MESSAGE,
            )?,
            font_family: parse_field::<FontFamily>(values, fields::FONT_FAMILY, INVALID_FONT_MESSAGE)?,
            theme_mode: parse_field::<ThemeMode>(values, fields::THEME_MODE, INVALID_MODE_MESSAGE)?,
            ..base.clone()
        })
    }

    async fn save(
        &self,
        api: &dyn SettingsApi,
        preferences: &ThemePreferences,
        _values: &FormValues,
    ) -> SubmitOutcome<ThemePreferences> {
        match api.update_theme_preferences(preferences).await {
            Ok(saved) => SubmitOutcome::Saved(saved),
            Err(error) => SubmitOutcome::Failed(error),
        }
    }

    fn on_loaded(&self, preferences: &ThemePreferences) {
        self.apply(preferences);
    }

    fn on_saved(&self, preferences: &ThemePreferences) {
        self.apply(preferences);
    }
}
