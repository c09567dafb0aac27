use async_trait::async_trait;
use url::Url;

use preferences_portal::{
    user::{PasswordChangeRequest, UserProfile},
    utils::media_url::resolve_media_url,
};

use crate::{
    api::{ApiError, SettingsApi},
    form::{FormValues, PanelKind},
    panel::{SettingsPanel, SubmitOutcome, ValidationError},
};

pub mod fields {
    pub const EMAIL: &str = "email";
    pub const FIRST_NAME: &str = "first_name";
    pub const LAST_NAME: &str = "last_name";
    pub const PROFILE_PICTURE_URL: &str = "profile_picture_url";
    pub const CURRENT_PASSWORD: &str = "current_password";
    pub const NEW_PASSWORD: &str = "new_password";
    pub const CONFIRM_PASSWORD: &str = "confirm_password";

    pub const PASSWORDS: [&str; 3] = [CURRENT_PASSWORD, NEW_PASSWORD, CONFIRM_PASSWORD];
}

pub const INCOMPLETE_PASSWORD_MESSAGE: &str = "Please fill all password fields";
pub const PASSWORD_MISMATCH_MESSAGE: &str = "New password and confirmation do not match";
pub const PASSWORD_FAILURE_MESSAGE: &str = "Failed to update password";
pub const UPLOAD_SUCCESS_MESSAGE: &str = "Profile photo updated";
pub const UPLOAD_FAILURE_MESSAGE: &str = "Failed to upload profile photo";

#[derive(Debug, Clone)]
pub struct AccountPanel {
    api_base_url: Url,
}

impl AccountPanel {
    pub fn new(api_base_url: Url) -> Self {
        Self { api_base_url }
    }

    pub fn picture_url(&self, reference: Option<&str>) -> String {
        resolve_media_url(&self.api_base_url, reference)
    }
}

/// Password change requested by the form, if any. All three fields are
/// required as soon as one of them is filled in.
pub fn password_change(values: &FormValues) -> Result<Option<PasswordChangeRequest>, ValidationError> {
    let [current, new, confirm] = fields::PASSWORDS.map(|field| values.text(field));

    if current.is_empty() && new.is_empty() && confirm.is_empty() {
        return Ok(None);
    }
    if current.is_empty() || new.is_empty() || confirm.is_empty() {
        return Err(ValidationError::new(INCOMPLETE_PASSWORD_MESSAGE));
    }
    if new != confirm {
        return Err(ValidationError::new(PASSWORD_MISMATCH_MESSAGE));
    }

    Ok(Some(PasswordChangeRequest::new(current, new)))
}

#[async_trait(?Send)]
impl SettingsPanel for AccountPanel {
    type Settings = UserProfile;

    fn kind(&self) -> PanelKind {
        PanelKind::Account
    }

    fn success_message(&self) -> &'static str {
        "Account settings saved"
    }

    fn ephemeral_fields(&self) -> &'static [&'static str] {
        &fields::PASSWORDS
    }

    async fn load(&self, api: &dyn SettingsApi) -> Result<UserProfile, ApiError> {
        api.get_user_profile().await
    }

    fn to_form(&self, profile: &UserProfile) -> FormValues {
        FormValues::new()
            .with_text(fields::EMAIL, profile.email.clone())
            .with_text(fields::FIRST_NAME, profile.first_name.clone())
            .with_text(fields::LAST_NAME, profile.last_name.clone())
            .with_text(
                fields::PROFILE_PICTURE_URL,
                self.picture_url(profile.profile_picture.as_deref()),
            )
    }

    fn from_form(
        &self,
        base: &UserProfile,
        values: &FormValues,
    ) -> Result<UserProfile, ValidationError> {
        password_change(values)?;

        let profile = UserProfile {
            email: values.text(fields::EMAIL).trim().to_string(),
            first_name: values.text(fields::FIRST_NAME).trim().to_string(),
            last_name: values.text(fields::LAST_NAME).trim().to_string(),
            ..base.clone()
        };

        match profile.first_validation_error() {
            Some(message) => Err(ValidationError(message)),
            None => Ok(profile),
        }
    }

    async fn save(
        &self,
        api: &dyn SettingsApi,
        profile: &UserProfile,
        values: &FormValues,
    ) -> SubmitOutcome<UserProfile> {
        let password_request = match password_change(values) {
            Ok(request) => request,
            // from_form already rejected these values
            Err(_) => None,
        };

        let saved = match api.update_user_profile(profile).await {
            Ok(saved) => saved,
            Err(error) => return SubmitOutcome::Failed(error),
        };

        let Some(password_request) = password_request else {
            return SubmitOutcome::Saved(saved);
        };

        match api.update_password(&password_request).await {
            Ok(()) => SubmitOutcome::Saved(saved),
            Err(error) => SubmitOutcome::PartiallySaved {
                saved,
                error,
                fallback_message: PASSWORD_FAILURE_MESSAGE,
            },
        }
    }
}
