use std::{fmt, num::ParseIntError, str::FromStr};

use secrecy::{CloneableSecret, DebugSecret, Secret, SerializableSecret, Zeroize};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{utils::data_url::encode_data_url, ExtraFields};

#[derive(Debug, Serialize, Deserialize, PartialEq, Copy, Clone, Eq, Hash)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl FromStr for UserId {
    type Err = ParseIntError;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        Ok(Self(id.trim().parse()?))
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default, Validate)]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    #[serde(default)]
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    /// Server-relative or absolute reference to the profile picture
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl UserProfile {
    const VALIDATED_FIELDS: [&'static str; 3] = ["email", "first_name", "last_name"];

    /// Returns the message of the first failing field rule, checking fields
    /// in the order they are displayed.
    pub fn first_validation_error(&self) -> Option<String> {
        let errors = self.validate().err()?;
        let field_errors = errors.field_errors();

        Self::VALIDATED_FIELDS.iter().find_map(|field| {
            let error = field_errors.get(*field)?.first()?;
            Some(
                error
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| format!("Invalid {field}")),
            )
        })
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct Password(pub String);

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password([REDACTED])")
    }
}

impl Zeroize for Password {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}
impl CloneableSecret for Password {}
impl DebugSecret for Password {}
impl SerializableSecret for Password {}

impl From<&str> for Password {
    fn from(password: &str) -> Self {
        Self(password.to_string())
    }
}

/// Body of a password update. Only lives for the duration of one submit.
#[derive(Debug, Serialize)]
pub struct PasswordChangeRequest {
    pub current_password: Secret<Password>,
    pub new_password: Secret<Password>,
}

impl PasswordChangeRequest {
    pub fn new(current_password: &str, new_password: &str) -> Self {
        Self {
            current_password: Secret::new(current_password.into()),
            new_password: Secret::new(new_password.into()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct ProfilePictureResponse {
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// A picture selected by the user, ready to be previewed and uploaded.
#[derive(Clone, PartialEq, Eq)]
pub struct ProfilePictureUpload {
    pub file_name: String,
    pub mime_type: String,
    pub content: Vec<u8>,
}

impl fmt::Debug for ProfilePictureUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfilePictureUpload")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("size", &self.content.len())
            .finish()
    }
}

impl ProfilePictureUpload {
    pub fn new(file_name: &str, mime_type: &str, content: Vec<u8>) -> Self {
        Self {
            file_name: file_name.to_string(),
            mime_type: if mime_type.is_empty() {
                "application/octet-stream".to_string()
            } else {
                mime_type.to_string()
            },
            content,
        }
    }

    pub fn preview_url(&self) -> String {
        encode_data_url(&self.mime_type, &self.content)
    }
}
