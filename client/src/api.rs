use std::time::Duration;

use async_trait::async_trait;
use json_value_merge::Merge;
use log::{debug, error};
use reqwest::{
    header::{HeaderMap, HeaderValue},
    multipart, Client, Method, RequestBuilder, StatusCode,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use url::Url;

use preferences_portal::{
    notification::NotificationPreferences,
    privacy::PrivacyPreferences,
    theme::ThemePreferences,
    user::{
        PasswordChangeRequest, ProfilePictureResponse, ProfilePictureUpload, UserId, UserProfile,
    },
    utils::error_message::{extract_error_message, FailureReport},
};

use crate::configuration::ClientConfig;

#[cfg(not(target_arch = "wasm32"))]
static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

pub const PROFILE_PICTURE_FIELD: &str = "profile_picture";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid API URL")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Unable to build the HTTP client")]
    ClientSetup(#[source] reqwest::Error),
    #[error("Invalid upload: {file_name}")]
    InvalidUpload {
        file_name: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Request to {url} failed")]
    Network {
        url: Url,
        #[source]
        source: reqwest::Error,
    },
    #[error("Request to {url} timed out")]
    Timeout { url: Url },
    #[error("{method} {url} responded with {status}")]
    Status {
        method: Method,
        url: Url,
        status: StatusCode,
        body: Option<String>,
    },
    #[error("Unable to decode the response of {url}")]
    Decode {
        url: Url,
        body: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Only HTTP error responses carry text worth showing to the user;
    /// transport failures are reported through the caller's fallback.
    pub fn failure_report(&self) -> FailureReport {
        match self {
            ApiError::Status { status, body, .. } => FailureReport {
                response_text: body.clone(),
                response: None,
                status_text: status.canonical_reason().map(str::to_string),
            },
            _ => FailureReport::default(),
        }
    }

    pub fn user_message(&self, fallback: &str) -> String {
        extract_error_message(&self.failure_report(), fallback)
    }
}

/// The per-user settings endpoints the portal talks to.
#[async_trait(?Send)]
pub trait SettingsApi {
    async fn get_user_profile(&self) -> Result<UserProfile, ApiError>;
    async fn update_user_profile(&self, profile: &UserProfile) -> Result<UserProfile, ApiError>;
    async fn update_password(&self, request: &PasswordChangeRequest) -> Result<(), ApiError>;
    async fn upload_profile_picture(
        &self,
        upload: &ProfilePictureUpload,
    ) -> Result<ProfilePictureResponse, ApiError>;

    async fn get_notification_preferences(&self) -> Result<NotificationPreferences, ApiError>;
    async fn update_notification_preferences(
        &self,
        preferences: &NotificationPreferences,
    ) -> Result<NotificationPreferences, ApiError>;

    async fn get_privacy_preferences(&self) -> Result<PrivacyPreferences, ApiError>;
    async fn update_privacy_preferences(
        &self,
        preferences: &PrivacyPreferences,
    ) -> Result<PrivacyPreferences, ApiError>;

    async fn get_theme_preferences(&self) -> Result<ThemePreferences, ApiError>;
    async fn update_theme_preferences(
        &self,
        preferences: &ThemePreferences,
    ) -> Result<ThemePreferences, ApiError>;
}

#[derive(Clone, Debug)]
pub struct HttpSettingsApi {
    client: Client,
    base_url: Url,
    user_id: UserId,
}

impl HttpSettingsApi {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        Ok(Self {
            client: build_client(config.request_timeout())?,
            base_url: config.endpoint_base_url(),
            user_id: config.user_id,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn user_path(&self, suffix: &str) -> String {
        format!("users/{}/{suffix}", self.user_id)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let request = self.client.request(method, url);
        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();
        request
    }

    async fn call_api<R: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<R, ApiError> {
        let url = self.base_url.join(path)?;
        let text = self.send(method, url.clone(), body).await?;

        serde_json::from_str(&text).map_err(|source| ApiError::Decode {
            url,
            body: text,
            source,
        })
    }

    /// PUTs `entity` and returns it with whatever fields the server echoed
    /// back merged over it. An empty or non-object response means nothing
    /// was echoed and the submitted entity stands.
    async fn put_and_reconcile<T: Serialize + DeserializeOwned + Clone>(
        &self,
        path: &str,
        entity: &T,
    ) -> Result<T, ApiError> {
        let url = self.base_url.join(path)?;
        let text = self.send(Method::PUT, url.clone(), Some(entity)).await?;

        reconcile(url, entity, &text)
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> Result<String, ApiError> {
        let mut request = self.request(method.clone(), url.clone());
        if let Some(body) = body {
            request = request.json(body);
        }

        execute(method, url, request).await
    }
}

async fn execute(method: Method, url: Url, request: RequestBuilder) -> Result<String, ApiError> {
    debug!("Calling {method} {url}");
    let response = request
        .send()
        .await
        .map_err(|source| transport_error(&url, source))?;
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|source| transport_error(&url, source))?;

    if !status.is_success() {
        error!("{method} {url} responded with {status}");
        return Err(ApiError::Status {
            method,
            url,
            status,
            body: (!body.is_empty()).then_some(body),
        });
    }

    Ok(body)
}

fn transport_error(url: &Url, source: reqwest::Error) -> ApiError {
    if source.is_timeout() {
        ApiError::Timeout { url: url.clone() }
    } else {
        ApiError::Network {
            url: url.clone(),
            source,
        }
    }
}

fn reconcile<T: Serialize + DeserializeOwned + Clone>(
    url: Url,
    submitted: &T,
    echoed: &str,
) -> Result<T, ApiError> {
    if echoed.trim().is_empty() {
        return Ok(submitted.clone());
    }

    let decode_error = |source| ApiError::Decode {
        url: url.clone(),
        body: echoed.to_string(),
        source,
    };
    let echo: Value = serde_json::from_str(echoed).map_err(decode_error)?;
    if !echo.is_object() {
        debug!("{url} did not echo an object, keeping the submitted values");
        return Ok(submitted.clone());
    }

    let mut merged = serde_json::to_value(submitted).map_err(decode_error)?;
    merged.merge(&echo);
    serde_json::from_value(merged).map_err(decode_error)
}

fn build_client(timeout: Duration) -> Result<Client, ApiError> {
    let builder = reqwest::ClientBuilder::new().default_headers({
        let mut headers = HeaderMap::new();
        headers.insert("Accept", HeaderValue::from_static("application/json"));
        headers
    });

    #[cfg(not(target_arch = "wasm32"))]
    let builder = builder.timeout(timeout).user_agent(APP_USER_AGENT);
    // The browser's fetch has its own limits, reqwest cannot time it out.
    #[cfg(target_arch = "wasm32")]
    let _ = timeout;

    builder.build().map_err(ApiError::ClientSetup)
}

#[async_trait(?Send)]
impl SettingsApi for HttpSettingsApi {
    async fn get_user_profile(&self) -> Result<UserProfile, ApiError> {
        self.call_api(Method::GET, &self.user_path(""), None::<&()>)
            .await
    }

    async fn update_user_profile(&self, profile: &UserProfile) -> Result<UserProfile, ApiError> {
        self.put_and_reconcile(&self.user_path("update/"), profile)
            .await
    }

    async fn update_password(&self, request: &PasswordChangeRequest) -> Result<(), ApiError> {
        let url = self.base_url.join(&self.user_path("password/update/"))?;
        self.send(Method::PUT, url, Some(request)).await?;
        Ok(())
    }

    async fn upload_profile_picture(
        &self,
        upload: &ProfilePictureUpload,
    ) -> Result<ProfilePictureResponse, ApiError> {
        let url = self.base_url.join(&self.user_path("profile-picture/"))?;
        let part = multipart::Part::bytes(upload.content.clone())
            .file_name(upload.file_name.clone())
            .mime_str(&upload.mime_type)
            .map_err(|source| ApiError::InvalidUpload {
                file_name: upload.file_name.clone(),
                source,
            })?;
        let form = multipart::Form::new().part(PROFILE_PICTURE_FIELD, part);
        let request = self.request(Method::POST, url.clone()).multipart(form);

        let text = execute(Method::POST, url.clone(), request).await?;
        if text.trim().is_empty() {
            return Ok(ProfilePictureResponse::default());
        }
        serde_json::from_str(&text).map_err(|source| ApiError::Decode {
            url,
            body: text,
            source,
        })
    }

    async fn get_notification_preferences(&self) -> Result<NotificationPreferences, ApiError> {
        self.call_api(Method::GET, &self.user_path("notifications/"), None::<&()>)
            .await
    }

    async fn update_notification_preferences(
        &self,
        preferences: &NotificationPreferences,
    ) -> Result<NotificationPreferences, ApiError> {
        self.put_and_reconcile(&self.user_path("notifications/update/"), preferences)
            .await
    }

    async fn get_privacy_preferences(&self) -> Result<PrivacyPreferences, ApiError> {
        self.call_api(Method::GET, &self.user_path("privacy/"), None::<&()>)
            .await
    }

    async fn update_privacy_preferences(
        &self,
        preferences: &PrivacyPreferences,
    ) -> Result<PrivacyPreferences, ApiError> {
        self.put_and_reconcile(&self.user_path("privacy/update/"), preferences)
            .await
    }

    async fn get_theme_preferences(&self) -> Result<ThemePreferences, ApiError> {
        self.call_api(Method::GET, &self.user_path("theme/"), None::<&()>)
            .await
    }

    async fn update_theme_preferences(
        &self,
        preferences: &ThemePreferences,
    ) -> Result<ThemePreferences, ApiError> {
        self.put_and_reconcile(&self.user_path("theme/update/"), preferences)
            .await
    }
}
