use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use url::Url;

use preferences_portal::user::UserId;

pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_SKINS_BASE_URL: &str = "/skins";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    pub api_base_url: Url,
    pub user_id: UserId,
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
    #[serde(default = "default_skins_base_url")]
    pub skins_base_url: String,
}

fn default_request_timeout_ms() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_MS
}

fn default_skins_base_url() -> String {
    DEFAULT_SKINS_BASE_URL.to_string()
}

impl ClientConfig {
    pub fn new(api_base_url: Url, user_id: UserId) -> Self {
        Self {
            api_base_url,
            user_id,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            skins_base_url: default_skins_base_url(),
        }
    }

    /// Reads the configuration from an optional file (any format supported
    /// by `config`, extension omitted) overridden by `PORTAL__*` variables,
    /// e.g. `PORTAL__API_BASE_URL`.
    pub fn load(config_file: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(config_file) = config_file {
            builder = builder.add_source(File::with_name(config_file).required(false));
        }

        builder
            .add_source(
                Environment::with_prefix("PORTAL")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Base URL that endpoint paths are joined to. It always ends with a
    /// slash, otherwise `Url::join` would drop its last path segment.
    pub fn endpoint_base_url(&self) -> Url {
        let mut url = self.api_base_url.clone();
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        url
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}
