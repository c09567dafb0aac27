use anyhow::{anyhow, Context, Result};
use url::Url;
use wasm_bindgen::prelude::*;

use preferences_portal::user::UserId;
use preferences_portal_client::configuration::ClientConfig;

use crate::utils::current_origin;

#[wasm_bindgen(module = "/js/api.js")]
extern "C" {
    fn api_base_url() -> String;
    fn user_id() -> String;
    fn skins_base_url() -> String;
}

pub fn get_api_base_url() -> Result<Url> {
    match Url::parse(&api_base_url()) {
        Ok(url) => Ok(url),
        Err(err) => match current_origin()?.join(&api_base_url()) {
            Ok(url) => Ok(url),
            Err(_) => Err(anyhow!("Failed to parse api_base_url: {}", err)),
        },
    }
}

pub fn get_client_config() -> Result<ClientConfig> {
    let user_id: UserId = user_id()
        .parse()
        .context("Failed to parse the configured user_id")?;

    Ok(ClientConfig {
        skins_base_url: skins_base_url(),
        ..ClientConfig::new(get_api_base_url()?, user_id)
    })
}
