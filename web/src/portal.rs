use std::rc::Rc;

use anyhow::Result;

use preferences_portal_client::{
    api::{HttpSettingsApi, SettingsApi},
    configuration::ClientConfig,
    controller::{AccountController, NotificationsController, PrivacyController, ThemeController},
    panel::{
        account::AccountPanel, notifications::NotificationsPanel, privacy::PrivacyPanel,
        theme::ThemePanel,
    },
    theme_override::ThemeOverrideManager,
};

use crate::{config::get_client_config, theme::WebStyleDocument};

/// Everything the panels share, built once when the application starts.
#[derive(Clone)]
pub struct Portal {
    pub config: ClientConfig,
    pub api: Rc<dyn SettingsApi>,
    pub overrides: Rc<ThemeOverrideManager<WebStyleDocument>>,
    pub account: Rc<AccountController>,
    pub notifications: Rc<NotificationsController>,
    pub privacy: Rc<PrivacyController>,
    pub theme: Rc<ThemeController<WebStyleDocument>>,
}

impl Portal {
    pub fn from_page() -> Result<Self> {
        Self::new(get_client_config()?)
    }

    pub fn new(config: ClientConfig) -> Result<Self> {
        let api: Rc<dyn SettingsApi> = Rc::new(HttpSettingsApi::new(&config)?);
        let overrides = Rc::new(ThemeOverrideManager::new(
            WebStyleDocument,
            &config.skins_base_url,
        ));

        Ok(Self {
            account: Rc::new(AccountController::new(
                AccountPanel::new(config.api_base_url.clone()),
                api.clone(),
            )),
            notifications: Rc::new(NotificationsController::new(
                NotificationsPanel,
                api.clone(),
            )),
            privacy: Rc::new(PrivacyController::new(PrivacyPanel, api.clone())),
            theme: Rc::new(ThemeController::new(
                ThemePanel::new(overrides.clone()),
                api.clone(),
            )),
            config,
            api,
            overrides,
        })
    }
}

impl PartialEq for Portal {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config && Rc::ptr_eq(&self.overrides, &other.overrides)
    }
}
