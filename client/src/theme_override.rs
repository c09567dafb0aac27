use std::{cell::RefCell, collections::BTreeMap};

use anyhow::Result;
use log::debug;

use preferences_portal::theme::{PrimaryColor, ThemePreferences};

pub const SKIN_STYLESHEET_ID: &str = "portal-skin";
pub const COLOR_OVERRIDE_ID: &str = "portal-color-override";
pub const FONT_OVERRIDE_ID: &str = "portal-font-override";
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// The part of the page's document the theme overrides are written to.
/// Every element is addressed by its id, so upserting twice replaces
/// instead of duplicating.
pub trait StyleDocument {
    fn upsert_stylesheet(&self, id: &str, href: &str) -> Result<()>;
    fn upsert_style_block(&self, id: &str, css: &str) -> Result<()>;
    /// Removing an element that does not exist is not an error.
    fn remove_element(&self, id: &str) -> Result<()>;
    fn set_root_attribute(&self, name: &str, value: &str) -> Result<()>;
    fn remove_root_attribute(&self, name: &str) -> Result<()>;
}

/// Applies theme preferences to a document through elements it owns, and
/// only through those.
#[derive(Debug)]
pub struct ThemeOverrideManager<D: StyleDocument> {
    document: D,
    skins_base_url: String,
}

impl<D: StyleDocument> ThemeOverrideManager<D> {
    pub fn new(document: D, skins_base_url: &str) -> Self {
        Self {
            document,
            skins_base_url: skins_base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn skin_href(&self, preferences: &ThemePreferences) -> String {
        format!("{}/{}.css", self.skins_base_url, preferences.skin)
    }

    pub fn apply(&self, preferences: &ThemePreferences) -> Result<()> {
        debug!(
            "Applying theme skin={} color={} font={} mode={}",
            preferences.skin,
            preferences.primary_color,
            preferences.font_family,
            preferences.theme_mode
        );
        self.document
            .upsert_stylesheet(SKIN_STYLESHEET_ID, &self.skin_href(preferences))?;

        match color_override_css(&preferences.primary_color) {
            Some(css) => self.document.upsert_style_block(COLOR_OVERRIDE_ID, &css)?,
            None => self.document.remove_element(COLOR_OVERRIDE_ID)?,
        }

        match preferences.font_family.css_stack() {
            Some(stack) => self
                .document
                .upsert_style_block(FONT_OVERRIDE_ID, &font_override_css(stack))?,
            None => self.document.remove_element(FONT_OVERRIDE_ID)?,
        }

        self.document
            .set_root_attribute(THEME_ATTRIBUTE, preferences.theme_mode.as_ref())
    }

    pub fn clear(&self) -> Result<()> {
        debug!("Clearing theme overrides");
        for id in [SKIN_STYLESHEET_ID, COLOR_OVERRIDE_ID, FONT_OVERRIDE_ID] {
            self.document.remove_element(id)?;
        }
        self.document.remove_root_attribute(THEME_ATTRIBUTE)
    }
}

fn color_override_css(color: &PrimaryColor) -> Option<String> {
    match color {
        PrimaryColor::Default => None,
        PrimaryColor::Custom(color) => Some(format!(
            ":root {{ --app-primary-color: {color}; }}\n\
             .btn-primary, .theme-preview-button {{ background-color: {color}; border-color: {color}; }}"
        )),
    }
}

fn font_override_css(stack: &str) -> String {
    format!(":root {{ --app-font-family: {stack}; }}\nbody {{ font-family: {stack}; }}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleNode {
    Stylesheet { href: String },
    StyleBlock { css: String },
}

/// A `StyleDocument` kept in memory, for headless use and tests.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    nodes: RefCell<BTreeMap<String, StyleNode>>,
    root_attributes: RefCell<BTreeMap<String, String>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(&self, id: &str) -> Option<StyleNode> {
        self.nodes.borrow().get(id).cloned()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.borrow().len()
    }

    pub fn root_attribute(&self, name: &str) -> Option<String> {
        self.root_attributes.borrow().get(name).cloned()
    }
}

impl StyleDocument for MemoryDocument {
    fn upsert_stylesheet(&self, id: &str, href: &str) -> Result<()> {
        self.nodes.borrow_mut().insert(
            id.to_string(),
            StyleNode::Stylesheet {
                href: href.to_string(),
            },
        );
        Ok(())
    }

    fn upsert_style_block(&self, id: &str, css: &str) -> Result<()> {
        self.nodes.borrow_mut().insert(
            id.to_string(),
            StyleNode::StyleBlock {
                css: css.to_string(),
            },
        );
        Ok(())
    }

    fn remove_element(&self, id: &str) -> Result<()> {
        self.nodes.borrow_mut().remove(id);
        Ok(())
    }

    fn set_root_attribute(&self, name: &str, value: &str) -> Result<()> {
        self.root_attributes
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn remove_root_attribute(&self, name: &str) -> Result<()> {
        self.root_attributes.borrow_mut().remove(name);
        Ok(())
    }
}
