use anyhow::{anyhow, Context, Result};
use web_sys::{Document, Element, HtmlHeadElement};

use preferences_portal_client::theme_override::StyleDocument;

use crate::utils::{get_document, js_error};

/// Writes theme overrides to the page `<head>` and root element.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebStyleDocument;

impl WebStyleDocument {
    fn head(document: &Document) -> Result<HtmlHeadElement> {
        document.head().context("Unable to find the document head")
    }

    fn root(document: &Document) -> Result<Element> {
        document
            .document_element()
            .context("Unable to get the document element")
    }

    /// Element `id` with the given tag, created and appended to the head if
    /// missing.
    fn head_element(document: &Document, id: &str, tag: &str) -> Result<Element> {
        if let Some(element) = document.get_element_by_id(id) {
            if element.tag_name().eq_ignore_ascii_case(tag) {
                return Ok(element);
            }
            element.remove();
        }

        let element = document.create_element(tag).map_err(js_error)?;
        element.set_id(id);
        Self::head(document)?
            .append_child(&element)
            .map_err(js_error)?;
        Ok(element)
    }
}

impl StyleDocument for WebStyleDocument {
    fn upsert_stylesheet(&self, id: &str, href: &str) -> Result<()> {
        let document = get_document()?;
        let link = Self::head_element(&document, id, "link")?;
        link.set_attribute("rel", "stylesheet").map_err(js_error)?;
        if link.get_attribute("href").as_deref() != Some(href) {
            link.set_attribute("href", href).map_err(js_error)?;
        }
        Ok(())
    }

    fn upsert_style_block(&self, id: &str, css: &str) -> Result<()> {
        let document = get_document()?;
        let style = Self::head_element(&document, id, "style")?;
        style.set_text_content(Some(css));
        Ok(())
    }

    fn remove_element(&self, id: &str) -> Result<()> {
        if let Some(element) = get_document()?.get_element_by_id(id) {
            element.remove();
        }
        Ok(())
    }

    fn set_root_attribute(&self, name: &str, value: &str) -> Result<()> {
        Self::root(&get_document()?)?
            .set_attribute(name, value)
            .map_err(js_error)
    }

    fn remove_root_attribute(&self, name: &str) -> Result<()> {
        Self::root(&get_document()?)?
            .remove_attribute(name)
            .map_err(|err| anyhow!("Unable to remove `{name}`: {}", js_error(err)))
    }
}
