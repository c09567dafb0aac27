use anyhow::{anyhow, Context, Result};
use gloo_utils::errors::JsError;
use url::Url;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, HtmlInputElement};

use preferences_portal::user::ProfilePictureUpload;

pub fn js_error(err: JsValue) -> anyhow::Error {
    match JsError::try_from(err) {
        Ok(error) => anyhow!("{error}"),
        Err(error) => anyhow!("{error}"),
    }
}

pub fn get_document() -> Result<Document> {
    let window = web_sys::window().context("Unable to load `window`")?;
    window.document().context("Unable to load `document`")
}

pub fn get_element_by_id(id: &str) -> Result<Element> {
    get_document()?
        .get_element_by_id(id)
        .context(format!("Element `{id}` not found"))
}

pub fn current_origin() -> Result<Url> {
    let window = web_sys::window().context("Unable to load `window`")?;
    Ok(Url::parse(&window.location().origin().map_err(js_error)?)?)
}

/// Reads the first file selected in the `id` file input.
pub async fn read_selected_file(id: &str) -> Result<Option<ProfilePictureUpload>> {
    let input = get_element_by_id(id)?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| anyhow!("Element `{id}` is not an input"))?;
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return Ok(None);
    };

    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(js_error)?;
    let content = js_sys::Uint8Array::new(&buffer).to_vec();

    Ok(Some(ProfilePictureUpload::new(
        &file.name(),
        &file.type_(),
        content,
    )))
}
