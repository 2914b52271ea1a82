//! File downloads via Blob object URLs.
//!
//! The finished-run panel hands the visitor a placeholder file. Browsers
//! have no imperative "save file" API, so this builds a `Blob`, wraps it
//! in an object URL and clicks a temporary `<a download>` element.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::BlobPropertyBag;

/// Errors raised while triggering a download.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    #[error("browser API error: {0}")]
    Js(String),
}

impl From<JsValue> for DownloadError {
    fn from(value: JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }
}

/// Save `contents` as a file named `filename` on the visitor's machine.
///
/// The object URL is revoked once the click has been dispatched; by then
/// the browser owns the download.
pub fn save_text_file(
    contents: &str,
    filename: &str,
    mime_type: &str,
) -> Result<(), DownloadError> {
    let document = gloo_utils::document();

    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let options = BlobPropertyBag::new();
    options.set_type(mime_type);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let anchor = document
        .create_element("a")?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| DownloadError::Js("anchor element cast failed".into()))?;
    anchor.set_href(&url);
    anchor.set_download(filename);

    let body = document
        .body()
        .ok_or_else(|| DownloadError::Js("no document body".into()))?;
    body.append_child(&anchor)?;
    anchor.click();

    // The download is already on its way, cleanup is best effort.
    let _ = body.remove_child(&anchor);
    let _ = web_sys::Url::revoke_object_url(&url);

    Ok(())
}
