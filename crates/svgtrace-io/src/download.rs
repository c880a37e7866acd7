//! Download triggers.
//!
//! The SVG already lives on the server, so it is saved by clicking a
//! temporary `<a download>` pointing at the displayed image's URL. The
//! PNG is rendered server-side on request and arrives as an attachment,
//! so it is fetched by plain navigation.
//!
//! All functions in this module require a browser environment
//! (`wasm32-unknown-unknown` target).

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;

/// Errors that can occur when triggering a download.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for DownloadError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Save the resource at `href` under `filename`.
///
/// `href` is used exactly as given, cache-busting query included.
///
/// # Errors
///
/// Returns [`DownloadError::JsError`] if any browser API call fails
/// (element creation, cast, or attaching to the document body).
pub fn download_url(href: &str, filename: &str) -> Result<(), DownloadError> {
    let window =
        web_sys::window().ok_or_else(|| DownloadError::JsError("no global window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| DownloadError::JsError("no document".into()))?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|e| DownloadError::JsError(format!("failed to cast element: {e:?}")))?;

    anchor.set_href(href);
    anchor.set_download(filename);

    let body = document
        .body()
        .ok_or_else(|| DownloadError::JsError("no document body".into()))?;
    body.append_child(&anchor)?;
    anchor.click();

    // The download has started; a failed removal only leaves a stray node.
    if let Err(e) = body.remove_child(&anchor) {
        log::warn!("failed to remove download anchor: {e:?}");
    }

    log::info!("download started: {filename}");
    Ok(())
}

/// Navigate the window to `path`, letting the server's
/// `Content-Disposition` turn the navigation into a download.
///
/// # Errors
///
/// Returns [`DownloadError::JsError`] if there is no window or the
/// location cannot be set.
pub fn download_via_navigation(path: &str) -> Result<(), DownloadError> {
    let window =
        web_sys::window().ok_or_else(|| DownloadError::JsError("no global window".into()))?;
    window.location().set_href(path)?;
    Ok(())
}
