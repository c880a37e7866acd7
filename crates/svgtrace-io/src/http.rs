//! Requests to the conversion endpoint via `fetch`.
//!
//! Uploads and parameter updates are both `multipart/form-data` POSTs
//! to the same path, answered with the JSON shape described in
//! [`svgtrace_protocol::response`]. The body is decoded regardless of
//! HTTP status, because the server reports rejected uploads with a 4xx
//! status and a JSON `error`.
//!
//! All functions in this module require a browser environment
//! (`wasm32-unknown-unknown` target).

use svgtrace_protocol::{ConvertResponse, RequestFailure, ResponseError, TraceParams, upload};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{BlobPropertyBag, FormData, Request, RequestInit, Response};

/// Errors from a request to the conversion endpoint.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// A browser API call failed, including network failures.
    #[error("browser API error: {0}")]
    JsError(String),

    /// The response body was not the expected JSON.
    #[error("malformed response: {0}")]
    Decode(String),

    /// The server reported failure. The text is meant for the user.
    #[error("{0}")]
    Server(String),
}

impl From<JsValue> for RequestError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

impl From<ResponseError> for RequestError {
    fn from(value: ResponseError) -> Self {
        match value {
            ResponseError::Server(text) => Self::Server(text),
            ResponseError::MissingSvgPath => Self::Decode(value.to_string()),
        }
    }
}

impl From<&RequestError> for RequestFailure {
    fn from(value: &RequestError) -> Self {
        match value {
            RequestError::Server(text) => Self::Server(text.clone()),
            RequestError::JsError(_) | RequestError::Decode(_) => Self::Transport,
        }
    }
}

/// Upload an image for a fresh conversion.
///
/// Sends the bytes as the multipart field `file`. Resolves to the
/// server path of the generated SVG.
///
/// # Errors
///
/// Returns [`RequestError::Server`] if the server rejects the upload,
/// and [`RequestError::JsError`] / [`RequestError::Decode`] for
/// transport or decoding failures.
#[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
pub async fn upload_file(
    endpoint: &str,
    bytes: &[u8],
    filename: &str,
) -> Result<String, RequestError> {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes).buffer());
    let opts = BlobPropertyBag::new();
    opts.set_type(upload::mime_type_for(filename));
    let blob = web_sys::Blob::new_with_buffer_source_sequence_and_options(&parts, &opts)?;

    let form = FormData::new()?;
    form.append_with_blob_and_filename("file", &blob, filename)?;

    log::debug!("uploading {filename} ({} bytes) to {endpoint}", bytes.len());
    post_form(endpoint, &form).await
}

/// Re-render the current image with new parameters.
///
/// Sends `update=true` followed by every parameter as a form field.
/// Resolves to the server path of the regenerated SVG.
///
/// # Errors
///
/// Same as [`upload_file`].
#[allow(clippy::future_not_send)]
pub async fn submit_update(endpoint: &str, params: &TraceParams) -> Result<String, RequestError> {
    let form = FormData::new()?;
    for (name, value) in params.form_fields() {
        form.append_with_str(name, &value)?;
    }

    log::debug!("submitting parameter update to {endpoint}: {params:?}");
    post_form(endpoint, &form).await
}

/// POST a form and reduce the JSON answer to an SVG path.
#[allow(clippy::future_not_send)]
async fn post_form(endpoint: &str, form: &FormData) -> Result<String, RequestError> {
    let window =
        web_sys::window().ok_or_else(|| RequestError::JsError("no global window".into()))?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(form);
    let request = Request::new_with_str_and_init(endpoint, &init)?;

    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()
        .map_err(|v| RequestError::JsError(format!("fetch resolved to non-Response: {v:?}")))?;
    let status = response.status();

    let body = JsFuture::from(response.text()?)
        .await?
        .as_string()
        .ok_or_else(|| RequestError::Decode("response body is not text".into()))?;

    let decoded = ConvertResponse::from_json(&body)
        .map_err(|e| RequestError::Decode(format!("HTTP {status}: {e}")))?;
    let path = decoded.into_outcome()?;
    log::info!("server rendered {path} (HTTP {status})");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_errors_keep_their_text() {
        let err = RequestError::Server("No selected file".into());
        assert_eq!(
            RequestFailure::from(&err),
            RequestFailure::Server("No selected file".into())
        );
    }

    #[test]
    fn browser_and_decode_errors_are_transport() {
        let js = RequestError::JsError("TypeError: Failed to fetch".into());
        let decode = RequestError::from(ResponseError::MissingSvgPath);
        assert_eq!(RequestFailure::from(&js), RequestFailure::Transport);
        assert_eq!(RequestFailure::from(&decode), RequestFailure::Transport);
    }
}
