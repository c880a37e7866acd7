//! Conversion endpoint response decoding.
//!
//! Both the upload and the update request are answered with the same
//! JSON shape:
//!
//! ```json
//! { "success": true, "svg_path": "/static/output.svg" }
//! { "success": false, "error": "No image uploaded yet" }
//! ```
//!
//! Error responses sent with a 4xx/5xx status omit `success`
//! entirely, so a missing flag is read as `false`.

use serde::{Deserialize, Serialize};

/// Alert text used when the server fails without saying why.
///
/// Replaces the literal `undefined` a bare `alert(data.error)` would show
/// for `{"success": false}`.
pub const UNSPECIFIED_ERROR: &str = "The server reported an error.";

/// Raw response body from the conversion endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConvertResponse {
    /// Whether the conversion succeeded.
    #[serde(default)]
    pub success: bool,
    /// Server path of the generated SVG (present on success).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub svg_path: Option<String>,
    /// Human-readable failure reason (present on failure).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Why a decoded response did not yield an SVG path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResponseError {
    /// The server reported failure. The text is shown to the user as-is.
    #[error("{0}")]
    Server(String),

    /// The server claimed success but sent no path.
    #[error("response reported success without an svg_path")]
    MissingSvgPath,
}

impl ConvertResponse {
    /// Decode a response body.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if `body` is not a JSON object of
    /// the expected shape.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    /// Reduce the response to the SVG path or the reason there is none.
    ///
    /// # Errors
    ///
    /// - [`ResponseError::Server`] when `success` is false, carrying the
    ///   server's `error` text (or [`UNSPECIFIED_ERROR`]).
    /// - [`ResponseError::MissingSvgPath`] when `success` is true but
    ///   `svg_path` is absent.
    pub fn into_outcome(self) -> Result<String, ResponseError> {
        if self.success {
            self.svg_path.ok_or(ResponseError::MissingSvgPath)
        } else {
            Err(ResponseError::Server(
                self.error.unwrap_or_else(|| UNSPECIFIED_ERROR.to_owned()),
            ))
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn success_yields_path() {
        let r = ConvertResponse::from_json(r#"{"success": true, "svg_path": "/static/output.svg"}"#)
            .unwrap();
        assert_eq!(r.into_outcome(), Ok("/static/output.svg".to_owned()));
    }

    #[test]
    fn failure_yields_server_text_verbatim() {
        let r = ConvertResponse::from_json(r#"{"success": false, "error": "No image uploaded yet"}"#)
            .unwrap();
        let err = r.into_outcome().unwrap_err();
        assert_eq!(err, ResponseError::Server("No image uploaded yet".to_owned()));
        assert_eq!(err.to_string(), "No image uploaded yet");
    }

    #[test]
    fn missing_success_flag_is_failure() {
        let r = ConvertResponse::from_json(r#"{"error": "Invalid file type"}"#).unwrap();
        assert_eq!(
            r.into_outcome(),
            Err(ResponseError::Server("Invalid file type".to_owned()))
        );
    }

    #[test]
    fn failure_without_text_uses_fallback() {
        let r = ConvertResponse::from_json(r#"{"success": false}"#).unwrap();
        assert_eq!(
            r.into_outcome(),
            Err(ResponseError::Server(UNSPECIFIED_ERROR.to_owned()))
        );
    }

    #[test]
    fn success_without_path_is_an_error() {
        let r = ConvertResponse::from_json(r#"{"success": true}"#).unwrap();
        assert_eq!(r.into_outcome(), Err(ResponseError::MissingSvgPath));
    }

    #[test]
    fn non_json_body_fails_to_decode() {
        assert!(ConvertResponse::from_json("<html>Internal Server Error</html>").is_err());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let r = ConvertResponse::from_json(
            r#"{"success": true, "svg_path": "/s.svg", "elapsed_ms": 42}"#,
        )
        .unwrap();
        assert_eq!(r.svg_path.as_deref(), Some("/s.svg"));
    }
}
