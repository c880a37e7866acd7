//! Client configuration: endpoint paths, debounce delay, download names.

use serde::{Deserialize, Serialize};

/// Settings for talking to the conversion server.
///
/// Every field has a default, so a partial JSON object deserializes
/// into a complete configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Path that accepts both uploads and parameter updates.
    pub endpoint: String,
    /// Path that serves the rendered PNG as an attachment.
    pub png_download_path: String,
    /// Quiet period before a parameter change is submitted.
    pub debounce_ms: u32,
    /// Filename offered when saving the SVG.
    pub svg_download_name: String,
    /// Query key appended to the SVG path to defeat caching.
    pub cache_bust_key: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "/".to_owned(),
            png_download_path: "/download_png".to_owned(),
            debounce_ms: 300,
            svg_download_name: "output.svg".to_owned(),
            cache_bust_key: "t".to_owned(),
        }
    }
}

impl ClientConfig {
    /// Read a configuration override. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if `json` is not an object of the
    /// expected shape.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Append a timestamp query parameter so the browser refetches an
    /// SVG that is always written to the same server path.
    #[must_use]
    pub fn cache_busted(&self, path: &str, timestamp_ms: u64) -> String {
        let sep = if path.contains('?') { '&' } else { '?' };
        format!("{path}{sep}{}={timestamp_ms}", self.cache_bust_key)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = ClientConfig::default();
        assert_eq!(c.endpoint, "/");
        assert_eq!(c.png_download_path, "/download_png");
        assert_eq!(c.debounce_ms, 300);
        assert_eq!(c.svg_download_name, "output.svg");
    }

    #[test]
    fn partial_json_fills_defaults() {
        let c = ClientConfig::from_json(r#"{"debounce_ms": 500}"#).unwrap();
        assert_eq!(c.debounce_ms, 500);
        assert_eq!(c.endpoint, "/");
    }

    #[test]
    fn malformed_override_is_an_error() {
        assert!(ClientConfig::from_json(r#"{"debounce_ms": "soon"}"#).is_err());
        assert!(ClientConfig::from_json("not json").is_err());
    }

    #[test]
    fn cache_busting() {
        let c = ClientConfig::default();
        assert_eq!(
            c.cache_busted("/static/output.svg", 1_700_000_000_123),
            "/static/output.svg?t=1700000000123"
        );
        assert_eq!(c.cache_busted("/svg?id=3", 5), "/svg?id=3&t=5");
    }
}
