//! Small browser helpers: blocking alerts, file input reset, wall clock,
//! and the page-embedded configuration block.

use svgtrace_protocol::ClientConfig;
use wasm_bindgen::JsCast;

/// Element id of the optional `<script type="application/json">` block
/// holding a [`ClientConfig`] override.
pub const CONFIG_ELEMENT_ID: &str = "svgtrace-config";

/// Show a blocking `window.alert` with `message`.
///
/// Silently logs if no window is available (e.g. under tests).
pub fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        log::warn!("no window for alert: {message}");
        return;
    };
    if let Err(e) = window.alert_with_message(message) {
        log::warn!("alert failed: {e:?}");
    }
}

/// Clear the file input with element id `id`, so that picking the same
/// file again still fires a change event.
pub fn reset_file_input(id: &str) {
    let input = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok());
    match input {
        Some(input) => input.set_value(""),
        None => log::warn!("file input #{id} not found"),
    }
}

/// Milliseconds since the Unix epoch, for cache-busting query strings.
#[must_use]
pub fn now_ms() -> u64 {
    web_time::SystemTime::now()
        .duration_since(web_time::SystemTime::UNIX_EPOCH)
        .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
}

/// Load the client configuration from the page.
///
/// Reads the JSON text of the element with id [`CONFIG_ELEMENT_ID`].
/// Falls back to [`ClientConfig::default`] when the element is absent or
/// its content does not parse.
#[must_use]
pub fn load_config() -> ClientConfig {
    let text = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());
    let Some(text) = text else {
        return ClientConfig::default();
    };
    match ClientConfig::from_json(&text) {
        Ok(config) => {
            log::debug!("loaded client config override: {config:?}");
            config
        }
        Err(e) => {
            log::warn!("ignoring malformed #{CONFIG_ELEMENT_ID}: {e}");
            ClientConfig::default()
        }
    }
}
