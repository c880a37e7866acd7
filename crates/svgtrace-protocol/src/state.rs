//! Client state and how request outcomes change it.
//!
//! The app holds one [`AppState`] and routes every event through it:
//! file selection, upload completion, control changes, debounce wake-ups
//! and update completion. The methods return what the browser layer must
//! still do (show an alert, clear the file input), so the rules live here
//! and the components only carry them out.

use crate::config::ClientConfig;
use crate::debounce::{Debouncer, Ticket};
use crate::params::{ParamError, ParamField, TraceParams};
use crate::visibility::Visibility;

/// Alert shown when an upload fails without a server-provided reason.
pub const UPLOAD_FAILED: &str = "An error occurred while uploading the file.";

/// Alert shown when a parameter update fails without a server-provided
/// reason.
pub const UPDATE_FAILED: &str = "An error occurred while updating parameters.";

/// How a request to the conversion endpoint failed, as far as the user
/// is concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestFailure {
    /// The server answered `success: false`; the text is shown verbatim.
    Server(String),
    /// Network, decoding or file-read failure; details are only logged.
    Transport,
}

/// Browser-side follow-ups of a finished upload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use]
pub struct UploadEffects {
    /// Message for a blocking alert, if the upload failed.
    pub alert: Option<String>,
    /// Clear the file input so the same file can be chosen again.
    pub reset_file_input: bool,
}

/// Everything the page shows, plus the pending-update generation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// Current control values.
    pub params: TraceParams,
    /// Loading indicator / output visibility.
    pub visibility: Visibility,
    /// Cache-busted URL of the displayed SVG.
    pub svg_src: Option<String>,
    debouncer: Debouncer,
}

impl AppState {
    /// A file was chosen: show the loading indicator before anything is
    /// sent.
    pub const fn begin_upload(&mut self) {
        self.visibility.show_loading();
    }

    /// Apply the result of an upload.
    ///
    /// On success the new SVG is shown, every control returns to its
    /// default and the file input is cleared. On failure the controls
    /// are untouched and one alert is requested. Loading is hidden
    /// either way. A pending parameter update is left scheduled.
    pub fn finish_upload(
        &mut self,
        outcome: Result<String, RequestFailure>,
        config: &ClientConfig,
        now_ms: u64,
    ) -> UploadEffects {
        let effects = match outcome {
            Ok(path) => {
                self.svg_src = Some(config.cache_busted(&path, now_ms));
                self.params = TraceParams::default();
                UploadEffects {
                    alert: None,
                    reset_file_input: true,
                }
            }
            Err(failure) => UploadEffects {
                alert: Some(alert_text(failure, UPLOAD_FAILED)),
                reset_file_input: false,
            },
        };
        self.visibility.hide_loading();
        effects
    }

    /// Apply a control's raw value and schedule a debounced update.
    ///
    /// Applies to the live parameters, so changes to different controls
    /// between renders accumulate.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError`] if the value is rejected; nothing is
    /// scheduled and the parameters are unchanged.
    pub fn change_param(&mut self, field: ParamField, raw: &str) -> Result<Ticket, ParamError> {
        self.params.apply_field(field, raw)?;
        Ok(self.debouncer.schedule())
    }

    /// A debounce timer woke up. Returns the parameters to submit if
    /// `ticket` is still the newest, read at this moment.
    pub fn take_update(&mut self, ticket: Ticket) -> Option<TraceParams> {
        self.debouncer.fire(ticket).then(|| self.params.clone())
    }

    /// Apply the result of a parameter update.
    ///
    /// Success swaps the displayed SVG and nothing else. Failure leaves
    /// the state as is and returns the alert text.
    pub fn finish_update(
        &mut self,
        outcome: Result<String, RequestFailure>,
        config: &ClientConfig,
        now_ms: u64,
    ) -> Option<String> {
        match outcome {
            Ok(path) => {
                self.svg_src = Some(config.cache_busted(&path, now_ms));
                None
            }
            Err(failure) => Some(alert_text(failure, UPDATE_FAILED)),
        }
    }
}

fn alert_text(failure: RequestFailure, fallback: &str) -> String {
    match failure {
        RequestFailure::Server(text) => text,
        RequestFailure::Transport => fallback.to_owned(),
    }
}
