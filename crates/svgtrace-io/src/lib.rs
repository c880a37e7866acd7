//! svgtrace-io: Browser I/O and Dioxus component library.
//!
//! Handles requests to the conversion endpoint, downloads, alerts, and
//! provides the UI components for the svgtrace web application.

pub mod browser;
pub mod components;
pub mod download;
pub mod http;

pub use components::{ExportPanel, FILE_INPUT_ID, FileUpload, ParamControls, SvgPreview};
pub use http::{RequestError, submit_update, upload_file};
