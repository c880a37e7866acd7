//! Dioxus UI components for svgtrace.
//!
//! Provides the file upload zone, parameter controls, SVG preview with
//! loading indicator, and the export panel.

mod controls;
mod export;
mod preview;
mod upload;

pub use controls::ParamControls;
pub use export::ExportPanel;
pub use preview::{SVG_OUTPUT_ID, SvgPreview};
pub use upload::{FILE_INPUT_ID, FileUpload};
