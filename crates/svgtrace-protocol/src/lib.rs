//! svgtrace-protocol: parameter model and endpoint contract (sans-IO).
//!
//! Describes what the browser client sends to the conversion server and
//! how it reads the answer, plus the small pieces of UI state that do
//! not need a browser to reason about (visibility flags, debounce
//! generations, and how request outcomes change the page). All browser
//! interaction lives in `svgtrace-io`.

pub mod config;
pub mod debounce;
pub mod params;
pub mod response;
pub mod state;
pub mod upload;
pub mod visibility;

pub use config::ClientConfig;
pub use debounce::{Debouncer, Ticket};
pub use params::{HexColor, ParamError, ParamField, SliderSpec, TraceParams};
pub use response::{ConvertResponse, ResponseError};
pub use state::{AppState, RequestFailure, UploadEffects};
pub use visibility::Visibility;
