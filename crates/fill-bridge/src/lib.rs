//! Request/response surface for the auto diamond fill operation.
//!
//! Requests arrive as JSON, are dispatched to the stone layout generator, and
//! leave as JSON responses. Invalid input never produces a partial report.

pub mod dispatch;
pub mod error;
pub mod messages;

#[cfg(target_arch = "wasm32")]
pub mod wasm_api;

pub use dispatch::{dispatch, encode_response, process_json, respond_json};
pub use error::{BridgeError, ErrorKind};
pub use messages::{FillRequest, Request, Response};
