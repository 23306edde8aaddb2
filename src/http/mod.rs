//! HTTP protocol layer module
//!
//! Provides request parsing and response building, decoupled from endpoint logic.

pub mod body;
pub mod response;

// Re-export commonly used types
pub use body::{decode_segment, parse_payload, resolve_id, BodyError};
pub use response::{
    build_405_response, build_413_response, build_bytes_response, build_json_response,
    build_text_response, strip_body,
};
