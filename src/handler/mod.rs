//! Request handler module
//!
//! Responsible for request routing dispatch and for the static data document.

pub mod router;
pub mod static_data;

// Re-export main entry point
pub use router::{handle_request, route_request};
pub use static_data::{DataError, StaticData};
