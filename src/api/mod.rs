// API module entry
// Endpoint logic: each handler maps a parsed request to a response envelope

pub mod envelope;
mod inquiry;
mod order;
pub mod payload;
mod payment;
mod product;
pub mod rules;
mod user;

// Re-export public types
pub use envelope::{Accept, ApiError, ApiResult, Envelope, Outcome, Success};
pub use inquiry::{handle_inquiry, Catalog, InquiryRecord};
pub use order::handle_order;
pub use payload::Payload;
pub use payment::handle_payment;
pub use product::handle_product;
pub use user::handle_user;

/// Greeting served on `/`
pub const GREETING: &str =
    "App started successfully! Access from /order, /inquiry, /payment to continue";
