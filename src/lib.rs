//! Fixture API server
//!
//! A mock HTTP backend for exercising client code: order, inquiry, payment,
//! product and user endpoints validate their payloads against fixed field
//! lists and answer with canned JSON envelopes, and `/data` serves a JSON
//! document loaded once at startup.

pub mod api;
pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod routing;
pub mod server;
