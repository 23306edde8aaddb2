//! Routing module
//!
//! Maps a request method and path onto one of the fixture endpoints.

mod matcher;

pub use matcher::{match_path, match_route, Endpoint, Route, RouteResolution, ROUTES};
