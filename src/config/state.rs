// Application state module
// Values produced once during startup and shared read-only by every connection

use crate::api::Catalog;
use crate::handler::StaticData;

use super::types::Config;

/// Application state
///
/// Nothing in here changes after startup, so it is shared behind an `Arc`
/// without any locking.
pub struct AppState {
    pub config: Config,
    pub catalog: Catalog,
    pub static_data: StaticData,
}

impl AppState {
    pub fn new(config: Config, static_data: StaticData) -> Self {
        Self {
            config,
            catalog: Catalog::default(),
            static_data,
        }
    }
}
