//! Builders for the HTTP state from the configured store.

use std::sync::Arc;

use mockable::DefaultClock;
use tracing::info;

use savedate::domain::SaveDateService;
use savedate::inbound::http::state::HttpState;
use savedate::outbound::persistence::{DieselSaveDateRepository, InMemorySaveDateRepository};

use super::ServerConfig;

/// Wire the save date service over PostgreSQL when a pool is configured,
/// otherwise over the in-memory store.
pub(super) fn build_http_state(config: &ServerConfig) -> HttpState {
    match &config.db_pool {
        Some(pool) => {
            info!("using PostgreSQL save date store");
            HttpState::from_service(Arc::new(SaveDateService::new(
                Arc::new(DieselSaveDateRepository::new(pool.clone())),
                Arc::new(DefaultClock),
            )))
        }
        None => {
            info!("no database configured; using in-memory save date store");
            HttpState::from_service(Arc::new(SaveDateService::new(
                Arc::new(InMemorySaveDateRepository::new()),
                Arc::new(DefaultClock),
            )))
        }
    }
}
