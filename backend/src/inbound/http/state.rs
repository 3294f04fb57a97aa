//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    FixtureSaveDateCommand, FixtureSaveDateQuery, SaveDateCommand, SaveDateQuery,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub save_dates: Arc<dyn SaveDateCommand>,
    pub save_dates_query: Arc<dyn SaveDateQuery>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use savedate::domain::ports::{FixtureSaveDateCommand, FixtureSaveDateQuery};
    /// use savedate::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(
    ///     Arc::new(FixtureSaveDateCommand),
    ///     Arc::new(FixtureSaveDateQuery),
    /// );
    /// let _ = state.save_dates.clone();
    /// ```
    pub fn new(
        save_dates: Arc<dyn SaveDateCommand>,
        save_dates_query: Arc<dyn SaveDateQuery>,
    ) -> Self {
        Self {
            save_dates,
            save_dates_query,
        }
    }

    /// State backed by the shared service, which implements both ports.
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: SaveDateCommand + SaveDateQuery + 'static,
    {
        Self::new(service.clone(), service)
    }
}

impl Default for HttpState {
    fn default() -> Self {
        Self::new(Arc::new(FixtureSaveDateCommand), Arc::new(FixtureSaveDateQuery))
    }
}
