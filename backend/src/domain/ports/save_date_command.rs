//! Driving port for creating save dates.
//!
//! Inbound adapters hand over already validated [`SaveDateDetails`]; the
//! port stamps and persists them.

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{Error, SaveDate, SaveDateDetails, SaveDateId};

/// Domain use-case port for creating save dates.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SaveDateCommand: Send + Sync {
    /// Persist a new save date and return the stored record.
    async fn create(&self, details: SaveDateDetails) -> Result<SaveDate, Error>;
}

/// Fixture command that echoes the details back without storing them.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureSaveDateCommand;

#[async_trait]
impl SaveDateCommand for FixtureSaveDateCommand {
    async fn create(&self, details: SaveDateDetails) -> Result<SaveDate, Error> {
        Ok(SaveDate::create(SaveDateId::random(), details, Utc::now()))
    }
}
