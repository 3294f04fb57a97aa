//! Driving port for reading save dates.

use async_trait::async_trait;

use crate::domain::{Error, SaveDate};

/// Domain use-case port for listing save dates.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SaveDateQuery: Send + Sync {
    /// Every stored save date in insertion order.
    async fn list_all(&self) -> Result<Vec<SaveDate>, Error>;
}

/// Fixture query that reports an empty store.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureSaveDateQuery;

#[async_trait]
impl SaveDateQuery for FixtureSaveDateQuery {
    async fn list_all(&self) -> Result<Vec<SaveDate>, Error> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixture_query_returns_empty_list() {
        let listed = FixtureSaveDateQuery
            .list_all()
            .await
            .expect("fixture list succeeds");
        assert!(listed.is_empty());
    }
}
