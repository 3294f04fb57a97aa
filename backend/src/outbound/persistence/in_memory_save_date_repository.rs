//! Process-local `SaveDateRepository` used when no database is configured.
//!
//! Records live in a mutex-guarded vector in insertion order, which is
//! the order [`SaveDateRepository::list_all`] returns. Nothing survives a
//! restart.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::ports::{SaveDateRepository, SaveDateRepositoryError};
use crate::domain::{SaveDate, SaveDateDetails, SaveDateId};

/// In-memory implementation of the `SaveDateRepository` port.
///
/// # Examples
/// ```
/// use chrono::Utc;
/// use savedate::domain::ports::SaveDateRepository;
/// use savedate::outbound::persistence::InMemorySaveDateRepository;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let repo = InMemorySaveDateRepository::default();
/// assert!(repo.list_all().await.unwrap().is_empty());
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemorySaveDateRepository {
    records: Mutex<Vec<SaveDate>>,
}

impl InMemorySaveDateRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<SaveDate>>, SaveDateRepositoryError> {
        self.records
            .lock()
            .map_err(|_| SaveDateRepositoryError::query("in-memory store lock poisoned"))
    }
}

#[async_trait]
impl SaveDateRepository for InMemorySaveDateRepository {
    async fn create(
        &self,
        details: SaveDateDetails,
        now: DateTime<Utc>,
    ) -> Result<SaveDate, SaveDateRepositoryError> {
        let record = SaveDate::create(SaveDateId::random(), details, now);
        self.lock()?.push(record.clone());
        Ok(record)
    }

    async fn list_all(&self) -> Result<Vec<SaveDate>, SaveDateRepositoryError> {
        Ok(self.lock()?.clone())
    }

    async fn update(
        &self,
        record: &SaveDate,
        now: DateTime<Utc>,
    ) -> Result<SaveDate, SaveDateRepositoryError> {
        let mut records = self.lock()?;
        let stored = records
            .iter_mut()
            .find(|stored| stored.id() == record.id())
            .ok_or_else(|| SaveDateRepositoryError::not_found(record.id().to_string()))?;

        stored.details = record.details.clone();
        stored.record_save(now);
        Ok(stored.clone())
    }
}
