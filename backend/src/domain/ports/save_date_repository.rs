//! Driven port for save date persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{SaveDate, SaveDateDetails};

use super::define_port_error;

define_port_error! {
    /// Errors raised by save date repository adapters.
    pub enum SaveDateRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "save date repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "save date repository query failed: {message}",
        /// No stored record carries the requested identifier.
        NotFound { id: String } =>
            "save date {id} not found",
    }
}

/// Store capability consumed by the save date service.
///
/// Implementations own identifier assignment and must return records from
/// [`SaveDateRepository::list_all`] in insertion order, independent of
/// the timestamps they carry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SaveDateRepository: Send + Sync {
    /// Persist new details, assigning an id and stamping both timestamps
    /// with `now`.
    async fn create(
        &self,
        details: SaveDateDetails,
        now: DateTime<Utc>,
    ) -> Result<SaveDate, SaveDateRepositoryError>;

    /// Every stored record, oldest first.
    async fn list_all(&self) -> Result<Vec<SaveDate>, SaveDateRepositoryError>;

    /// Persist edited details of an existing record.
    ///
    /// `created_at` is preserved and `updated_at` moves strictly forward;
    /// the stored result is returned.
    async fn update(
        &self,
        record: &SaveDate,
        now: DateTime<Utc>,
    ) -> Result<SaveDate, SaveDateRepositoryError>;
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn not_found_error_names_identifier() {
        let err = SaveDateRepositoryError::not_found("abc");
        assert_eq!(err.to_string(), "save date abc not found");
    }

    #[rstest]
    fn query_error_formats_message() {
        let err = SaveDateRepositoryError::query("broken sql");
        assert!(err.to_string().contains("broken sql"));
    }
}
