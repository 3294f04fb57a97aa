//! PostgreSQL-backed `SaveDateRepository` implementation using Diesel ORM.
//!
//! Time slots are stored as a `jsonb` array of `{label, time}` objects and
//! decoded back through the domain's own serde contract, so a corrupted row
//! surfaces as a query error instead of an invalid aggregate. Listing follows
//! the identity column `seq`, so rows come back in insertion order whatever
//! their timestamps.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel_async::AsyncConnection as _;
use diesel_async::RunQueryDsl;
use diesel_async::scoped_futures::ScopedFutureExt as _;
use tracing::{debug, warn};

use crate::domain::ports::{SaveDateRepository, SaveDateRepositoryError};
use crate::domain::{EventTime, SaveDate, SaveDateDetails, SaveDateId};

use super::models::{NewSaveDateRow, SaveDateRow, SaveDateUpdate};
use super::pool::{DbPool, PoolError};
use super::schema::save_dates;

/// Diesel-backed implementation of the `SaveDateRepository` port.
#[derive(Clone)]
pub struct DieselSaveDateRepository {
    pool: DbPool,
}

impl DieselSaveDateRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> SaveDateRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            SaveDateRepositoryError::connection(message)
        }
    }
}

fn map_diesel_error(error: diesel::result::Error) -> SaveDateRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => SaveDateRepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => SaveDateRepositoryError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            SaveDateRepositoryError::connection("database connection error")
        }
        _ => SaveDateRepositoryError::query("database error"),
    }
}

fn encode_event_times(slots: &[EventTime]) -> Result<serde_json::Value, SaveDateRepositoryError> {
    serde_json::to_value(slots)
        .map_err(|err| SaveDateRepositoryError::query(format!("encode event_times: {err}")))
}

fn row_to_save_date(row: SaveDateRow) -> Result<SaveDate, SaveDateRepositoryError> {
    let event_times: Vec<EventTime> = serde_json::from_value(row.event_times).map_err(|err| {
        warn!(save_date_id = %row.id, error = %err, "stored event_times failed to decode");
        SaveDateRepositoryError::query(format!("decode event_times for {}: {err}", row.id))
    })?;

    let details = SaveDateDetails {
        title: row.title,
        event_subtitle: row.event_subtitle,
        event_summary: row.event_summary,
        event_times,
        event_venue: row.event_venue,
        event_address: row.event_address,
        event_city: row.event_city,
    };

    Ok(SaveDate::restore(
        SaveDateId::from_uuid(row.id),
        details,
        row.created_at,
        row.updated_at,
    ))
}

#[async_trait]
impl SaveDateRepository for DieselSaveDateRepository {
    async fn create(
        &self,
        details: SaveDateDetails,
        now: DateTime<Utc>,
    ) -> Result<SaveDate, SaveDateRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewSaveDateRow {
            id: *SaveDateId::random().as_uuid(),
            title: &details.title,
            event_subtitle: details.event_subtitle.as_deref(),
            event_summary: &details.event_summary,
            event_times: encode_event_times(&details.event_times)?,
            event_venue: &details.event_venue,
            event_address: &details.event_address,
            event_city: &details.event_city,
            created_at: now,
            updated_at: now,
        };

        let row: SaveDateRow = diesel::insert_into(save_dates::table)
            .values(&new_row)
            .returning(SaveDateRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_save_date(row)
    }

    async fn list_all(&self) -> Result<Vec<SaveDate>, SaveDateRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<SaveDateRow> = save_dates::table
            .select(SaveDateRow::as_select())
            .order_by(save_dates::seq.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_save_date).collect()
    }

    async fn update(
        &self,
        record: &SaveDate,
        now: DateTime<Utc>,
    ) -> Result<SaveDate, SaveDateRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let id = *record.id().as_uuid();
        let details = &record.details;
        let event_times = encode_event_times(&details.event_times)?;

        // Lock the row so concurrent saves serialise their updated_at stamps.
        let row = conn
            .transaction::<_, diesel::result::Error, _>(|conn| {
                async move {
                    let previous: Option<DateTime<Utc>> = save_dates::table
                        .find(id)
                        .select(save_dates::updated_at)
                        .for_update()
                        .first(conn)
                        .await
                        .optional()?;
                    let Some(previous) = previous else {
                        return Ok(None);
                    };

                    let changes = SaveDateUpdate {
                        title: &details.title,
                        event_subtitle: details.event_subtitle.as_deref(),
                        event_summary: &details.event_summary,
                        event_times,
                        event_venue: &details.event_venue,
                        event_address: &details.event_address,
                        event_city: &details.event_city,
                        updated_at: SaveDate::next_updated_at(previous, now),
                    };

                    diesel::update(save_dates::table.find(id))
                        .set(&changes)
                        .returning(SaveDateRow::as_returning())
                        .get_result(conn)
                        .await
                        .map(Some)
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        match row {
            Some(row) => row_to_save_date(row),
            None => Err(SaveDateRepositoryError::not_found(id.to_string())),
        }
    }
}
