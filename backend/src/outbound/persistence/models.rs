//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. They exist solely to satisfy Diesel's
//! type requirements for queries and mutations.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::save_dates;

/// Row struct for reading from the save_dates table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = save_dates)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct SaveDateRow {
    pub id: Uuid,
    pub title: String,
    pub event_subtitle: Option<String>,
    pub event_summary: String,
    pub event_times: serde_json::Value,
    pub event_venue: String,
    pub event_address: String,
    pub event_city: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insertable struct for creating new save date records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = save_dates)]
pub(crate) struct NewSaveDateRow<'a> {
    pub id: Uuid,
    pub title: &'a str,
    pub event_subtitle: Option<&'a str>,
    pub event_summary: &'a str,
    pub event_times: serde_json::Value,
    pub event_venue: &'a str,
    pub event_address: &'a str,
    pub event_city: &'a str,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Changeset struct for saving edits to an existing record.
///
/// `event_subtitle` is written even when `None` so a cleared subtitle is
/// persisted as `NULL`.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = save_dates)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct SaveDateUpdate<'a> {
    pub title: &'a str,
    pub event_subtitle: Option<&'a str>,
    pub event_summary: &'a str,
    pub event_times: serde_json::Value,
    pub event_venue: &'a str,
    pub event_address: &'a str,
    pub event_city: &'a str,
    pub updated_at: DateTime<Utc>,
}
