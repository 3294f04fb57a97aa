//! Save-the-date announcement aggregate.
//!
//! A [`SaveDate`] is the only persisted entity: a titled event with a venue,
//! an address and an ordered list of [`EventTime`] slots. Client input is
//! turned into [`SaveDateDetails`] by [`validation::validate_save_date_payload`];
//! the store then assigns the identifier and timestamps.

mod validation;

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveTime, SubsecRound, TimeDelta, Timelike, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;
use uuid::Uuid;

pub use validation::{FieldErrors, validate_save_date_payload};

/// Field names shared by the validator, the HTTP adapter and persistence.
pub mod fields {
    /// Headline of the announcement.
    pub const TITLE: &str = "title";
    /// Optional secondary line under the title.
    pub const EVENT_SUBTITLE: &str = "event_subtitle";
    /// Free-text description of the event.
    pub const EVENT_SUMMARY: &str = "event_summary";
    /// Ordered list of `{label, time}` slots.
    pub const EVENT_TIMES: &str = "event_times";
    /// Venue name.
    pub const EVENT_VENUE: &str = "event_venue";
    /// Street address of the venue.
    pub const EVENT_ADDRESS: &str = "event_address";
    /// City the event takes place in.
    pub const EVENT_CITY: &str = "event_city";
    /// Slot key naming the sub-event.
    pub const LABEL: &str = "label";
    /// Slot key holding the `HH:MM` time.
    pub const TIME: &str = "time";
}

/// Minimum character counts for the required text fields.
pub mod min_length {
    /// Floor for [`super::fields::TITLE`].
    pub const TITLE: usize = 3;
    /// Floor for [`super::fields::EVENT_SUMMARY`].
    pub const EVENT_SUMMARY: usize = 10;
    /// Floor for [`super::fields::EVENT_VENUE`].
    pub const EVENT_VENUE: usize = 3;
    /// Floor for [`super::fields::EVENT_ADDRESS`].
    pub const EVENT_ADDRESS: usize = 3;
    /// Floor for [`super::fields::EVENT_CITY`].
    pub const EVENT_CITY: usize = 2;
}

/// Stable save date identifier assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SaveDateId(Uuid);

impl SaveDateId {
    /// Generate a new random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID, e.g. one read back from the database.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for SaveDateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors raised when parsing a [`TimeOfDay`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeOfDayParseError {
    /// The value is not two digits, a colon, and two digits.
    #[error("time must use the HH:MM 24-hour format")]
    Format,
    /// Hour or minute is outside 00–23 / 00–59.
    #[error("time {hour:02}:{minute:02} is not a valid time of day")]
    OutOfRange { hour: u32, minute: u32 },
}

/// Wall-clock time of a sub-event, written as `HH:MM` on a 24-hour clock.
///
/// # Examples
/// ```
/// use savedate::domain::TimeOfDay;
///
/// let time: TimeOfDay = "14:30".parse().expect("valid time");
/// assert_eq!(time.to_string(), "14:30");
/// assert!("25:00".parse::<TimeOfDay>().is_err());
/// assert!("2:30 PM".parse::<TimeOfDay>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Hour component (0–23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Minute component (0–59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }
}

fn two_digits(high: u8, low: u8) -> Option<u32> {
    if high.is_ascii_digit() && low.is_ascii_digit() {
        Some(u32::from(high - b'0') * 10 + u32::from(low - b'0'))
    } else {
        None
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeOfDayParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let &[h1, h2, b':', m1, m2] = s.as_bytes() else {
            return Err(TimeOfDayParseError::Format);
        };
        let (Some(hour), Some(minute)) = (two_digits(h1, h2), two_digits(m1, m2)) else {
            return Err(TimeOfDayParseError::Format);
        };
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(Self)
            .ok_or(TimeOfDayParseError::OutOfRange { hour, minute })
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Validation errors for [`EventTime`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventTimeValidationError {
    /// The label was empty after trimming.
    #[error("event time label must not be blank")]
    BlankLabel,
}

/// A named sub-event at a time of day, e.g. "Ceremony" at 14:00.
///
/// ## Invariants
/// - `label` is non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EventTimeDto", into = "EventTimeDto")]
pub struct EventTime {
    label: String,
    time: TimeOfDay,
}

impl EventTime {
    /// Build a time slot, rejecting blank labels.
    pub fn new(label: impl Into<String>, time: TimeOfDay) -> Result<Self, EventTimeValidationError> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(EventTimeValidationError::BlankLabel);
        }
        Ok(Self { label, time })
    }

    /// Name of the sub-event, e.g. "Cerimônia".
    pub fn label(&self) -> &str {
        self.label.as_str()
    }

    /// Clock time the sub-event starts.
    pub fn time(&self) -> TimeOfDay {
        self.time
    }
}

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct EventTimeDto {
    label: String,
    time: TimeOfDay,
}

impl From<EventTime> for EventTimeDto {
    fn from(value: EventTime) -> Self {
        Self {
            label: value.label,
            time: value.time,
        }
    }
}

impl TryFrom<EventTimeDto> for EventTime {
    type Error = EventTimeValidationError;

    fn try_from(value: EventTimeDto) -> Result<Self, Self::Error> {
        Self::new(value.label, value.time)
    }
}

/// Client-editable content of a save date.
///
/// Produced by the validator, so the length floors already hold when a value
/// reaches the store. Fields stay public so stored records can be edited
/// before a store-level update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveDateDetails {
    pub title: String,
    pub event_subtitle: Option<String>,
    pub event_summary: String,
    pub event_times: Vec<EventTime>,
    pub event_venue: String,
    pub event_address: String,
    pub event_city: String,
}

/// A persisted save-the-date announcement.
///
/// ## Invariants
/// - `id` and `created_at` never change after creation.
/// - `created_at == updated_at` for a freshly created record.
/// - every save through [`SaveDate::record_save`] moves `updated_at`
///   strictly forward.
///
/// # Examples
/// ```
/// use chrono::Utc;
/// use savedate::domain::{EventTime, SaveDate, SaveDateDetails, SaveDateId};
///
/// let details = SaveDateDetails {
///     title: "Ana & Rui".to_owned(),
///     event_subtitle: None,
///     event_summary: "Join us for the wedding".to_owned(),
///     event_times: vec![EventTime::new("Ceremony", "14:00".parse().unwrap()).unwrap()],
///     event_venue: "Quinta".to_owned(),
///     event_address: "Rua Verde 1".to_owned(),
///     event_city: "Porto".to_owned(),
/// };
/// let record = SaveDate::create(SaveDateId::random(), details, Utc::now());
/// assert_eq!(record.created_at(), record.updated_at());
/// assert_eq!(record.to_string(), "Ana & Rui (Porto)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveDate {
    id: SaveDateId,
    pub details: SaveDateDetails,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl SaveDate {
    /// Build a freshly created record stamped with `now`, truncated to
    /// microseconds.
    pub fn create(id: SaveDateId, details: SaveDateDetails, now: DateTime<Utc>) -> Self {
        let now = now.trunc_subsecs(6);
        Self {
            id,
            details,
            created_at: now,
            updated_at: now,
        }
    }

    /// Rebuild a record from stored state.
    pub fn restore(
        id: SaveDateId,
        details: SaveDateDetails,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            details,
            created_at,
            updated_at,
        }
    }

    /// Store-assigned identifier.
    pub fn id(&self) -> SaveDateId {
        self.id
    }

    /// When the record was first stored.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// When the record was last saved.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Stamp a save at `now`.
    pub fn record_save(&mut self, now: DateTime<Utc>) {
        self.updated_at = Self::next_updated_at(self.updated_at, now);
    }

    /// The `updated_at` a save at `now` must write after `previous`.
    ///
    /// Stamps are compared at microsecond precision, the finest PostgreSQL
    /// keeps. If the clock has not moved past the previous stamp at that
    /// precision, the result is one microsecond after `previous`.
    pub fn next_updated_at(previous: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
        let now = now.trunc_subsecs(6);
        if now > previous {
            now
        } else {
            previous + TimeDelta::microseconds(1)
        }
    }
}

impl fmt::Display for SaveDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.details.title, self.details.event_city)
    }
}
