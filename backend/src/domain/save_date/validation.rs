//! Validation of raw save date creation payloads.
//!
//! The validator runs every field check and aggregates the failures so a
//! client sees all violations in one response. Text values are trimmed
//! before their length is measured; lengths count characters, not bytes.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use super::{EventTime, SaveDateDetails, TimeOfDay, fields, min_length};

const REQUIRED: &str = "This field is required.";
const NOT_NULL: &str = "This field may not be null.";
const NOT_STRING: &str = "Not a valid string.";
const NOT_BLANK: &str = "This field may not be blank.";
const EMPTY_LIST: &str = "This list may not be empty.";
const NOT_OBJECT: &str = "Expected an object with label and time.";
const BAD_TIME: &str = "Time must be in HH:MM 24-hour format.";

/// Field name to messages, for every field that failed validation.
///
/// Serialises as a plain JSON object, e.g.
/// `{"title": ["Ensure this field has at least 3 characters."]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<&'static str, Vec<String>>);

impl FieldErrors {
    /// Record a message against `field`.
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    /// True when no field failed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Whether `field` has at least one message.
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Names of the failing fields, in sorted order.
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.fields().collect();
        write!(f, "invalid fields: {}", names.join(", "))
    }
}

impl std::error::Error for FieldErrors {}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn too_short(min: usize) -> String {
    format!("Ensure this field has at least {min} characters.")
}

/// Check a text value; `Err` holds the message to report.
fn text(value: Option<&Value>, min: usize) -> Result<String, String> {
    match value {
        None => Err(REQUIRED.to_owned()),
        Some(Value::Null) => Err(NOT_NULL.to_owned()),
        Some(Value::String(raw)) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                Err(NOT_BLANK.to_owned())
            } else if trimmed.chars().count() < min {
                Err(too_short(min))
            } else {
                Ok(trimmed.to_owned())
            }
        }
        Some(_) => Err(NOT_STRING.to_owned()),
    }
}

fn required_text(
    payload: &Map<String, Value>,
    field: &'static str,
    min: usize,
    errors: &mut FieldErrors,
) -> Option<String> {
    text(payload.get(field), min)
        .map_err(|message| errors.push(field, message))
        .ok()
}

fn optional_text(
    payload: &Map<String, Value>,
    field: &'static str,
    errors: &mut FieldErrors,
) -> Option<String> {
    match payload.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::String(raw)) => Some(raw.trim().to_owned()),
        Some(_) => {
            errors.push(field, NOT_STRING);
            None
        }
    }
}

fn event_time(index: usize, value: &Value, errors: &mut FieldErrors) -> Option<EventTime> {
    let Value::Object(slot) = value else {
        errors.push(fields::EVENT_TIMES, format!("[{index}] {NOT_OBJECT}"));
        return None;
    };

    let mut valid = true;
    for key in slot.keys() {
        if key != fields::LABEL && key != fields::TIME {
            errors.push(
                fields::EVENT_TIMES,
                format!("[{index}] Unexpected field \"{key}\"."),
            );
            valid = false;
        }
    }

    let label = text(slot.get(fields::LABEL), 1)
        .map_err(|message| {
            errors.push(
                fields::EVENT_TIMES,
                format!("[{index}] {}: {message}", fields::LABEL),
            );
        })
        .ok();

    let time = match slot.get(fields::TIME) {
        Some(Value::String(raw)) => raw
            .parse::<TimeOfDay>()
            .map_err(|_| {
                errors.push(
                    fields::EVENT_TIMES,
                    format!("[{index}] {}: {BAD_TIME}", fields::TIME),
                );
            })
            .ok(),
        other => {
            let message = match other {
                None => REQUIRED,
                Some(Value::Null) => NOT_NULL,
                Some(_) => NOT_STRING,
            };
            errors.push(
                fields::EVENT_TIMES,
                format!("[{index}] {}: {message}", fields::TIME),
            );
            None
        }
    };

    match (label, time) {
        (Some(label), Some(time)) if valid => EventTime::new(label, time).ok(),
        _ => None,
    }
}

fn event_times(payload: &Map<String, Value>, errors: &mut FieldErrors) -> Option<Vec<EventTime>> {
    let items = match payload.get(fields::EVENT_TIMES) {
        None => {
            errors.push(fields::EVENT_TIMES, REQUIRED);
            return None;
        }
        Some(Value::Null) => {
            errors.push(fields::EVENT_TIMES, NOT_NULL);
            return None;
        }
        Some(Value::Array(items)) => items,
        Some(other) => {
            errors.push(
                fields::EVENT_TIMES,
                format!(
                    "Expected a list of items but got type \"{}\".",
                    json_type_name(other)
                ),
            );
            return None;
        }
    };

    if items.is_empty() {
        errors.push(fields::EVENT_TIMES, EMPTY_LIST);
        return None;
    }

    let parsed: Vec<Option<EventTime>> = items
        .iter()
        .enumerate()
        .map(|(index, item)| event_time(index, item, errors))
        .collect();
    parsed.into_iter().collect()
}

/// Validate and normalise a creation payload.
///
/// Returns the normalised [`SaveDateDetails`] or every field error found.
/// Keys outside the write shape (including `id`, `created_at` and
/// `updated_at`) are ignored.
///
/// # Examples
/// ```
/// use savedate::domain::validate_save_date_payload;
/// use serde_json::json;
///
/// let payload = json!({"title": "AB", "event_times": []});
/// let errors = validate_save_date_payload(payload.as_object().unwrap()).unwrap_err();
/// assert!(errors.contains("title"));
/// assert!(errors.contains("event_times"));
/// assert!(errors.contains("event_city"));
/// assert!(!errors.contains("event_subtitle"));
/// ```
pub fn validate_save_date_payload(
    payload: &Map<String, Value>,
) -> Result<SaveDateDetails, FieldErrors> {
    let mut errors = FieldErrors::default();

    let title = required_text(payload, fields::TITLE, min_length::TITLE, &mut errors);
    let event_subtitle = optional_text(payload, fields::EVENT_SUBTITLE, &mut errors);
    let event_summary = required_text(
        payload,
        fields::EVENT_SUMMARY,
        min_length::EVENT_SUMMARY,
        &mut errors,
    );
    let event_times = event_times(payload, &mut errors);
    let event_venue = required_text(
        payload,
        fields::EVENT_VENUE,
        min_length::EVENT_VENUE,
        &mut errors,
    );
    let event_address = required_text(
        payload,
        fields::EVENT_ADDRESS,
        min_length::EVENT_ADDRESS,
        &mut errors,
    );
    let event_city = required_text(
        payload,
        fields::EVENT_CITY,
        min_length::EVENT_CITY,
        &mut errors,
    );

    match (
        title,
        event_summary,
        event_times,
        event_venue,
        event_address,
        event_city,
    ) {
        (
            Some(title),
            Some(event_summary),
            Some(event_times),
            Some(event_venue),
            Some(event_address),
            Some(event_city),
        ) if errors.is_empty() => Ok(SaveDateDetails {
            title,
            event_subtitle,
            event_summary,
            event_times,
            event_venue,
            event_address,
            event_city,
        }),
        _ => Err(errors),
    }
}
