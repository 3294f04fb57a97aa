//! Save date HTTP handlers.
//!
//! ```text
//! POST /api/v1/save-dates
//! GET  /api/v1/save-dates
//! ```
//!
//! Creation payloads are extracted as raw JSON and handed to the domain
//! validator, so every field problem is reported in a single response.

use actix_web::{HttpResponse, get, post, web};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::{Error, EventTime, SaveDate, validate_save_date_payload};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, FieldErrorsSchema};
use crate::inbound::http::state::HttpState;

/// Message returned alongside a freshly created record.
pub const CREATED_MESSAGE: &str = "Save the date created successfully.";

/// Documented write shape for `POST /api/v1/save-dates`.
///
/// The handler validates the raw JSON object rather than deserialising into
/// this type; it exists to describe the payload in OpenAPI.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateSaveDateRequestBody {
    #[schema(min_length = 3, example = "Casamento João e Maria")]
    pub title: String,
    #[schema(example = "Uma celebração de amor")]
    pub event_subtitle: Option<String>,
    #[schema(min_length = 10)]
    pub event_summary: String,
    #[schema(min_items = 1)]
    pub event_times: Vec<EventTimeBody>,
    #[schema(min_length = 3)]
    pub event_venue: String,
    #[schema(min_length = 3)]
    pub event_address: String,
    #[schema(min_length = 2, example = "São Paulo")]
    pub event_city: String,
}

/// A labelled time slot as exchanged over HTTP.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct EventTimeBody {
    #[schema(example = "Cerimônia")]
    pub label: String,
    #[schema(pattern = "^([01][0-9]|2[0-3]):[0-5][0-9]$", example = "14:00")]
    pub time: String,
}

impl From<&EventTime> for EventTimeBody {
    fn from(value: &EventTime) -> Self {
        Self {
            label: value.label().to_owned(),
            time: value.time().to_string(),
        }
    }
}

/// Stored save date as returned by both endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct SaveDateResponseBody {
    #[schema(format = "uuid")]
    pub id: String,
    pub title: String,
    pub event_subtitle: Option<String>,
    pub event_summary: String,
    pub event_times: Vec<EventTimeBody>,
    pub event_venue: String,
    pub event_address: String,
    pub event_city: String,
    #[schema(format = "date-time")]
    pub created_at: String,
    #[schema(format = "date-time")]
    pub updated_at: String,
}

fn format_timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Micros, true)
}

impl From<&SaveDate> for SaveDateResponseBody {
    fn from(value: &SaveDate) -> Self {
        let details = &value.details;
        Self {
            id: value.id().to_string(),
            title: details.title.clone(),
            event_subtitle: details.event_subtitle.clone(),
            event_summary: details.event_summary.clone(),
            event_times: details.event_times.iter().map(EventTimeBody::from).collect(),
            event_venue: details.event_venue.clone(),
            event_address: details.event_address.clone(),
            event_city: details.event_city.clone(),
            created_at: format_timestamp(value.created_at()),
            updated_at: format_timestamp(value.updated_at()),
        }
    }
}

/// Success envelope for the create endpoint.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CreateSaveDateResponseBody {
    #[schema(example = "success")]
    pub status: String,
    pub data: SaveDateResponseBody,
    #[schema(example = "Save the date created successfully.")]
    pub message: String,
}

impl From<&SaveDate> for CreateSaveDateResponseBody {
    fn from(value: &SaveDate) -> Self {
        Self {
            status: "success".to_owned(),
            data: SaveDateResponseBody::from(value),
            message: CREATED_MESSAGE.to_owned(),
        }
    }
}

/// Validate and store a new save date.
///
/// Field validation failures return `400` with the field error mapping as
/// the whole body; malformed bodies use the standard error envelope.
#[utoipa::path(
    post,
    path = "/api/v1/save-dates",
    request_body = CreateSaveDateRequestBody,
    responses(
        (status = 201, description = "Save date created", body = CreateSaveDateResponseBody),
        (status = 400, description = "Field validation failed", body = FieldErrorsSchema),
        (status = 415, description = "Body is not JSON", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["save-dates"],
    operation_id = "createSaveDate"
)]
#[post("/save-dates")]
pub async fn create_save_date(
    state: web::Data<HttpState>,
    payload: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let Value::Object(fields) = payload.into_inner() else {
        return Err(Error::invalid_request("request body must be a JSON object"));
    };

    let details = match validate_save_date_payload(&fields) {
        Ok(details) => details,
        Err(errors) => {
            debug!(%errors, "save date payload rejected");
            return Ok(HttpResponse::BadRequest().json(errors));
        }
    };

    let record = state.save_dates.create(details).await?;
    Ok(HttpResponse::Created().json(CreateSaveDateResponseBody::from(&record)))
}

/// List every stored save date, oldest first.
#[utoipa::path(
    get,
    path = "/api/v1/save-dates",
    responses(
        (status = 200, description = "All save dates", body = [SaveDateResponseBody]),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["save-dates"],
    operation_id = "listSaveDates"
)]
#[get("/save-dates")]
pub async fn list_save_dates(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<SaveDateResponseBody>>> {
    let records = state.save_dates_query.list_all().await?;
    Ok(web::Json(
        records.iter().map(SaveDateResponseBody::from).collect(),
    ))
}

#[cfg(test)]
#[path = "save_dates_tests.rs"]
mod tests;
