//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer together
//! with the schema wrappers ([`ErrorSchema`], [`ErrorCodeSchema`],
//! [`FieldErrorsSchema`]) that describe domain types without coupling them
//! to utoipa.
//!
//! The generated specification is served by Swagger UI in debug builds and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::save_dates::{
    CreateSaveDateRequestBody, CreateSaveDateResponseBody, EventTimeBody, SaveDateResponseBody,
};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, FieldErrorsSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Save date backend API",
        description = "Create and list save-the-date event announcements."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::save_dates::create_save_date,
        crate::inbound::http::save_dates::list_save_dates,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CreateSaveDateRequestBody,
        CreateSaveDateResponseBody,
        SaveDateResponseBody,
        EventTimeBody,
        ErrorSchema,
        ErrorCodeSchema,
        FieldErrorsSchema
    )),
    tags(
        (name = "save-dates", description = "Save-the-date announcements"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
