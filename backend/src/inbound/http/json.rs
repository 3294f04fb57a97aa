//! JSON body extraction settings.
//!
//! Actix rejects bodies it cannot extract before a handler runs. The
//! handler registered here turns those rejections into domain errors so they
//! share the standard error envelope and carry the request trace id.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, web};
use tracing::debug;

use crate::domain::Error;

/// Largest accepted request body.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

fn map_payload_error(err: &JsonPayloadError) -> Error {
    match err {
        JsonPayloadError::ContentType => {
            Error::unsupported_media_type("request body must be sent as application/json")
        }
        JsonPayloadError::Overflow { limit } | JsonPayloadError::OverflowKnownLength { limit, .. } => {
            Error::invalid_request(format!("request body exceeds {limit} bytes"))
        }
        _ => Error::invalid_request("request body is not valid JSON"),
    }
}

/// Extractor configuration shared by every JSON endpoint.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use savedate::inbound::http::json::json_config;
///
/// let _app = App::new().app_data(json_config());
/// ```
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(MAX_BODY_BYTES)
        .error_handler(|err, _req: &HttpRequest| {
            debug!(error = %err, "rejected request body");
            map_payload_error(&err).into()
        })
}
