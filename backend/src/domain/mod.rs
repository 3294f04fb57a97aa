//! Domain primitives, aggregates and services.
//!
//! Purpose: Define strongly typed domain entities used by the API and
//! persistence layers, plus the ports that separate them. Keep types
//! immutable where possible and document invariants and serialisation
//! contracts in each type's Rustdoc.
//!
//! Public surface:
//! - Error (alias to `error::Error`): API error response payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - TraceId: per-request correlation identifier.
//! - SaveDate / SaveDateDetails / EventTime: the save-the-date aggregate.
//! - validate_save_date_payload: creation payload validator.
//! - SaveDateService: implementation of the driving ports.

pub mod error;
pub mod ports;
pub mod save_date;
mod save_date_service;
pub mod trace_id;

pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::save_date::{
    EventTime, EventTimeValidationError, FieldErrors, SaveDate, SaveDateDetails, SaveDateId,
    TimeOfDay, TimeOfDayParseError, fields, min_length, validate_save_date_payload,
};
pub use self::save_date_service::SaveDateService;
pub use self::trace_id::TraceId;
