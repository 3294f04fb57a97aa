//! Save date backend library modules.
//!
//! The crate follows a hexagonal layout: [`domain`] holds the aggregate,
//! validator, ports and service; [`inbound`] adapts HTTP requests onto the
//! driving ports; [`outbound`] implements the store port.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
