//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports ([`SaveDateCommand`], [`SaveDateQuery`]) are what inbound
//! adapters call; the driven port ([`SaveDateRepository`]) is what outbound
//! persistence adapters implement.

mod macros;
pub(crate) use macros::define_port_error;

mod save_date_command;
mod save_date_query;
mod save_date_repository;

#[cfg(test)]
pub use save_date_command::MockSaveDateCommand;
pub use save_date_command::{FixtureSaveDateCommand, SaveDateCommand};
#[cfg(test)]
pub use save_date_query::MockSaveDateQuery;
pub use save_date_query::{FixtureSaveDateQuery, SaveDateQuery};
#[cfg(test)]
pub use save_date_repository::MockSaveDateRepository;
pub use save_date_repository::{SaveDateRepository, SaveDateRepositoryError};
