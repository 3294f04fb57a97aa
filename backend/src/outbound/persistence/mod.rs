//! Persistence adapters for the save date store.
//!
//! Two implementations of [`crate::domain::ports::SaveDateRepository`] live
//! here:
//!
//! - [`InMemorySaveDateRepository`] keeps records in process memory and is
//!   used when no database URL is configured.
//! - [`DieselSaveDateRepository`] stores records in PostgreSQL via the Diesel
//!   ORM with async support through `diesel-async` and `bb8` connection
//!   pooling.
//!
//! Diesel row structs (`models.rs`) and schema definitions (`schema.rs`) are
//! internal implementation details, never exposed to the domain layer.
//!
//! # Example
//!
//! ```no_run
//! use savedate::outbound::persistence::{
//!     DbPool, DieselSaveDateRepository, PoolConfig, run_migrations,
//! };
//!
//! # async fn connect() -> Result<(), Box<dyn std::error::Error>> {
//! let url = "postgres://localhost/savedate";
//! run_migrations(url).await?;
//! let pool = DbPool::connect(PoolConfig::new(url)).await?;
//! let repo = DieselSaveDateRepository::new(pool);
//! # let _ = repo;
//! # Ok(())
//! # }
//! ```

mod diesel_save_date_repository;
mod in_memory_save_date_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_save_date_repository::DieselSaveDateRepository;
pub use in_memory_save_date_repository::InMemorySaveDateRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
