//! Shared helper utilities for backend integration tests.
//!
//! Integration tests compile as separate crates under `backend/tests/`; this
//! module gives them one home for database access and skip policy.

use std::sync::{Mutex, MutexGuard, OnceLock};

use diesel::Connection;
use diesel::pg::PgConnection;
use diesel::RunQueryDsl;
use savedate::outbound::persistence::{DbPool, PoolConfig, run_migrations};

/// Environment variable naming a disposable PostgreSQL database for tests.
pub const TEST_DATABASE_URL: &str = "SAVEDATE_TEST_DATABASE_URL";

static DATABASE_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

/// A migrated, emptied database reserved for the current test.
pub struct TestDatabase {
    pub pool: DbPool,
    _guard: MutexGuard<'static, ()>,
}

fn lock_database() -> MutexGuard<'static, ()> {
    let lock = DATABASE_LOCK.get_or_init(|| Mutex::new(()));
    // A panicking test leaves the table in an unknown state; the next test
    // truncates it anyway.
    lock.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

fn truncate(url: &str) -> Result<(), String> {
    let mut conn = PgConnection::establish(url).map_err(|err| err.to_string())?;
    diesel::sql_query("TRUNCATE TABLE save_dates RESTART IDENTITY")
        .execute(&mut conn)
        .map_err(|err| err.to_string())?;
    Ok(())
}

/// Prepare the test database, or return `None` when none is configured.
///
/// Tests sharing the database are serialised by a process-wide lock held
/// for the lifetime of the returned value.
pub async fn test_database() -> Option<TestDatabase> {
    let Ok(url) = std::env::var(TEST_DATABASE_URL) else {
        eprintln!("SKIP-TEST-DATABASE: {TEST_DATABASE_URL} is not set");
        return None;
    };

    let guard = lock_database();
    run_migrations(&url).await.expect("migrations apply");
    truncate(&url).expect("save_dates truncates");
    let pool = DbPool::connect(PoolConfig::new(&url).with_max_size(2))
        .await
        .expect("pool builds");

    Some(TestDatabase {
        pool,
        _guard: guard,
    })
}
