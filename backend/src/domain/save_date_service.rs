//! Save date domain service implementing the driving ports.
//!
//! Stamps creation time from the injected clock, delegates storage to the
//! repository port and maps repository failures into domain errors.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{error, info};

use crate::domain::ports::{
    SaveDateCommand, SaveDateQuery, SaveDateRepository, SaveDateRepositoryError,
};
use crate::domain::{Error, SaveDate, SaveDateDetails};

/// Save date service backed by a [`SaveDateRepository`].
#[derive(Clone)]
pub struct SaveDateService<R> {
    repository: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> SaveDateService<R> {
    /// Create a service over `repository`, reading time from `clock`.
    ///
    /// ```rust,no_run
    /// # use std::sync::Arc;
    /// # use mockable::DefaultClock;
    /// # use savedate::domain::SaveDateService;
    /// # use savedate::outbound::persistence::InMemorySaveDateRepository;
    /// let service = SaveDateService::new(
    ///     Arc::new(InMemorySaveDateRepository::default()),
    ///     Arc::new(DefaultClock),
    /// );
    /// # let _ = service;
    /// ```
    pub fn new(repository: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }
}

fn map_repository_error(error: SaveDateRepositoryError) -> Error {
    match error {
        SaveDateRepositoryError::Connection { message } => {
            error!(%message, "save date repository unavailable");
            Error::service_unavailable(format!("save date repository unavailable: {message}"))
        }
        SaveDateRepositoryError::Query { message } => {
            error!(%message, "save date repository query failed");
            Error::internal(format!("save date repository error: {message}"))
        }
        SaveDateRepositoryError::NotFound { id } => {
            error!(%id, "save date vanished from repository");
            Error::internal(format!("save date {id} not found"))
        }
    }
}

#[async_trait]
impl<R> SaveDateCommand for SaveDateService<R>
where
    R: SaveDateRepository,
{
    async fn create(&self, details: SaveDateDetails) -> Result<SaveDate, Error> {
        let now = self.clock.utc();
        let record = self
            .repository
            .create(details, now)
            .await
            .map_err(map_repository_error)?;
        info!(save_date_id = %record.id(), "save date created");
        Ok(record)
    }
}

#[async_trait]
impl<R> SaveDateQuery for SaveDateService<R>
where
    R: SaveDateRepository,
{
    async fn list_all(&self) -> Result<Vec<SaveDate>, Error> {
        self.repository
            .list_all()
            .await
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Local, TimeZone, Utc};
    use rstest::{fixture, rstest};

    use super::*;
    use crate::domain::ports::MockSaveDateRepository;
    use crate::domain::{ErrorCode, EventTime, SaveDateId};

    struct FixtureClock(DateTime<Utc>);

    impl Clock for FixtureClock {
        fn local(&self) -> DateTime<Local> {
            self.0.with_timezone(&Local)
        }

        fn utc(&self) -> DateTime<Utc> {
            self.0
        }
    }

    #[fixture]
    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 20, 9, 30, 0)
            .single()
            .expect("valid timestamp")
    }

    #[fixture]
    fn details() -> SaveDateDetails {
        SaveDateDetails {
            title: "Evento Simples".to_owned(),
            event_subtitle: None,
            event_summary: "Descrição válida com mais de 10 caracteres".to_owned(),
            event_times: vec![
                EventTime::new("Evento", "10:00".parse().expect("valid time"))
                    .expect("valid slot"),
            ],
            event_venue: "Local do Evento".to_owned(),
            event_address: "Endereço do Evento".to_owned(),
            event_city: "Cidade".to_owned(),
        }
    }

    fn service(repo: MockSaveDateRepository, now: DateTime<Utc>) -> SaveDateService<MockSaveDateRepository> {
        SaveDateService::new(Arc::new(repo), Arc::new(FixtureClock(now)))
    }

    #[rstest]
    #[tokio::test]
    async fn create_stamps_clock_reading(now: DateTime<Utc>, details: SaveDateDetails) {
        let mut repo = MockSaveDateRepository::new();
        repo.expect_create()
            .withf(move |_, stamped| *stamped == now)
            .times(1)
            .returning(|details, stamped| {
                Ok(SaveDate::create(SaveDateId::random(), details, stamped))
            });

        let record = service(repo, now)
            .create(details.clone())
            .await
            .expect("create succeeds");

        assert_eq!(record.details, details);
        assert_eq!(record.created_at(), now);
        assert_eq!(record.updated_at(), now);
    }

    #[rstest]
    #[tokio::test]
    async fn list_returns_repository_order(now: DateTime<Utc>, details: SaveDateDetails) {
        let first = SaveDate::create(SaveDateId::random(), details.clone(), now);
        let second = SaveDate::create(SaveDateId::random(), details, now);
        let stored = vec![first.clone(), second.clone()];

        let mut repo = MockSaveDateRepository::new();
        repo.expect_list_all()
            .times(1)
            .return_once(move || Ok(stored));

        let listed = service(repo, now).list_all().await.expect("list succeeds");

        assert_eq!(listed, vec![first, second]);
    }

    #[rstest]
    #[case(SaveDateRepositoryError::connection("refused"), ErrorCode::ServiceUnavailable)]
    #[case(SaveDateRepositoryError::query("syntax"), ErrorCode::InternalError)]
    #[case(SaveDateRepositoryError::not_found("x"), ErrorCode::InternalError)]
    #[tokio::test]
    async fn repository_errors_map_to_domain_codes(
        now: DateTime<Utc>,
        details: SaveDateDetails,
        #[case] failure: SaveDateRepositoryError,
        #[case] expected: ErrorCode,
    ) {
        let mut repo = MockSaveDateRepository::new();
        repo.expect_create()
            .times(1)
            .return_once(move |_, _| Err(failure));

        let err = service(repo, now)
            .create(details)
            .await
            .expect_err("create fails");

        assert_eq!(err.code(), expected);
    }
}
