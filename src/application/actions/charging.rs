//! Charging data-entry action handler

use std::sync::Arc;

use chrono::Utc;
use tracing::error;

use crate::domain::{ActionOutcome, ChargingRecordRepository, FormState, NewChargingRecord};
use crate::schema::{parse_charging_record, FieldBag};

pub struct ChargingActions {
    repo: Arc<dyn ChargingRecordRepository>,
}

impl ChargingActions {
    pub fn new(repo: Arc<dyn ChargingRecordRepository>) -> Self {
        Self { repo }
    }

    /// Persist one meter reading. The record date is always the server's
    /// current day; a client-submitted date is ignored. The entry form
    /// re-renders in place, so success is a rendered message rather than
    /// a redirect.
    pub async fn record_charging_value(&self, _prev: &FormState, bag: &FieldBag) -> ActionOutcome {
        let input = match parse_charging_record(bag) {
            Ok(input) => input,
            Err(errors) => {
                return ActionOutcome::Render(FormState::with_errors(
                    errors,
                    "Missing Fields. Failed to Record Charging Value.",
                ))
            }
        };

        let record = NewChargingRecord {
            charging_station: input.charging_station,
            kw_value: input.kw_value,
            date: Utc::now().date_naive(),
        };

        if let Err(e) = self.repo.insert(record).await {
            error!(error = %e, "failed to record charging value");
            return ActionOutcome::render_message(
                "Database Error: Failed to Record Charging Value.",
            );
        }

        ActionOutcome::render_message("Recorded Charging Value.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    use crate::domain::{ChargingRecord, DomainError, DomainResult};

    #[derive(Default)]
    struct MockChargingRepo {
        fail_writes: bool,
        inserted: Mutex<Vec<NewChargingRecord>>,
    }

    #[async_trait]
    impl ChargingRecordRepository for MockChargingRepo {
        async fn insert(&self, record: NewChargingRecord) -> DomainResult<()> {
            if self.fail_writes {
                return Err(DomainError::Database("disk full".into()));
            }
            self.inserted.lock().unwrap().push(record);
            Ok(())
        }

        async fn list(&self) -> DomainResult<Vec<ChargingRecord>> {
            Ok(vec![])
        }
    }

    #[tokio::test]
    async fn stamps_the_server_date_regardless_of_client_input() {
        let repo = Arc::new(MockChargingRepo::default());
        let actions = ChargingActions::new(repo.clone());

        let mut bag = FieldBag::from([("chargingStation", "20"), ("kWValue", "13.7")]);
        // A client-supplied date is an unknown field and must be ignored.
        bag.insert("date", "1999-12-31");

        let outcome = actions
            .record_charging_value(&FormState::default(), &bag)
            .await;

        assert_eq!(
            outcome,
            ActionOutcome::render_message("Recorded Charging Value.")
        );
        let inserted = repo.inserted.lock().unwrap();
        assert_eq!(inserted[0].date, Utc::now().date_naive());
        assert_eq!(inserted[0].charging_station, "20");
        assert_eq!(inserted[0].kw_value, "13.7");
    }

    #[tokio::test]
    async fn missing_fields_never_reach_the_store() {
        let repo = Arc::new(MockChargingRepo::default());
        let actions = ChargingActions::new(repo.clone());

        let outcome = actions
            .record_charging_value(&FormState::default(), &FieldBag::new())
            .await;

        let ActionOutcome::Render(state) = outcome else {
            panic!("should re-render");
        };
        assert!(state.has_errors());
        assert!(repo.inserted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn store_failure_is_a_generic_message() {
        let repo = Arc::new(MockChargingRepo {
            fail_writes: true,
            ..Default::default()
        });
        let actions = ChargingActions::new(repo);

        let bag = FieldBag::from([("chargingStation", "10"), ("kWValue", "1")]);
        let outcome = actions
            .record_charging_value(&FormState::default(), &bag)
            .await;

        assert_eq!(
            outcome,
            ActionOutcome::render_message("Database Error: Failed to Record Charging Value.")
        );
    }
}
