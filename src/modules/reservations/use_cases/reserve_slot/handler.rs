use std::sync::Arc;

use thiserror::Error;

use crate::modules::reservations::core::slots::OperatingWindow;
use crate::modules::reservations::use_cases::reserve_slot::command::ReserveSlot;
use crate::modules::reservations::use_cases::reserve_slot::decide::{DecideError, decide_reserve};
use crate::shared::infrastructure::notifier::Notifier;
use crate::shared::infrastructure::reservation_log::{ReservationLog, ReserveOutcome, StoreError};

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("rejected: {0}")]
    Domain(#[from] DecideError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub struct ReserveSlotHandler<TLog>
where
    TLog: ReservationLog + 'static,
{
    docks: Vec<String>,
    window: OperatingWindow,
    log: Arc<TLog>,
    notifier: Arc<dyn Notifier>,
}

impl<TLog> ReserveSlotHandler<TLog>
where
    TLog: ReservationLog + 'static,
{
    pub fn new(
        docks: Vec<String>,
        window: OperatingWindow,
        log: Arc<TLog>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            docks,
            window,
            log,
            notifier,
        }
    }

    pub async fn handle(&self, command: ReserveSlot) -> Result<ReserveOutcome, ApplicationError> {
        let record = decide_reserve(&self.docks, &self.window, command)?;
        match self.log.try_reserve(record).await? {
            ReserveOutcome::Committed(record) => {
                tracing::info!(
                    dock = %record.dock,
                    date = %record.date,
                    time = %record.time,
                    "reservation committed"
                );
                // Post-commit, outside any store lock. Delivery never alters
                // the reservation outcome.
                let message = format!(
                    "Dockflow: reservation confirmed ({}) for {} at {}. Reply STOP to opt out.",
                    record.dock, record.date, record.time
                );
                if !self.notifier.send(&record.phone, &message).await {
                    tracing::warn!(phone = %record.phone, "confirmation sms not delivered");
                }
                Ok(ReserveOutcome::Committed(record))
            }
            conflict => Ok(conflict),
        }
    }
}

#[cfg(test)]
mod reserve_slot_handler_tests {
    use super::*;
    use crate::shared::infrastructure::notifier::in_memory::InMemoryNotifier;
    use crate::shared::infrastructure::reservation_log::in_memory::InMemoryLog;
    use chrono::NaiveTime;
    use rstest::{fixture, rstest};

    type BeforeEachReturn = (Vec<String>, OperatingWindow, InMemoryLog, InMemoryNotifier);

    #[fixture]
    fn before_each() -> BeforeEachReturn {
        let docks = vec!["Dock 1".to_string(), "Dock 2".to_string()];
        let window = OperatingWindow::new(
            NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            30,
        );
        (docks, window, InMemoryLog::new(), InMemoryNotifier::new())
    }

    fn command() -> ReserveSlot {
        ReserveSlot {
            company: "Acme Freight".to_string(),
            driver: "J. Doe".to_string(),
            phone: "+17005551234".to_string(),
            dock: "Dock 2".to_string(),
            date: "2024-06-01".to_string(),
            time: "08:30".to_string(),
            created_at: "2024-05-30 12:00:00".to_string(),
        }
    }

    fn handler(
        docks: Vec<String>,
        window: OperatingWindow,
        log: InMemoryLog,
        notifier: InMemoryNotifier,
    ) -> (
        ReserveSlotHandler<InMemoryLog>,
        Arc<InMemoryLog>,
        Arc<InMemoryNotifier>,
    ) {
        let log = Arc::new(log);
        let notifier = Arc::new(notifier);
        (
            ReserveSlotHandler::new(docks, window, log.clone(), notifier.clone()),
            log,
            notifier,
        )
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_commit_and_send_a_confirmation(before_each: BeforeEachReturn) {
        let (docks, window, log, notifier) = before_each;
        let (handler, log, notifier) = handler(docks, window, log, notifier);
        let outcome = handler.handle(command()).await.expect("handle failed");
        assert!(matches!(outcome, ReserveOutcome::Committed(_)));
        assert_eq!(log.list(None).await.expect("list failed").len(), 1);
        let sent = notifier.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "+17005551234");
        assert!(sent[0].1.contains("Dock 2"));
        assert!(sent[0].1.contains("2024-06-01"));
        assert!(sent[0].1.contains("08:30"));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_a_conflict_without_notifying(before_each: BeforeEachReturn) {
        let (docks, window, log, notifier) = before_each;
        let (handler, _log, notifier) = handler(docks, window, log, notifier);
        handler.handle(command()).await.expect("first handle failed");
        let outcome = handler.handle(command()).await.expect("second handle failed");
        assert!(matches!(outcome, ReserveOutcome::Conflict { .. }));
        assert_eq!(notifier.sent().len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_still_commit_when_the_transport_rejects(before_each: BeforeEachReturn) {
        let (docks, window, log, _) = before_each;
        let (handler, log, notifier) = handler(docks, window, log, InMemoryNotifier::rejecting());
        let outcome = handler.handle(command()).await.expect("handle failed");
        assert!(matches!(outcome, ReserveOutcome::Committed(_)));
        assert_eq!(log.list(None).await.expect("list failed").len(), 1);
        assert_eq!(notifier.sent().len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_an_unknown_dock_before_touching_the_log(
        before_each: BeforeEachReturn,
    ) {
        let (docks, window, log, notifier) = before_each;
        let (handler, log, notifier) = handler(docks, window, log, notifier);
        let mut command = command();
        command.dock = "Dock 9".to_string();
        let result = handler.handle(command).await;
        assert!(matches!(
            result,
            Err(ApplicationError::Domain(DecideError::UnknownDock(_)))
        ));
        assert!(log.list(None).await.expect("list failed").is_empty());
        assert!(notifier.sent().is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_surface_a_storage_fault_as_an_error(before_each: BeforeEachReturn) {
        let (docks, window, mut log, notifier) = before_each;
        log.toggle_offline();
        let (handler, _log, notifier) = handler(docks, window, log, notifier);
        let result = handler.handle(command()).await;
        assert!(matches!(result, Err(ApplicationError::Store(_))));
        assert!(notifier.sent().is_empty());
    }
}
