use std::sync::Arc;

use crate::modules::reservations::core::record::ReservationRecord;
use crate::shared::infrastructure::reservation_log::{ReservationLog, StoreError};

pub struct ListReservationsHandler<TLog>
where
    TLog: ReservationLog + 'static,
{
    log: Arc<TLog>,
}

impl<TLog> ListReservationsHandler<TLog>
where
    TLog: ReservationLog + 'static,
{
    pub fn new(log: Arc<TLog>) -> Self {
        Self { log }
    }

    /// All records, cancelled ones included, sorted `(date, time, dock)`.
    pub async fn handle(
        &self,
        date: Option<&str>,
    ) -> Result<Vec<ReservationRecord>, StoreError> {
        let date = date.map(str::trim).filter(|d| !d.is_empty());
        self.log.list(date).await
    }
}

#[cfg(test)]
mod list_reservations_handler_tests {
    use super::*;
    use crate::modules::reservations::core::record::ReservationStatus;
    use crate::shared::infrastructure::reservation_log::in_memory::InMemoryLog;
    use rstest::rstest;

    fn record(date: &str, time: &str) -> ReservationRecord {
        ReservationRecord {
            created_at: format!("2024-05-30 12:00:00 {date} {time}"),
            company: "Acme Freight".to_string(),
            driver: "J. Doe".to_string(),
            phone: "+17005551234".to_string(),
            dock: "Dock 1".to_string(),
            date: date.to_string(),
            time: time.to_string(),
            status: ReservationStatus::Active,
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_list_in_date_time_dock_order() {
        let log = Arc::new(InMemoryLog::new());
        for r in [
            record("2024-06-02", "09:00"),
            record("2024-06-01", "10:00"),
            record("2024-06-01", "09:00"),
        ] {
            log.try_reserve(r).await.expect("reserve failed");
        }
        let handler = ListReservationsHandler::new(log);
        let records = handler.handle(None).await.expect("handle failed");
        let keys: Vec<(&str, &str)> = records
            .iter()
            .map(|r| (r.date.as_str(), r.time.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("2024-06-01", "09:00"),
                ("2024-06-01", "10:00"),
                ("2024-06-02", "09:00"),
            ]
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_treat_a_blank_filter_as_no_filter() {
        let log = Arc::new(InMemoryLog::new());
        log.try_reserve(record("2024-06-01", "09:00"))
            .await
            .expect("reserve failed");
        let handler = ListReservationsHandler::new(log);
        assert_eq!(handler.handle(Some("  ")).await.expect("handle failed").len(), 1);
        assert_eq!(
            handler
                .handle(Some("2024-06-02"))
                .await
                .expect("handle failed")
                .len(),
            0
        );
    }
}
