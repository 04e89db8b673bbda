use std::sync::Arc;

use crate::modules::reservations::use_cases::cancel_reservation::command::CancelReservation;
use crate::shared::infrastructure::reservation_log::{CancelOutcome, ReservationLog, StoreError};

pub struct CancelReservationHandler<TLog>
where
    TLog: ReservationLog + 'static,
{
    log: Arc<TLog>,
}

impl<TLog> CancelReservationHandler<TLog>
where
    TLog: ReservationLog + 'static,
{
    pub fn new(log: Arc<TLog>) -> Self {
        Self { log }
    }

    pub async fn handle(&self, command: CancelReservation) -> Result<CancelOutcome, StoreError> {
        let outcome = self.log.cancel(&command.id).await?;
        match &outcome {
            CancelOutcome::Cancelled(record) => {
                tracing::info!(
                    dock = %record.dock,
                    date = %record.date,
                    time = %record.time,
                    "reservation cancelled"
                );
            }
            CancelOutcome::NotFound => {
                tracing::info!(id = %command.id, "cancel target not found");
            }
        }
        Ok(outcome)
    }
}
