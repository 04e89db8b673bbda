// Availability engine.
//
// Derives the free slots for one dock day: catalog slots minus the times
// held by ACTIVE records. Full-scan per query; an indexed ReservationLog
// adapter could replace the scan without changing this contract.

use std::collections::HashSet;
use std::sync::Arc;

use thiserror::Error;

use crate::modules::reservations::core::record::ReservationStatus;
use crate::modules::reservations::core::slots::OperatingWindow;
use crate::shared::infrastructure::reservation_log::{ReservationLog, StoreError};

#[derive(Debug, Error)]
pub enum AvailabilityError {
    #[error("unknown dock: {0}")]
    UnknownDock(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub struct AvailableSlotsHandler<TLog>
where
    TLog: ReservationLog + 'static,
{
    docks: Vec<String>,
    window: OperatingWindow,
    log: Arc<TLog>,
}

impl<TLog> AvailableSlotsHandler<TLog>
where
    TLog: ReservationLog + 'static,
{
    pub fn new(docks: Vec<String>, window: OperatingWindow, log: Arc<TLog>) -> Self {
        Self { docks, window, log }
    }

    /// Free slots in catalog order. Advisory only: the authoritative
    /// occupancy check happens again inside `try_reserve`.
    pub async fn handle(&self, dock: &str, date: &str) -> Result<Vec<String>, AvailabilityError> {
        let dock = dock.trim();
        let date = date.trim();
        if !self.docks.iter().any(|d| d == dock) {
            return Err(AvailabilityError::UnknownDock(dock.to_string()));
        }
        let records = self.log.list(Some(date)).await?;
        let busy: HashSet<&str> = records
            .iter()
            .filter(|r| r.status == ReservationStatus::Active && r.dock == dock)
            .map(|r| r.time.as_str())
            .collect();
        Ok(self
            .window
            .slots()
            .into_iter()
            .filter(|slot| !busy.contains(slot.as_str()))
            .collect())
    }
}
