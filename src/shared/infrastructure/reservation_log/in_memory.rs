// In memory implementation of the ReservationLog port.
//
// Purpose
// - Support handler tests and local development without touching disk.
//
// Responsibilities
// - Hold records in memory behind one RwLock; the write guard is the
//   critical section linearizing reserve and cancel.
// - Offer fault and latency toggles for exercising error paths and races.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{CancelOutcome, ReservationLog, ReserveOutcome, StoreError, sort_for_listing};
use crate::modules::reservations::core::record::{
    ReservationId, ReservationRecord, ReservationStatus,
};

pub struct InMemoryLog {
    inner: RwLock<Vec<ReservationRecord>>,
    offline: bool,
    delay_write_ms: u64,
}

impl InMemoryLog {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Vec::new()),
            offline: false,
            delay_write_ms: 0,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    /// Widens the critical section to make write races observable in tests.
    pub fn set_delay_write_ms(&mut self, ms: u64) {
        self.delay_write_ms = ms;
    }

    fn check_online(&self) -> Result<(), StoreError> {
        if self.offline {
            return Err(StoreError::Backend("reservation log offline".into()));
        }
        Ok(())
    }
}

impl Default for InMemoryLog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReservationLog for InMemoryLog {
    async fn try_reserve(&self, record: ReservationRecord) -> Result<ReserveOutcome, StoreError> {
        self.check_online()?;
        let mut guard = self.inner.write().await;
        let taken = guard.iter().any(|r| {
            r.status == ReservationStatus::Active
                && r.dock == record.dock
                && r.date == record.date
                && r.time == record.time
        });
        if taken {
            return Ok(ReserveOutcome::Conflict {
                dock: record.dock,
                date: record.date,
                time: record.time,
            });
        }
        if self.delay_write_ms > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(self.delay_write_ms)).await;
        }
        guard.push(record.clone());
        Ok(ReserveOutcome::Committed(record))
    }

    async fn cancel(&self, id: &ReservationId) -> Result<CancelOutcome, StoreError> {
        self.check_online()?;
        let mut guard = self.inner.write().await;
        match guard.iter_mut().find(|r| r.identity() == *id) {
            Some(record) => {
                record.status = ReservationStatus::Cancelled;
                Ok(CancelOutcome::Cancelled(record.clone()))
            }
            None => Ok(CancelOutcome::NotFound),
        }
    }

    async fn list(&self, date: Option<&str>) -> Result<Vec<ReservationRecord>, StoreError> {
        self.check_online()?;
        let guard = self.inner.read().await;
        let mut records: Vec<ReservationRecord> = match date {
            Some(date) => guard.iter().filter(|r| r.date == date).cloned().collect(),
            None => guard.clone(),
        };
        sort_for_listing(&mut records);
        Ok(records)
    }
}
