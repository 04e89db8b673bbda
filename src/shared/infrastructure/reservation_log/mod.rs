use async_trait::async_trait;
use thiserror::Error;

use crate::modules::reservations::core::record::{ReservationId, ReservationRecord};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend error: {0}")]
    Backend(String),
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Backend(err.to_string())
    }
}

/// Commit-time outcome of a reservation attempt. Conflict is a normal
/// result, not an error: the slot was taken between the caller's
/// availability read and this call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReserveOutcome {
    Committed(ReservationRecord),
    Conflict {
        dock: String,
        date: String,
        time: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CancelOutcome {
    /// Also returned when the record was already cancelled; the flip is
    /// idempotent and never reverts.
    Cancelled(ReservationRecord),
    NotFound,
}

/// Concurrency boundary around the durable reservation log.
///
/// Implementations must linearize `try_reserve` and `cancel`: the occupancy
/// re-check and the write happen inside one critical section, so no two
/// writers interleave their read and write phases. Reads take no lock but
/// always observe a fully consistent log.
#[async_trait]
pub trait ReservationLog: Send + Sync {
    /// Re-checks that no ACTIVE record holds `(dock, date, time)` and
    /// appends if free. This is the authoritative double-booking guard,
    /// independent of any earlier availability read.
    async fn try_reserve(&self, record: ReservationRecord) -> Result<ReserveOutcome, StoreError>;

    /// Flips the matching record ACTIVE -> CANCELLED and rewrites the whole
    /// log at the current schema width, preserving row order. No write on
    /// NotFound.
    async fn cancel(&self, id: &ReservationId) -> Result<CancelOutcome, StoreError>;

    /// Normalized records, optionally filtered by exact date, sorted by
    /// `(date, time, dock)`. Presentation ordering, not storage order.
    async fn list(&self, date: Option<&str>) -> Result<Vec<ReservationRecord>, StoreError>;
}

pub(crate) fn sort_for_listing(records: &mut [ReservationRecord]) {
    records.sort_by(|a, b| (&a.date, &a.time, &a.dock).cmp(&(&b.date, &b.time, &b.dock)));
}

pub mod csv_file;
pub mod in_memory;
