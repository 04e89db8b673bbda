// Canonical reservation record.
//
// Every row in the durable log, whatever its historical width, normalizes to
// this shape on read.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReservationStatus {
    #[serde(rename = "ACTIVE")]
    Active,
    #[serde(rename = "CANCELLED")]
    Cancelled,
}

impl ReservationStatus {
    /// Historical rows carry free-form casing and sometimes no status at
    /// all; anything that is not CANCELLED counts as ACTIVE.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("CANCELLED") {
            Self::Cancelled
        } else {
            Self::Active
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationRecord {
    /// Assigned once at commit time, "%Y-%m-%d %H:%M:%S". Immutable.
    pub created_at: String,
    pub company: String,
    pub driver: String,
    pub phone: String,
    pub dock: String,
    /// ISO date, YYYY-MM-DD.
    pub date: String,
    /// HH:MM, always one of the catalog slots.
    pub time: String,
    pub status: ReservationStatus,
}

impl ReservationRecord {
    /// Identity is derived, never stored. Cancellation flips `status` only,
    /// so the identity survives every rewrite of the log.
    pub fn identity(&self) -> ReservationId {
        ReservationId {
            created_at: self.created_at.clone(),
            dock: self.dock.clone(),
            date: self.date.clone(),
            time: self.time.clone(),
        }
    }
}

/// Composite reservation identity `(created_at, dock, date, time)`. The wire
/// form joins the parts with `|`, none of which occurs in the fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReservationId {
    pub created_at: String,
    pub dock: String,
    pub date: String,
    pub time: String,
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}|{}|{}|{}",
            self.created_at, self.dock, self.date, self.time
        )
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("reservation id must be created_at|dock|date|time")]
pub struct ParseReservationIdError;

impl FromStr for ReservationId {
    type Err = ParseReservationIdError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let mut parts = raw.split('|');
        let mut next = || {
            parts
                .next()
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .ok_or(ParseReservationIdError)
        };
        let id = Self {
            created_at: next()?.to_string(),
            dock: next()?.to_string(),
            date: next()?.to_string(),
            time: next()?.to_string(),
        };
        match parts.next() {
            Some(_) => Err(ParseReservationIdError),
            None => Ok(id),
        }
    }
}
