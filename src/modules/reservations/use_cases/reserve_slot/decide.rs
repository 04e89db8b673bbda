use chrono::NaiveDate;

use crate::modules::reservations::core::record::{ReservationRecord, ReservationStatus};
use crate::modules::reservations::core::slots::OperatingWindow;
use crate::modules::reservations::use_cases::reserve_slot::command::ReserveSlot;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("company, driver and phone are required")]
    MissingContact,

    #[error("unknown dock: {0}")]
    UnknownDock(String),

    #[error("date must be YYYY-MM-DD, got {0}")]
    InvalidDate(String),

    #[error("time {0} is not a bookable slot")]
    OutsideWindow(String),
}

/// Pure admission check: trims the request and validates it against the
/// dock list and the slot catalog. Occupancy is deliberately not checked
/// here; the store re-checks it under its write lock at commit time.
pub fn decide_reserve(
    docks: &[String],
    window: &OperatingWindow,
    command: ReserveSlot,
) -> Result<ReservationRecord, DecideError> {
    let company = command.company.trim().to_string();
    let driver = command.driver.trim().to_string();
    let phone = command.phone.trim().to_string();
    if company.is_empty() || driver.is_empty() || phone.is_empty() {
        return Err(DecideError::MissingContact);
    }

    let dock = command.dock.trim().to_string();
    if !docks.iter().any(|d| d == &dock) {
        return Err(DecideError::UnknownDock(dock));
    }

    let date = command.date.trim().to_string();
    if NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_err() {
        return Err(DecideError::InvalidDate(date));
    }

    let time = command.time.trim().to_string();
    if !window.contains(&time) {
        return Err(DecideError::OutsideWindow(time));
    }

    Ok(ReservationRecord {
        created_at: command.created_at.trim().to_string(),
        company,
        driver,
        phone,
        dock,
        date,
        time,
        status: ReservationStatus::Active,
    })
}
