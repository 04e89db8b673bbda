// Slot catalog.
//
// Purpose
// - Derive the canonical ordered list of bookable HH:MM slots for a dock day
//   from the operating window and step size.
//
// Responsibilities
// - Stay pure: slots are generated on demand, never stored.

use chrono::{NaiveTime, Timelike};

/// Closed operating window `[start, end]`. Both endpoints are bookable when
/// the step divides the window evenly; otherwise the last slot is the
/// greatest value at or before `end`. A window/step combination that drops
/// the closing slot is a deployment precondition, not a runtime error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatingWindow {
    start: NaiveTime,
    end: NaiveTime,
    step_minutes: u32,
}

impl OperatingWindow {
    pub fn new(start: NaiveTime, end: NaiveTime, step_minutes: u32) -> Self {
        Self {
            start,
            end,
            step_minutes,
        }
    }

    /// Every bookable HH:MM value in ascending order. Deterministic and
    /// restartable: repeated calls yield identical output.
    pub fn slots(&self) -> Vec<String> {
        let mut slots = Vec::new();
        if self.step_minutes == 0 {
            return slots;
        }
        let end = self.end.hour() * 60 + self.end.minute();
        let mut minute = self.start.hour() * 60 + self.start.minute();
        while minute <= end {
            slots.push(format!("{:02}:{:02}", minute / 60, minute % 60));
            minute += self.step_minutes;
        }
        slots
    }

    pub fn contains(&self, time: &str) -> bool {
        self.slots().iter().any(|slot| slot == time)
    }
}
