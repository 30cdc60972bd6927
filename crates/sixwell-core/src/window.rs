//! Rolling 7-day check-in window.

use serde::{Deserialize, Serialize};

/// Length of the rolling window in calendar days.
pub const WINDOW_DAYS: usize = 7;

/// Sliding record of whether each of the last seven calendar days had a
/// check-in, oldest first, newest last.
///
/// The window always holds exactly seven entries. It shifts exactly once per
/// accepted check-in (the tracker's once-per-day precondition guarantees at
/// most one shift per dimension per day), so the last entry reads as "today"
/// immediately after a check-in is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WeekWindow([bool; WINDOW_DAYS]);

impl WeekWindow {
    /// The seven per-day flags, oldest first.
    pub fn days(&self) -> &[bool; WINDOW_DAYS] {
        &self.0
    }

    /// Newest entry (the day of the most recent shift).
    pub fn latest(&self) -> bool {
        self.0[WINDOW_DAYS - 1]
    }

    /// How many of the last seven days had a check-in.
    pub fn days_active(&self) -> usize {
        self.0.iter().filter(|&&d| d).count()
    }

    /// Drop the oldest entry and append `true` for today.
    pub(crate) fn shift_in_today(&mut self) {
        self.0.rotate_left(1);
        self.0[WINDOW_DAYS - 1] = true;
    }
}
