//! Check-in tracker engine.
//!
//! The tracker is a date-driven state machine. It owns one record per
//! dimension and enforces a strict once-per-calendar-day discipline: the
//! first check-in of a day advances the record, any further check-in that
//! day is a reported no-op.
//!
//! ## Day rollover
//!
//! There is no scheduled midnight event. "Done today" is level-triggered:
//! every operation re-evaluates `last_check_in` against the date it is
//! given, so yesterday's completed dimension reads as pending again as soon
//! as callers start passing the new date. The `*_on` methods take the date
//! explicitly (and are what tests use); the plain methods read the
//! host-local calendar date once per call.
//!
//! ## Usage
//!
//! ```ignore
//! let mut tracker = Tracker::new();
//! match tracker.check_in(Dimension::Movement) {
//!     CheckIn::Recorded => { /* persist, celebrate */ }
//!     CheckIn::AlreadyLogged => { /* neutral notice */ }
//! }
//! ```

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::dimension::{Dimension, DIMENSION_COUNT};
use crate::window::WeekWindow;

/// Outcome of a check-in attempt.
///
/// `AlreadyLogged` is a normal outcome, not a failure: the caller asked for
/// something that is already true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckIn {
    /// The check-in was accepted and the record advanced.
    Recorded,
    /// The dimension was already checked in on the given day; nothing changed.
    AlreadyLogged,
}

/// Per-dimension persistent state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DimensionRecord {
    /// Cumulative accepted check-ins. Never decremented.
    pub count: u32,
    /// Consecutive-check-in counter, incremented on every accepted check-in.
    ///
    /// A gap of missed days does not reset this to 1; that matches the
    /// shipped product behavior, which counts accepted check-ins rather
    /// than strictly consecutive days.
    pub streak: u32,
    /// Date of the most recent accepted check-in; `None` means never.
    pub last_check_in: Option<NaiveDate>,
    /// Rolling 7-day check-in window, oldest first.
    pub window: WeekWindow,
}

impl DimensionRecord {
    /// Whether this dimension was checked in on `day`.
    pub fn checked_on(&self, day: NaiveDate) -> bool {
        self.last_check_in == Some(day)
    }
}

/// Point-in-time view of one dimension, relative to a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionSnapshot {
    pub dimension: Dimension,
    pub count: u32,
    pub streak: u32,
    pub checked_today: bool,
    pub window: WeekWindow,
}

/// Aggregate view across all six dimensions for a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    /// Dimensions checked in on `date`, always in `0..=6`.
    pub completed_today: u32,
    /// Sum of all cumulative counts.
    pub total_actions: u64,
}

/// The check-in state machine.
///
/// Owns the six per-dimension records exclusively; there is no global
/// instance. The engine performs no I/O -- persistence belongs to the
/// caller, which can serialize the whole tracker (it is serde-friendly)
/// after each accepted check-in and restore it at startup.
///
/// All mutation goes through [`check_in_on`](Tracker::check_in_on), which
/// applies its four-field update under `&mut self`; the exclusive borrow is
/// exactly the per-engine serialization a concurrent host needs (wrap the
/// tracker in a lock there -- a query can never observe a half-applied
/// transition).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Tracker {
    records: [DimensionRecord; DIMENSION_COUNT],
}

impl Tracker {
    /// Create a fresh tracker: all counts and streaks zero, no check-ins,
    /// empty windows.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Record a check-in for `dimension` on the host-local calendar date.
    pub fn check_in(&mut self, dimension: Dimension) -> CheckIn {
        self.check_in_on(dimension, today())
    }

    /// Record a check-in for `dimension` on `today`.
    ///
    /// If the dimension was already checked in on `today`, this is a no-op
    /// and returns [`CheckIn::AlreadyLogged`]; no field changes. Otherwise
    /// the record advances in one transition: count and streak increment,
    /// `last_check_in` moves to `today`, and the window shifts once. No
    /// other dimension is touched.
    pub fn check_in_on(&mut self, dimension: Dimension, today: NaiveDate) -> CheckIn {
        let record = &mut self.records[dimension.index()];
        if record.checked_on(today) {
            return CheckIn::AlreadyLogged;
        }
        record.count += 1;
        record.streak += 1;
        record.last_check_in = Some(today);
        record.window.shift_in_today();
        CheckIn::Recorded
    }

    // ── Queries ──────────────────────────────────────────────────────

    /// Snapshot of one dimension relative to the host-local calendar date.
    pub fn snapshot(&self, dimension: Dimension) -> DimensionSnapshot {
        self.snapshot_on(dimension, today())
    }

    /// Snapshot of one dimension relative to `today`. Read-only.
    pub fn snapshot_on(&self, dimension: Dimension, today: NaiveDate) -> DimensionSnapshot {
        let record = &self.records[dimension.index()];
        DimensionSnapshot {
            dimension,
            count: record.count,
            streak: record.streak,
            checked_today: record.checked_on(today),
            window: record.window,
        }
    }

    /// Aggregate summary relative to the host-local calendar date.
    pub fn summary(&self) -> DailySummary {
        self.summary_on(today())
    }

    /// Aggregate summary relative to `today`. Read-only.
    pub fn summary_on(&self, today: NaiveDate) -> DailySummary {
        DailySummary {
            date: today,
            completed_today: self
                .records
                .iter()
                .filter(|r| r.checked_on(today))
                .count() as u32,
            total_actions: self.records.iter().map(|r| u64::from(r.count)).sum(),
        }
    }

    /// Raw record access.
    pub fn record(&self, dimension: Dimension) -> &DimensionRecord {
        &self.records[dimension.index()]
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn day(n: i64) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 1).unwrap() + Duration::days(n)
    }

    #[test]
    fn fresh_tracker_is_all_zero() {
        let tracker = Tracker::new();
        for dim in Dimension::ALL {
            let record = tracker.record(dim);
            assert_eq!(record.count, 0);
            assert_eq!(record.streak, 0);
            assert_eq!(record.last_check_in, None);
            assert_eq!(record.window.days_active(), 0);
        }
        let summary = tracker.summary_on(day(0));
        assert_eq!(summary.completed_today, 0);
        assert_eq!(summary.total_actions, 0);
    }

    #[test]
    fn first_check_in_advances_all_four_fields() {
        let mut tracker = Tracker::new();
        assert_eq!(tracker.check_in_on(Dimension::Social, day(0)), CheckIn::Recorded);

        let snap = tracker.snapshot_on(Dimension::Social, day(0));
        assert_eq!(snap.count, 1);
        assert_eq!(snap.streak, 1);
        assert!(snap.checked_today);
        assert_eq!(
            snap.window.days(),
            &[false, false, false, false, false, false, true]
        );

        // Every other dimension is untouched.
        for dim in Dimension::ALL.into_iter().skip(1) {
            assert_eq!(*tracker.record(dim), DimensionRecord::default());
        }
    }

    #[test]
    fn second_check_in_same_day_is_a_no_op() {
        let mut tracker = Tracker::new();
        tracker.check_in_on(Dimension::Brain, day(0));
        let after_first = tracker.record(Dimension::Brain).clone();

        assert_eq!(
            tracker.check_in_on(Dimension::Brain, day(0)),
            CheckIn::AlreadyLogged
        );
        assert_eq!(*tracker.record(Dimension::Brain), after_first);

        // Still a no-op on the third try.
        assert_eq!(
            tracker.check_in_on(Dimension::Brain, day(0)),
            CheckIn::AlreadyLogged
        );
        assert_eq!(*tracker.record(Dimension::Brain), after_first);
    }

    #[test]
    fn consecutive_days_grow_count_and_streak() {
        let mut tracker = Tracker::new();
        tracker.check_in_on(Dimension::Movement, day(0));
        assert_eq!(tracker.check_in_on(Dimension::Movement, day(1)), CheckIn::Recorded);

        let record = tracker.record(Dimension::Movement);
        assert_eq!(record.count, 2);
        assert_eq!(record.streak, 2);
        assert_eq!(record.last_check_in, Some(day(1)));
        assert_eq!(
            record.window.days(),
            &[false, false, false, false, false, true, true]
        );
    }

    #[test]
    fn yesterdays_check_in_reads_as_pending_today() {
        let mut tracker = Tracker::new();
        tracker.check_in_on(Dimension::Purpose, day(0));

        assert!(tracker.snapshot_on(Dimension::Purpose, day(0)).checked_today);
        assert!(!tracker.snapshot_on(Dimension::Purpose, day(1)).checked_today);
        assert_eq!(tracker.summary_on(day(1)).completed_today, 0);
    }

    #[test]
    fn streak_survives_a_gap() {
        // Shipped behavior: a missed day does not reset the streak.
        let mut tracker = Tracker::new();
        tracker.check_in_on(Dimension::Nutrition, day(0));
        tracker.check_in_on(Dimension::Nutrition, day(5));

        let record = tracker.record(Dimension::Nutrition);
        assert_eq!(record.count, 2);
        assert_eq!(record.streak, 2);
    }

    #[test]
    fn all_six_in_one_day_completes_the_summary() {
        let mut tracker = Tracker::new();
        for dim in Dimension::ALL {
            assert_eq!(tracker.check_in_on(dim, day(0)), CheckIn::Recorded);
        }
        let summary = tracker.summary_on(day(0));
        assert_eq!(summary.completed_today, 6);
        assert_eq!(summary.total_actions, 6);
        assert_eq!(summary.date, day(0));
    }

    #[test]
    fn summary_matches_per_dimension_snapshots() {
        let mut tracker = Tracker::new();
        tracker.check_in_on(Dimension::Social, day(0));
        tracker.check_in_on(Dimension::Brain, day(0));
        tracker.check_in_on(Dimension::SelfCare, day(1));

        for probe in [day(0), day(1), day(2)] {
            let checked = Dimension::ALL
                .iter()
                .filter(|&&d| tracker.snapshot_on(d, probe).checked_today)
                .count() as u32;
            assert_eq!(tracker.summary_on(probe).completed_today, checked);
        }
        assert_eq!(tracker.summary_on(day(2)).total_actions, 3);
    }

    #[test]
    fn window_tracks_only_check_in_days() {
        let mut tracker = Tracker::new();
        // Days 0, 1, 3 (day 2 missed). The window shifts once per accepted
        // check-in, so the missed day leaves no hole by itself.
        tracker.check_in_on(Dimension::Social, day(0));
        tracker.check_in_on(Dimension::Social, day(1));
        tracker.check_in_on(Dimension::Social, day(3));

        let record = tracker.record(Dimension::Social);
        assert_eq!(record.window.days_active(), 3);
        assert!(record.window.latest());
    }

    #[test]
    fn tracker_round_trips_through_serde() {
        let mut tracker = Tracker::new();
        tracker.check_in_on(Dimension::Movement, day(0));
        tracker.check_in_on(Dimension::SelfCare, day(1));

        let json = serde_json::to_string(&tracker).unwrap();
        let restored: Tracker = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, tracker);
    }
}
