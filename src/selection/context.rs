//! Working state threaded through a generation run.

use std::collections::{BTreeSet, HashMap, HashSet};

use chrono::NaiveDate;

use crate::models::week_start;

/// Mutable working state for one generation run.
///
/// Tracks who is already assigned on each date, the distinct dates each
/// worker has worked per Sunday-anchored week, and the precomputed
/// per-worker unavailable dates. The selector only reads this; the caller
/// advances it with [`SelectionContext::record_assignment`] after each
/// accepted pick.
#[derive(Debug, Clone, Default)]
pub struct SelectionContext {
    /// Worker ids assigned per date (any shift).
    assigned: HashMap<NaiveDate, HashSet<String>>,
    /// Distinct worked dates per (worker, week start).
    weekly_worked: HashMap<(String, NaiveDate), BTreeSet<NaiveDate>>,
    /// Dates each worker is unavailable (resolved up front).
    unavailable: HashMap<String, HashSet<NaiveDate>>,
}

impl SelectionContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a worker unavailable on a set of dates.
    pub fn with_unavailable_dates(
        mut self,
        worker_id: impl Into<String>,
        dates: impl IntoIterator<Item = NaiveDate>,
    ) -> Self {
        self.unavailable
            .entry(worker_id.into())
            .or_default()
            .extend(dates);
        self
    }

    /// Seeds an existing assignment (builder form of `record_assignment`).
    pub fn with_assignment(mut self, worker_id: impl Into<String>, date: NaiveDate) -> Self {
        self.record_assignment(&worker_id.into(), date);
        self
    }

    /// Whether the worker already holds an assignment on the date.
    pub fn is_assigned(&self, worker_id: &str, date: NaiveDate) -> bool {
        self.assigned
            .get(&date)
            .is_some_and(|ids| ids.contains(worker_id))
    }

    /// Whether the worker is unavailable on the date.
    pub fn is_unavailable(&self, worker_id: &str, date: NaiveDate) -> bool {
        self.unavailable
            .get(worker_id)
            .is_some_and(|dates| dates.contains(&date))
    }

    /// Distinct dates the worker has worked in the week containing `date`.
    pub fn worked_dates(&self, worker_id: &str, date: NaiveDate) -> &BTreeSet<NaiveDate> {
        static EMPTY: BTreeSet<NaiveDate> = BTreeSet::new();
        self.weekly_worked
            .get(&(worker_id.to_string(), week_start(date)))
            .unwrap_or(&EMPTY)
    }

    /// Count of distinct dates worked in the week containing `date`.
    pub fn weekly_count(&self, worker_id: &str, date: NaiveDate) -> usize {
        self.worked_dates(worker_id, date).len()
    }

    /// Records an accepted assignment, updating the per-date and per-week
    /// views. Must be called before the next `select_next` for the run's
    /// state to stay consistent.
    pub fn record_assignment(&mut self, worker_id: &str, date: NaiveDate) {
        self.assigned
            .entry(date)
            .or_default()
            .insert(worker_id.to_string());
        self.weekly_worked
            .entry((worker_id.to_string(), week_start(date)))
            .or_default()
            .insert(date);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_record_and_query() {
        let mut ctx = SelectionContext::new();
        assert!(!ctx.is_assigned("W1", date(2026, 3, 2)));
        assert_eq!(ctx.weekly_count("W1", date(2026, 3, 2)), 0);

        ctx.record_assignment("W1", date(2026, 3, 2));
        ctx.record_assignment("W1", date(2026, 3, 3));

        assert!(ctx.is_assigned("W1", date(2026, 3, 2)));
        assert!(!ctx.is_assigned("W2", date(2026, 3, 2)));
        assert_eq!(ctx.weekly_count("W1", date(2026, 3, 4)), 2);
    }

    #[test]
    fn test_same_date_counts_once_per_week() {
        let mut ctx = SelectionContext::new();
        // Day and night on the same date: one worked day.
        ctx.record_assignment("W1", date(2026, 3, 2));
        ctx.record_assignment("W1", date(2026, 3, 2));
        assert_eq!(ctx.weekly_count("W1", date(2026, 3, 2)), 1);
    }

    #[test]
    fn test_weeks_are_sunday_bounded() {
        let mut ctx = SelectionContext::new();
        // Saturday 2026-03-07 and Sunday 2026-03-08 are different weeks.
        ctx.record_assignment("W1", date(2026, 3, 7));
        ctx.record_assignment("W1", date(2026, 3, 8));
        assert_eq!(ctx.weekly_count("W1", date(2026, 3, 7)), 1);
        assert_eq!(ctx.weekly_count("W1", date(2026, 3, 8)), 1);
    }

    #[test]
    fn test_unavailable_dates() {
        let ctx = SelectionContext::new()
            .with_unavailable_dates("W1", [date(2026, 3, 2), date(2026, 3, 3)]);
        assert!(ctx.is_unavailable("W1", date(2026, 3, 2)));
        assert!(!ctx.is_unavailable("W1", date(2026, 3, 4)));
        assert!(!ctx.is_unavailable("W2", date(2026, 3, 2)));
    }
}
