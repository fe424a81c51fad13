//! The round-robin slot selector.

use chrono::{Datelike, NaiveDate};

use super::SelectionContext;
use crate::models::{EmploymentCategory, Worker};

/// Result of one selection call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Index of the chosen candidate, or `None` if nobody qualifies.
    pub chosen: Option<usize>,
    /// Cursor to thread into the next call: the index immediately after
    /// the chosen candidate (wrapped), or the incoming cursor when no
    /// candidate qualified.
    pub next_cursor: usize,
}

/// Picks the next worker for one (date, shift) slot.
///
/// Scans `candidates` starting at `cursor`, wrapping around once so every
/// candidate is visited exactly once. A candidate is skipped when they:
///
/// - already hold an assignment on `date`;
/// - are unavailable on `date` (per the precomputed sets in `ctx`);
/// - are per-diem with a non-empty preferred-weekday list that excludes
///   the date's weekday (per-diem workers opt in by weekday);
/// - have reached their weekly limit without already working `date`.
///
/// Among the remaining candidates the pick prefers, in order: a weekday-
/// preference match, a lower weekly worked-day count, then proximity to
/// the cursor in scan order. Deterministic for identical inputs.
pub fn select_next(
    candidates: &[Worker],
    cursor: usize,
    date: NaiveDate,
    ctx: &SelectionContext,
) -> Selection {
    if candidates.is_empty() {
        return Selection {
            chosen: None,
            next_cursor: cursor,
        };
    }

    let n = candidates.len();
    let cursor = cursor % n;
    let dow = date.weekday().num_days_from_sunday() as u8;

    let mut best: Option<(bool, usize, usize, usize)> = None; // (not-preferred, weekly, scan_pos, idx)

    for scan_pos in 0..n {
        let idx = (cursor + scan_pos) % n;
        let worker = &candidates[idx];

        if ctx.is_assigned(&worker.id, date) {
            continue;
        }
        if ctx.is_unavailable(&worker.id, date) {
            continue;
        }
        if worker.category == EmploymentCategory::PerDiem
            && !worker.preferred_dows.is_empty()
            && !worker.prefers_dow(dow)
        {
            continue;
        }

        let worked = ctx.worked_dates(&worker.id, date);
        let weekly = worked.len();
        // A date already in the week's worked set does not raise the count,
        // so the limit only gates dates that would add a new worked day.
        if !worked.contains(&date) && weekly >= worker.weekly_limit as usize {
            continue;
        }

        let key = (!worker.prefers_dow(dow), weekly, scan_pos, idx);
        if best.map_or(true, |b| key < b) {
            best = Some(key);
        }
    }

    match best {
        Some((_, _, _, idx)) => Selection {
            chosen: Some(idx),
            next_cursor: (idx + 1) % n,
        },
        None => Selection {
            chosen: None,
            next_cursor: cursor,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn monday() -> NaiveDate {
        date(2026, 3, 2)
    }

    fn roster(n: usize) -> Vec<Worker> {
        (0..n)
            .map(|i| Worker::full_time(format!("W{i}")).with_name(format!("Worker {i}")))
            .collect()
    }

    #[test]
    fn test_round_robin_advances_cursor() {
        let workers = roster(3);
        let ctx = SelectionContext::new();

        let s0 = select_next(&workers, 0, monday(), &ctx);
        assert_eq!(s0.chosen, Some(0));
        assert_eq!(s0.next_cursor, 1);

        let s1 = select_next(&workers, s0.next_cursor, date(2026, 3, 3), &ctx);
        assert_eq!(s1.chosen, Some(1));
        assert_eq!(s1.next_cursor, 2);

        let s2 = select_next(&workers, s1.next_cursor, date(2026, 3, 4), &ctx);
        assert_eq!(s2.chosen, Some(2));
        assert_eq!(s2.next_cursor, 0);
    }

    #[test]
    fn test_skips_already_assigned_on_date() {
        let workers = roster(2);
        let mut ctx = SelectionContext::new();
        ctx.record_assignment("W0", monday());

        let s = select_next(&workers, 0, monday(), &ctx);
        assert_eq!(s.chosen, Some(1));
        assert_eq!(s.next_cursor, 0);
    }

    #[test]
    fn test_skips_unavailable() {
        let workers = roster(2);
        let ctx = SelectionContext::new().with_unavailable_dates("W0", [monday()]);

        let s = select_next(&workers, 0, monday(), &ctx);
        assert_eq!(s.chosen, Some(1));
    }

    #[test]
    fn test_none_when_no_candidate_qualifies() {
        let workers = roster(2);
        let ctx = SelectionContext::new()
            .with_unavailable_dates("W0", [monday()])
            .with_unavailable_dates("W1", [monday()]);

        let s = select_next(&workers, 1, monday(), &ctx);
        assert_eq!(s.chosen, None);
        // Cursor is unchanged so the next slot starts at the same point.
        assert_eq!(s.next_cursor, 1);
    }

    #[test]
    fn test_empty_candidate_list() {
        let ctx = SelectionContext::new();
        let s = select_next(&[], 5, monday(), &ctx);
        assert_eq!(s.chosen, None);
        assert_eq!(s.next_cursor, 5);
    }

    #[test]
    fn test_per_diem_opt_in_by_weekday() {
        // Monday is dow 1; the per-diem worker only opts into Wednesdays.
        let workers = vec![
            Worker::per_diem("PD").with_preferred_dows(vec![3]),
            Worker::full_time("FT"),
        ];
        let ctx = SelectionContext::new();

        let s = select_next(&workers, 0, monday(), &ctx);
        assert_eq!(s.chosen, Some(1));

        // On a Wednesday the per-diem worker is back in rotation.
        let wed = date(2026, 3, 4);
        let s = select_next(&workers, 0, wed, &ctx);
        assert_eq!(s.chosen, Some(0));
    }

    #[test]
    fn test_per_diem_without_preferences_not_filtered() {
        let workers = vec![Worker::per_diem("PD")];
        let ctx = SelectionContext::new();
        let s = select_next(&workers, 0, monday(), &ctx);
        assert_eq!(s.chosen, Some(0));
    }

    #[test]
    fn test_weekly_limit_blocks_new_dates() {
        let workers = vec![Worker::full_time("W0").with_weekly_limit(2)];
        let mut ctx = SelectionContext::new();
        ctx.record_assignment("W0", date(2026, 3, 2));
        ctx.record_assignment("W0", date(2026, 3, 3));

        // A third distinct date in the same week is over the limit.
        let s = select_next(&workers, 0, date(2026, 3, 4), &ctx);
        assert_eq!(s.chosen, None);

        // A new week resets the count.
        let s = select_next(&workers, 0, date(2026, 3, 9), &ctx);
        assert_eq!(s.chosen, Some(0));
    }

    #[test]
    fn test_limit_refuses_new_date_in_full_week() {
        let workers = vec![Worker::full_time("W0").with_weekly_limit(1)];
        let ctx = SelectionContext::new().with_assignment("W0", date(2026, 3, 3));

        let s = select_next(&workers, 0, date(2026, 3, 4), &ctx);
        assert_eq!(s.chosen, None);
    }

    #[test]
    fn test_prefers_lower_weekly_load() {
        let workers = roster(2);
        let mut ctx = SelectionContext::new();
        // W0 has worked twice this week, W1 once.
        ctx.record_assignment("W0", date(2026, 3, 2));
        ctx.record_assignment("W0", date(2026, 3, 3));
        ctx.record_assignment("W1", date(2026, 3, 2));

        // Cursor points at W0, but W1 has the lighter week.
        let s = select_next(&workers, 0, date(2026, 3, 4), &ctx);
        assert_eq!(s.chosen, Some(1));
        assert_eq!(s.next_cursor, 0);
    }

    #[test]
    fn test_weekday_preference_beats_load() {
        // 2026-03-04 is a Wednesday (dow 3).
        let workers = vec![
            Worker::full_time("W0"),
            Worker::full_time("W1").with_preferred_dows(vec![3]),
        ];
        let mut ctx = SelectionContext::new();
        // W1 carries the heavier week, but preference match ranks first.
        ctx.record_assignment("W1", date(2026, 3, 2));

        let s = select_next(&workers, 0, date(2026, 3, 4), &ctx);
        assert_eq!(s.chosen, Some(1));
    }

    #[test]
    fn test_scan_order_breaks_ties() {
        let workers = roster(3);
        let ctx = SelectionContext::new();
        // All equal: the candidate at the cursor wins.
        let s = select_next(&workers, 2, monday(), &ctx);
        assert_eq!(s.chosen, Some(2));
        assert_eq!(s.next_cursor, 0);
    }

    #[test]
    fn test_deterministic() {
        let workers = roster(4);
        let mut ctx = SelectionContext::new();
        ctx.record_assignment("W2", date(2026, 3, 2));
        let ctx = ctx.with_unavailable_dates("W1", [date(2026, 3, 3)]);

        let a = select_next(&workers, 3, date(2026, 3, 3), &ctx);
        let b = select_next(&workers, 3, date(2026, 3, 3), &ctx);
        assert_eq!(a, b);
    }

    #[test]
    fn test_cursor_normalized_when_out_of_range() {
        let workers = roster(2);
        let ctx = SelectionContext::new();
        let s = select_next(&workers, 7, monday(), &ctx);
        // 7 % 2 == 1: scan starts at W1.
        assert_eq!(s.chosen, Some(1));
    }
}
