//! Cycle-wide roster generation.
//!
//! Drives the selector over a cycle's slot grid: precomputes per-worker
//! unavailable dates through the availability resolver, seeds the working
//! context from existing assignments, then fills each slot up to the
//! policy's minimum coverage, threading one rotation cursor per shift
//! type. The generator only proposes assignments; persisting them is the
//! caller's job.

use std::collections::HashMap;

use log::debug;

use crate::availability::resolve_availability;
use crate::models::{
    AvailabilityOverride, ScheduleCycle, ShiftAssignment, ShiftType, Worker, WorkPattern,
};
use crate::policy::RosterPolicy;
use crate::selection::{select_next, SelectionContext};

/// Inputs for one generation run.
#[derive(Debug, Clone)]
pub struct GenerationRequest<'a> {
    /// The cycle to fill.
    pub cycle: &'a ScheduleCycle,
    /// Worker roster (candidates are drawn per primary shift).
    pub workers: &'a [Worker],
    /// Recurring patterns by worker id; absent means unconstrained.
    pub patterns: &'a HashMap<String, WorkPattern>,
    /// Overrides for the cycle.
    pub overrides: &'a [AvailabilityOverride],
    /// Assignments already on the books for the cycle.
    pub existing: &'a [ShiftAssignment],
}

/// Fills uncovered slots of a cycle by round-robin selection.
#[derive(Debug, Clone, Default)]
pub struct RosterGenerator {
    policy: RosterPolicy,
}

impl RosterGenerator {
    /// Creates a generator with the default policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the policy.
    pub fn with_policy(mut self, policy: RosterPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Proposes assignments to bring every slot up to minimum coverage.
    ///
    /// Deterministic: identical inputs yield identical proposals. Slots
    /// that cannot be filled are left short and surface later through the
    /// coverage validator.
    pub fn generate(&self, request: &GenerationRequest<'_>) -> Vec<ShiftAssignment> {
        let cycle = request.cycle;

        let day_candidates: Vec<Worker> = request
            .workers
            .iter()
            .filter(|w| w.primary_shift == ShiftType::Day)
            .cloned()
            .collect();
        let night_candidates: Vec<Worker> = request
            .workers
            .iter()
            .filter(|w| w.primary_shift == ShiftType::Night)
            .cloned()
            .collect();

        let mut ctx = self.seed_context(request);

        // Coverage already on the books, per slot.
        let mut coverage: HashMap<(chrono::NaiveDate, ShiftType), u32> = HashMap::new();
        for a in request.existing {
            if a.cycle_id == cycle.id && a.counts_toward_coverage() {
                *coverage.entry((a.date, a.shift)).or_insert(0) += 1;
            }
        }

        let mut proposals = Vec::new();
        let mut day_cursor = 0usize;
        let mut night_cursor = 0usize;

        for slot in cycle.slots() {
            let (candidates, cursor) = match slot.shift {
                ShiftType::Day => (&day_candidates, &mut day_cursor),
                ShiftType::Night => (&night_candidates, &mut night_cursor),
            };

            let mut covered = coverage
                .get(&(slot.date, slot.shift))
                .copied()
                .unwrap_or(0);

            while covered < self.policy.min_coverage {
                let selection = select_next(candidates, *cursor, slot.date, &ctx);
                *cursor = selection.next_cursor;

                let Some(idx) = selection.chosen else {
                    debug!(
                        "no eligible worker for {} (coverage {covered}/{})",
                        slot.key(),
                        self.policy.min_coverage
                    );
                    break;
                };

                let worker = &candidates[idx];
                ctx.record_assignment(&worker.id, slot.date);
                proposals.push(ShiftAssignment::new(
                    cycle.id.clone(),
                    slot.date,
                    slot.shift,
                    worker.id.clone(),
                ));
                covered += 1;
                debug!("assigned {} to {}", worker.id, slot.key());
            }
        }

        proposals
    }

    /// Builds the selection context: unavailable dates resolved per worker
    /// (against their primary shift) plus existing coverage-counting
    /// assignments.
    fn seed_context(&self, request: &GenerationRequest<'_>) -> SelectionContext {
        let cycle = request.cycle;
        let mut ctx = SelectionContext::new();

        for worker in request.workers {
            let pattern = request.patterns.get(&worker.id);
            let unavailable = cycle.dates().filter(|&date| {
                !resolve_availability(
                    worker,
                    pattern,
                    request.overrides,
                    &cycle.id,
                    date,
                    worker.primary_shift,
                    self.policy.soft_penalty,
                )
                .allowed
            });
            ctx = ctx.with_unavailable_dates(worker.id.clone(), unavailable);
        }

        for a in request.existing {
            if a.cycle_id == cycle.id && a.counts_toward_coverage() {
                ctx.record_assignment(&a.worker_id, a.date);
            }
        }

        ctx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::models::{
        week_start, OverrideAction, OverrideScope, OverrideSource, PatternMode,
    };

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn two_week_cycle() -> ScheduleCycle {
        // 2026-03-01 is a Sunday: two exact calendar weeks.
        ScheduleCycle::new("C1", date(2026, 3, 1), date(2026, 3, 14))
    }

    fn generate(
        cycle: &ScheduleCycle,
        workers: &[Worker],
        patterns: &HashMap<String, WorkPattern>,
        overrides: &[AvailabilityOverride],
        existing: &[ShiftAssignment],
        policy: RosterPolicy,
    ) -> Vec<ShiftAssignment> {
        let request = GenerationRequest {
            cycle,
            workers,
            patterns,
            overrides,
            existing,
        };
        RosterGenerator::new().with_policy(policy).generate(&request)
    }

    #[test]
    fn test_single_worker_weekday_pattern_end_to_end() {
        let cycle = two_week_cycle();
        let workers = vec![Worker::full_time("W1").with_weekly_limit(3)];
        let mut patterns = HashMap::new();
        patterns.insert(
            "W1".to_string(),
            WorkPattern::new(vec![1, 2, 3, 4, 5]).with_mode(PatternMode::Hard),
        );

        let proposals = generate(
            &cycle,
            &workers,
            &patterns,
            &[],
            &[],
            RosterPolicy::new().with_coverage(1, 4),
        );

        // Never on the weekend or the leading Sunday.
        for a in &proposals {
            assert_ne!(a.date, date(2026, 3, 1));
            assert_ne!(a.date, date(2026, 3, 7));
            assert_ne!(a.date, date(2026, 3, 8));
        }

        // Never more than 3 worked dates in either calendar week.
        for sunday in [date(2026, 3, 1), date(2026, 3, 8)] {
            let worked: std::collections::BTreeSet<NaiveDate> = proposals
                .iter()
                .filter(|a| week_start(a.date) == sunday)
                .map(|a| a.date)
                .collect();
            assert!(worked.len() <= 3, "week of {sunday}: {worked:?}");
        }
    }

    #[test]
    fn test_fairness_across_equal_roster() {
        let cycle = two_week_cycle();
        let workers: Vec<Worker> = (0..4)
            .map(|i| Worker::full_time(format!("W{i}")).with_weekly_limit(5))
            .collect();
        let patterns = HashMap::new();

        let proposals = generate(
            &cycle,
            &workers,
            &patterns,
            &[],
            &[],
            RosterPolicy::new().with_coverage(2, 4),
        );

        // Per week, no worker's worked-day count exceeds another's by more
        // than one.
        for sunday in [date(2026, 3, 1), date(2026, 3, 8)] {
            let mut counts: HashMap<&str, usize> = HashMap::new();
            for w in &workers {
                counts.insert(&w.id, 0);
            }
            for a in &proposals {
                if week_start(a.date) == sunday {
                    *counts.get_mut(a.worker_id.as_str()).unwrap() += 1;
                }
            }
            let max = counts.values().max().unwrap();
            let min = counts.values().min().unwrap();
            assert!(max - min <= 1, "week of {sunday}: {counts:?}");
        }
    }

    #[test]
    fn test_deterministic_generation() {
        let cycle = two_week_cycle();
        let workers: Vec<Worker> = (0..3).map(|i| Worker::full_time(format!("W{i}"))).collect();
        let patterns = HashMap::new();

        let run = || {
            generate(
                &cycle,
                &workers,
                &patterns,
                &[],
                &[],
                RosterPolicy::default(),
            )
        };
        let a: Vec<(NaiveDate, ShiftType, String)> = run()
            .into_iter()
            .map(|x| (x.date, x.shift, x.worker_id))
            .collect();
        let b: Vec<(NaiveDate, ShiftType, String)> = run()
            .into_iter()
            .map(|x| (x.date, x.shift, x.worker_id))
            .collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_existing_assignments_reduce_demand() {
        let cycle = ScheduleCycle::new("C1", date(2026, 3, 2), date(2026, 3, 2));
        let workers = vec![Worker::full_time("W1"), Worker::full_time("W2")];
        let patterns = HashMap::new();
        let existing = vec![ShiftAssignment::new(
            "C1",
            date(2026, 3, 2),
            ShiftType::Day,
            "W1",
        )];

        let proposals = generate(
            &cycle,
            &workers,
            &patterns,
            &[],
            &existing,
            RosterPolicy::new().with_coverage(2, 4),
        );

        // Day slot needs one more body, and W1 is already on that date.
        let day: Vec<&ShiftAssignment> = proposals
            .iter()
            .filter(|a| a.shift == ShiftType::Day)
            .collect();
        assert_eq!(day.len(), 1);
        assert_eq!(day[0].worker_id, "W2");
    }

    #[test]
    fn test_force_off_override_respected() {
        let cycle = ScheduleCycle::new("C1", date(2026, 3, 2), date(2026, 3, 2));
        let workers = vec![Worker::full_time("W1"), Worker::full_time("W2")];
        let patterns = HashMap::new();
        let overrides = vec![AvailabilityOverride::new(
            "W1",
            "C1",
            date(2026, 3, 2),
            OverrideScope::Both,
            OverrideAction::ForceOff,
            OverrideSource::Manager,
        )];

        let proposals = generate(
            &cycle,
            &workers,
            &patterns,
            &overrides,
            &[],
            RosterPolicy::new().with_coverage(2, 4),
        );

        assert!(proposals.iter().all(|a| a.worker_id != "W1"));
    }

    #[test]
    fn test_night_workers_fill_night_slots() {
        let cycle = ScheduleCycle::new("C1", date(2026, 3, 2), date(2026, 3, 3));
        let workers = vec![
            Worker::full_time("D1"),
            Worker::full_time("N1").with_primary_shift(ShiftType::Night),
        ];
        let patterns = HashMap::new();

        let proposals = generate(
            &cycle,
            &workers,
            &patterns,
            &[],
            &[],
            RosterPolicy::new().with_coverage(1, 4),
        );

        for a in &proposals {
            match a.shift {
                ShiftType::Day => assert_eq!(a.worker_id, "D1"),
                ShiftType::Night => assert_eq!(a.worker_id, "N1"),
            }
        }
    }

    #[test]
    fn test_unfillable_slot_left_short() {
        let cycle = ScheduleCycle::new("C1", date(2026, 3, 2), date(2026, 3, 2));
        let workers = vec![Worker::full_time("W1")];
        let patterns = HashMap::new();

        let proposals = generate(
            &cycle,
            &workers,
            &patterns,
            &[],
            &[],
            RosterPolicy::new().with_coverage(2, 4),
        );

        // One day-shift body is all the roster can give; the night slot
        // stays empty.
        assert_eq!(proposals.len(), 1);
        assert_eq!(proposals[0].shift, ShiftType::Day);
    }
}
