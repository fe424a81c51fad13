//! Availability resolver.
//!
//! Layers employment status, leave status, date overrides, and the work
//! pattern into one decision. Short-circuit order:
//!
//! 1. Inactive worker → denied.
//! 2. On leave → denied.
//! 3. Matching override → authoritative; force-on bypasses the pattern
//!    entirely. An override whose scope names the requested shift exactly
//!    beats a `both`-scoped one; at equal specificity force-off wins.
//! 4. No pattern → allowed.
//! 5. Otherwise the pattern evaluator's verdict is returned unchanged.

use chrono::NaiveDate;

use super::{evaluate_pattern, AvailabilityDecision, AvailabilityReason};
use crate::models::{AvailabilityOverride, OverrideAction, ShiftType, Worker, WorkPattern};

/// Resolves whether a worker may work a date/shift.
///
/// `shift` is a concrete shift type, never "both"; `overrides` is the
/// worker's override set for the cycle (extra records are filtered out).
/// Pure and stateless: callable once per (worker, date, shift) with no
/// memory of prior calls.
pub fn resolve_availability(
    worker: &Worker,
    pattern: Option<&WorkPattern>,
    overrides: &[AvailabilityOverride],
    cycle_id: &str,
    date: NaiveDate,
    shift: ShiftType,
    soft_penalty: f64,
) -> AvailabilityDecision {
    if !worker.active {
        return AvailabilityDecision::denied(AvailabilityReason::Inactive);
    }
    if worker.on_leave {
        return AvailabilityDecision::denied(AvailabilityReason::OnFmla);
    }

    if let Some(ov) = best_override(overrides, &worker.id, cycle_id, date, shift) {
        return match ov.action {
            OverrideAction::ForceOff => {
                AvailabilityDecision::denied(AvailabilityReason::OverrideForceOff)
                    .with_note(ov.note.clone())
            }
            OverrideAction::ForceOn => AvailabilityDecision {
                allowed: true,
                reason: AvailabilityReason::OverrideForceOn,
                penalty: 0.0,
                note: ov.note.clone(),
            },
        };
    }

    match pattern {
        None => AvailabilityDecision::allowed(),
        Some(p) => evaluate_pattern(p, date, soft_penalty),
    }
}

/// Picks the authoritative override among those matching the lookup.
///
/// Exact-scope matches beat `both`-scoped matches; within a specificity
/// tier, force-off beats force-on.
fn best_override<'a>(
    overrides: &'a [AvailabilityOverride],
    worker_id: &str,
    cycle_id: &str,
    date: NaiveDate,
    shift: ShiftType,
) -> Option<&'a AvailabilityOverride> {
    let matching: Vec<&AvailabilityOverride> = overrides
        .iter()
        .filter(|ov| ov.matches(worker_id, cycle_id, date, shift))
        .collect();

    for exact in [true, false] {
        let tier = matching.iter().filter(|ov| ov.scope.is_exact_for(shift) == exact);
        let mut force_on = None;
        for ov in tier {
            if ov.action == OverrideAction::ForceOff {
                return Some(ov);
            }
            force_on.get_or_insert(*ov);
        }
        if force_on.is_some() {
            return force_on;
        }
    }
    None
}
