//! Weekly worked-day summary.
//!
//! Compares each worker's distinct worked dates per Sunday–Saturday week
//! against their personal weekly requirement. Near cycle boundaries a
//! week may be only partially inside the cycle, so the requirement
//! shrinks to `min(weekly_limit, days_of_week_inside_cycle)`. The counts
//! feed the publish gate: a cycle should not publish while worker-weeks
//! sit under or over requirement, absent an explicit manager override
//! (enforced by the external workflow, not here).

use std::collections::{HashMap, HashSet};

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::{ScheduleCycle, ShiftAssignment, Worker};

/// Aggregate weekly-rule result for a cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySummary {
    /// Worker-weeks below the required worked-day count.
    pub under_count: u32,
    /// Worker-weeks above the required worked-day count.
    pub over_count: u32,
}

impl WeeklySummary {
    /// Total worker-week violations.
    pub fn violations(&self) -> u32 {
        self.under_count + self.over_count
    }

    /// Whether the weekly rules clear the publish gate.
    pub fn is_publishable(&self) -> bool {
        self.violations() == 0
    }
}

/// Summarizes worked-day counts per worker-week across a cycle.
///
/// Only coverage-counting assignments of the cycle are considered, and a
/// date worked on both shifts counts once. Inactive and on-leave workers
/// are not held to a weekly requirement.
pub fn summarize_weeks(
    cycle: &ScheduleCycle,
    workers: &[Worker],
    assignments: &[ShiftAssignment],
) -> WeeklySummary {
    // Distinct worked dates per worker.
    let mut worked: HashMap<&str, HashSet<NaiveDate>> = HashMap::new();
    for a in assignments {
        if a.cycle_id == cycle.id && a.counts_toward_coverage() {
            worked.entry(a.worker_id.as_str()).or_default().insert(a.date);
        }
    }

    let week_starts = cycle.week_starts();
    let mut summary = WeeklySummary::default();

    for worker in workers {
        if !worker.active || worker.on_leave {
            continue;
        }
        let dates = worked.get(worker.id.as_str());

        for &sunday in &week_starts {
            let required = u32::from(worker.weekly_limit).min(cycle.days_of_week_in_cycle(sunday));
            let week_end = sunday + Days::new(6);
            let count = dates.map_or(0, |d| {
                d.iter().filter(|&&x| x >= sunday && x <= week_end).count()
            }) as u32;

            if count < required {
                summary.under_count += 1;
            } else if count > required {
                summary.over_count += 1;
            }
        }
    }

    summary
}
