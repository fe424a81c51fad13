//! Coverage and leadership validation.
//!
//! Scans a cycle's full slot grid against its assignments and reports,
//! per slot: under-coverage, over-coverage, missing lead, multiple leads,
//! and lead-ineligible leads. Violations are data, not errors — the
//! report carries aggregate counts for the publish gate and an ordered
//! per-slot issue list for "jump to slot" navigation.
//!
//! Coverage counts only `scheduled`/`on_call` assignments. Lead-role
//! bookkeeping (`multiple_leads`, `ineligible_lead`) examines lead
//! assignments of any status: a sick ineligible lead is still a data
//! problem worth surfacing. A slot whose only lead is ineligible flags
//! both `missing_lead` and `ineligible_lead`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{ScheduleCycle, ShiftAssignment, ShiftRole, Slot, Worker};
use crate::policy::RosterPolicy;

/// Per-slot violation kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotViolation {
    /// Fewer coverage-counting assignments than the policy minimum.
    UnderCoverage,
    /// More coverage-counting assignments than the policy maximum.
    OverCoverage,
    /// No lead assignment, or no lead-eligible worker among the slot's
    /// coverage-counting assignments.
    MissingLead,
    /// More than one lead assignment.
    MultipleLeads,
    /// A lead assignment held by a worker who is not lead-eligible.
    IneligibleLead,
}

impl SlotViolation {
    /// Stable wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotViolation::UnderCoverage => "under_coverage",
            SlotViolation::OverCoverage => "over_coverage",
            SlotViolation::MissingLead => "missing_lead",
            SlotViolation::MultipleLeads => "multiple_leads",
            SlotViolation::IneligibleLead => "ineligible_lead",
        }
    }
}

/// One slot's problems, for navigation and display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotIssue {
    /// The slot.
    pub slot: Slot,
    /// Stable navigation key, `"<ISO-date>:<day|night>"`.
    pub slot_key: String,
    /// Violations present in this slot.
    pub reasons: Vec<SlotViolation>,
    /// Coverage-counting assignment count.
    pub active_coverage: u32,
    /// Name of the first assigned lead, if any.
    pub lead_name: Option<String>,
}

/// Aggregate validation report for a cycle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoverageReport {
    /// Slots below minimum coverage.
    pub under_coverage: u32,
    /// Slots above maximum coverage.
    pub over_coverage: u32,
    /// Slots without a usable lead.
    pub missing_lead: u32,
    /// Slots with more than one lead.
    pub multiple_leads: u32,
    /// Slots with a lead-ineligible lead.
    pub ineligible_lead: u32,
    /// Sum of all flags across all slots (a slot with two flags counts
    /// twice).
    pub total_violations: u32,
    /// Per-slot issues in slot-grid order. Clean slots are omitted.
    pub issues: Vec<SlotIssue>,
}

impl CoverageReport {
    /// Whether the cycle has no violations (publish-gate query).
    pub fn is_clean(&self) -> bool {
        self.total_violations == 0
    }
}

/// Validates a cycle's slot grid against its assignments.
///
/// `workers` supplies lead-eligibility and display names; assignments
/// referencing unknown workers are treated as not lead-eligible.
pub fn validate_cycle(
    cycle: &ScheduleCycle,
    workers: &[Worker],
    assignments: &[ShiftAssignment],
    policy: &RosterPolicy,
) -> CoverageReport {
    let roster: HashMap<&str, &Worker> = workers.iter().map(|w| (w.id.as_str(), w)).collect();

    let mut by_slot: HashMap<Slot, Vec<&ShiftAssignment>> = HashMap::new();
    for a in assignments {
        if a.cycle_id == cycle.id {
            by_slot
                .entry(Slot::new(a.date, a.shift))
                .or_default()
                .push(a);
        }
    }

    let mut report = CoverageReport::default();
    let lead_eligible =
        |a: &ShiftAssignment| roster.get(a.worker_id.as_str()).is_some_and(|w| w.lead_eligible);

    for slot in cycle.slots() {
        let entries: &[&ShiftAssignment] = by_slot.get(&slot).map_or(&[], Vec::as_slice);

        let active_coverage =
            entries.iter().filter(|a| a.counts_toward_coverage()).count() as u32;
        let leads: Vec<&&ShiftAssignment> =
            entries.iter().filter(|a| a.role == ShiftRole::Lead).collect();

        let mut reasons = Vec::new();

        if active_coverage < policy.min_coverage {
            reasons.push(SlotViolation::UnderCoverage);
            report.under_coverage += 1;
        }
        if active_coverage > policy.max_coverage {
            reasons.push(SlotViolation::OverCoverage);
            report.over_coverage += 1;
        }

        let has_eligible_coverage = entries
            .iter()
            .any(|a| a.counts_toward_coverage() && lead_eligible(a));
        if leads.is_empty() || !has_eligible_coverage {
            reasons.push(SlotViolation::MissingLead);
            report.missing_lead += 1;
        }
        if leads.len() > 1 {
            reasons.push(SlotViolation::MultipleLeads);
            report.multiple_leads += 1;
        }
        if leads.iter().any(|a| !lead_eligible(a)) {
            reasons.push(SlotViolation::IneligibleLead);
            report.ineligible_lead += 1;
        }

        if !reasons.is_empty() {
            report.total_violations += reasons.len() as u32;
            let lead_name = leads.first().and_then(|a| {
                roster
                    .get(a.worker_id.as_str())
                    .map(|w| w.name.clone())
            });
            report.issues.push(SlotIssue {
                slot,
                slot_key: slot.key(),
                reasons,
                active_coverage,
                lead_name,
            });
        }
    }

    report
}
