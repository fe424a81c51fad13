//! Availability resolution.
//!
//! Decides whether a worker may work a given date and shift by layering,
//! in precedence order: employment status, leave status, explicit date
//! overrides, and the recurring weekly work pattern.
//!
//! # Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use shift_roster::availability::resolve_availability;
//! use shift_roster::models::{ShiftType, Worker, WorkPattern};
//!
//! let worker = Worker::full_time("W1");
//! let pattern = WorkPattern::new(vec![1, 2, 3, 4, 5]);
//! let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
//!
//! let decision = resolve_availability(&worker, Some(&pattern), &[], "C1", date, ShiftType::Day, 1.0);
//! assert!(decision.allowed);
//! ```
//!
//! Every function here is pure and total: given well-formed input it always
//! returns a decision, never an error. "Denied" is data, not a failure.

mod pattern;
mod resolver;

pub use pattern::evaluate_pattern;
pub use resolver::resolve_availability;

use serde::{Deserialize, Serialize};

/// Machine-readable reason attached to an availability decision.
///
/// Wire strings are stable; downstream tooling matches on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityReason {
    /// No rule restricts this date.
    Allowed,
    /// Worker is not currently employed.
    Inactive,
    /// Worker is on FMLA leave.
    OnFmla,
    /// A force-off override matched the date and shift.
    OverrideForceOff,
    /// A force-on override matched the date and shift.
    OverrideForceOn,
    /// The weekday is in the pattern's off-days.
    BlockedOffsDow,
    /// The weekend is an off weekend of the every-other-weekend rotation.
    BlockedEveryOtherWeekend,
    /// The weekday is outside a hard pattern's work days.
    BlockedOutsideWorksDowHard,
    /// The weekday is outside a soft pattern's work days (allowed, penalized).
    SoftOutsideWorksDow,
}

impl AvailabilityReason {
    /// Stable wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            AvailabilityReason::Allowed => "allowed",
            AvailabilityReason::Inactive => "inactive",
            AvailabilityReason::OnFmla => "on_fmla",
            AvailabilityReason::OverrideForceOff => "override_force_off",
            AvailabilityReason::OverrideForceOn => "override_force_on",
            AvailabilityReason::BlockedOffsDow => "blocked_offs_dow",
            AvailabilityReason::BlockedEveryOtherWeekend => "blocked_every_other_weekend",
            AvailabilityReason::BlockedOutsideWorksDowHard => "blocked_outside_works_dow_hard",
            AvailabilityReason::SoftOutsideWorksDow => "soft_outside_works_dow",
        }
    }
}

/// The outcome of an availability check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityDecision {
    /// Whether the worker may work the date/shift.
    pub allowed: bool,
    /// Why.
    pub reason: AvailabilityReason,
    /// Soft penalty (zero unless a soft pattern permitted the date).
    pub penalty: f64,
    /// Note carried over from a matching override, if any.
    pub note: Option<String>,
}

impl AvailabilityDecision {
    /// An unconditional allow.
    pub fn allowed() -> Self {
        Self {
            allowed: true,
            reason: AvailabilityReason::Allowed,
            penalty: 0.0,
            note: None,
        }
    }

    /// A denial with the given reason.
    pub fn denied(reason: AvailabilityReason) -> Self {
        Self {
            allowed: false,
            reason,
            penalty: 0.0,
            note: None,
        }
    }

    /// A penalized allow (soft pattern deviation).
    pub fn allowed_with_penalty(reason: AvailabilityReason, penalty: f64) -> Self {
        Self {
            allowed: true,
            reason,
            penalty,
            note: None,
        }
    }

    /// Attaches an override note.
    pub fn with_note(mut self, note: Option<String>) -> Self {
        self.note = note;
        self
    }
}
