//! Work pattern evaluation.
//!
//! Checks run in precedence order: off-days are absolute and evaluated
//! first, then the every-other-weekend rotation, then `works_dows`
//! membership under the pattern's mode. Pure function, no side effects.

use chrono::{Datelike, NaiveDate, Weekday};

use super::{AvailabilityDecision, AvailabilityReason};
use crate::models::{PatternMode, WorkPattern};

/// Decides whether a pattern permits a date.
///
/// `soft_penalty` is the penalty attached when a soft pattern permits a
/// date outside its work days (see [`crate::policy::SOFT_PATTERN_PENALTY`]).
pub fn evaluate_pattern(
    pattern: &WorkPattern,
    date: NaiveDate,
    soft_penalty: f64,
) -> AvailabilityDecision {
    let dow = date.weekday().num_days_from_sunday() as u8;

    // Off-days win over everything, including works_dows membership.
    if pattern.offs_dow(dow) {
        return AvailabilityDecision::denied(AvailabilityReason::BlockedOffsDow);
    }

    if let Some(rotation) = &pattern.weekend_rotation {
        let is_weekend = matches!(date.weekday(), Weekday::Sat | Weekday::Sun);
        if is_weekend && !rotation.works_weekend(date) {
            return AvailabilityDecision::denied(AvailabilityReason::BlockedEveryOtherWeekend);
        }
    }

    if !pattern.works_dow(dow) {
        return match pattern.mode {
            PatternMode::Hard => {
                AvailabilityDecision::denied(AvailabilityReason::BlockedOutsideWorksDowHard)
            }
            PatternMode::Soft => AvailabilityDecision::allowed_with_penalty(
                AvailabilityReason::SoftOutsideWorksDow,
                soft_penalty,
            ),
        };
    }

    AvailabilityDecision::allowed()
}
