//! Scheduling policy constants.
//!
//! Coverage bounds per shift slot, default weekly work-day limits by
//! employment category, and the penalty applied to soft work-pattern
//! deviations. Values live on [`RosterPolicy`] so callers can override
//! them per deployment; the constants are the shipped defaults.

use serde::{Deserialize, Serialize};

/// Default weekly work-day limit for full-time workers.
pub const DEFAULT_WEEKLY_LIMIT_FULL_TIME: u8 = 5;
/// Default weekly work-day limit for part-time workers.
pub const DEFAULT_WEEKLY_LIMIT_PART_TIME: u8 = 3;
/// Default weekly work-day limit for per-diem workers.
pub const DEFAULT_WEEKLY_LIMIT_PER_DIEM: u8 = 2;

/// Minimum coverage-counting assignments per shift slot.
pub const MIN_COVERAGE_PER_SHIFT: u32 = 2;
/// Maximum coverage-counting assignments per shift slot.
pub const MAX_COVERAGE_PER_SHIFT: u32 = 4;

/// Penalty applied when a soft work pattern permits a date outside
/// the worker's normal weekdays.
pub const SOFT_PATTERN_PENALTY: f64 = 1.0;

/// Scheduling policy for a deployment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterPolicy {
    /// Minimum coverage-counting assignments per slot.
    pub min_coverage: u32,
    /// Maximum coverage-counting assignments per slot.
    pub max_coverage: u32,
    /// Penalty for soft-pattern deviations.
    pub soft_penalty: f64,
}

impl Default for RosterPolicy {
    fn default() -> Self {
        Self {
            min_coverage: MIN_COVERAGE_PER_SHIFT,
            max_coverage: MAX_COVERAGE_PER_SHIFT,
            soft_penalty: SOFT_PATTERN_PENALTY,
        }
    }
}

impl RosterPolicy {
    /// Creates the default policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the coverage bounds.
    pub fn with_coverage(mut self, min: u32, max: u32) -> Self {
        self.min_coverage = min;
        self.max_coverage = max;
        self
    }

    /// Sets the soft-pattern penalty.
    pub fn with_soft_penalty(mut self, penalty: f64) -> Self {
        self.soft_penalty = penalty;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let p = RosterPolicy::default();
        assert_eq!(p.min_coverage, 2);
        assert_eq!(p.max_coverage, 4);
        assert!((p.soft_penalty - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_policy_builder() {
        let p = RosterPolicy::new().with_coverage(1, 6).with_soft_penalty(2.5);
        assert_eq!(p.min_coverage, 1);
        assert_eq!(p.max_coverage, 6);
        assert!((p.soft_penalty - 2.5).abs() < 1e-10);
    }
}
