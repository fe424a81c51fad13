//! Recurring weekly work pattern.
//!
//! A pattern combines positive weekdays (`works_dows`), negative weekdays
//! (`offs_dows`), an enforcement mode, and an optional every-other-weekend
//! rotation. Off-days always win: a weekday listed in `offs_dows` is
//! forbidden regardless of `works_dows` membership or mode.
//!
//! # Weekend rotation
//!
//! The rotation is anchored to a specific Saturday. Weekends whose whole-week
//! offset from the anchor is even are working weekends; odd offsets are off.
//! An anchor that is not a Saturday is a configuration error rejected at data
//! entry, upstream of this model.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// How days outside `works_dows` are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternMode {
    /// Days outside `works_dows` are forbidden.
    Hard,
    /// Days outside `works_dows` are allowed but penalized.
    Soft,
}

/// Every-other-weekend rotation anchored to a working Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekendRotation {
    /// A Saturday on a working weekend.
    pub anchor: NaiveDate,
}

impl WeekendRotation {
    /// Creates a rotation anchored at the given Saturday.
    pub fn anchored_at(anchor: NaiveDate) -> Self {
        Self { anchor }
    }

    /// Whether the weekend containing `date` is a working weekend.
    ///
    /// Only meaningful for Saturdays and Sundays; parity is computed as the
    /// whole-week offset between the date's weekend Saturday and the anchor,
    /// modulo 2.
    pub fn works_weekend(&self, date: NaiveDate) -> bool {
        let weekend_saturday = match date.weekday() {
            Weekday::Sat => date,
            // A Sunday belongs to the weekend started by the previous Saturday.
            _ => date - Days::new(1),
        };
        let weeks = (weekend_saturday - self.anchor).num_days() / 7;
        weeks.rem_euclid(2) == 0
    }
}

/// A worker's recurring weekly work pattern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkPattern {
    /// Weekdays (Sunday=0) the worker is normally scheduled.
    pub works_dows: Vec<u8>,
    /// Weekdays (Sunday=0) the worker is never scheduled.
    /// Always a hard constraint, regardless of `mode`.
    pub offs_dows: Vec<u8>,
    /// Enforcement mode for days outside `works_dows`.
    pub mode: PatternMode,
    /// Optional every-other-weekend rotation.
    pub weekend_rotation: Option<WeekendRotation>,
}

impl WorkPattern {
    /// Creates a hard pattern with the given work weekdays.
    pub fn new(works_dows: Vec<u8>) -> Self {
        Self {
            works_dows,
            offs_dows: Vec::new(),
            mode: PatternMode::Hard,
            weekend_rotation: None,
        }
    }

    /// Sets the forbidden weekdays.
    pub fn with_offs_dows(mut self, offs_dows: Vec<u8>) -> Self {
        self.offs_dows = offs_dows;
        self
    }

    /// Sets the enforcement mode.
    pub fn with_mode(mut self, mode: PatternMode) -> Self {
        self.mode = mode;
        self
    }

    /// Enables every-other-weekend rotation anchored at a working Saturday.
    pub fn with_weekend_rotation(mut self, anchor: NaiveDate) -> Self {
        self.weekend_rotation = Some(WeekendRotation::anchored_at(anchor));
        self
    }

    /// Whether a weekday (Sunday=0) is in the work set.
    pub fn works_dow(&self, dow: u8) -> bool {
        self.works_dows.contains(&dow)
    }

    /// Whether a weekday (Sunday=0) is forbidden.
    pub fn offs_dow(&self, dow: u8) -> bool {
        self.offs_dows.contains(&dow)
    }
}
