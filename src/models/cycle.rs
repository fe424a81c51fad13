//! Scheduling cycle and slot grid.
//!
//! A cycle is an inclusive date range evaluated as a grid of slots:
//! every date crossed with the day and night shift types. Weeks are fixed
//! Sunday–Saturday and may extend past the cycle boundaries; weekly-limit
//! checks use the whole week while boundary-sensitive requirements shrink
//! to the days actually inside the cycle.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::ShiftType;

/// The Sunday on or before the given date.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.weekday().num_days_from_sunday()))
}

/// A (date, shift) pair: the unit of coverage and leadership evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    pub date: NaiveDate,
    pub shift: ShiftType,
}

impl Slot {
    /// Creates a slot.
    pub fn new(date: NaiveDate, shift: ShiftType) -> Self {
        Self { date, shift }
    }

    /// Stable navigation key, `"<ISO-date>:<day|night>"`.
    ///
    /// External code parses this by splitting on `:`; the format must not
    /// change.
    pub fn key(&self) -> String {
        format!("{}:{}", self.date.format("%Y-%m-%d"), self.shift.as_str())
    }
}

/// A multi-week scheduling cycle with an inclusive date range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleCycle {
    /// Unique cycle identifier.
    pub id: String,
    /// Display label (e.g. "March A").
    pub label: String,
    /// First date of the cycle (inclusive).
    pub start: NaiveDate,
    /// Last date of the cycle (inclusive).
    pub end: NaiveDate,
    /// Whether the cycle has been published.
    pub published: bool,
}

impl ScheduleCycle {
    /// Creates an unpublished cycle.
    pub fn new(id: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            id: id.into(),
            label: String::new(),
            start,
            end,
            published: false,
        }
    }

    /// Sets the display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Whether a date falls inside the cycle.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of days in the cycle (0 if the range is inverted).
    pub fn day_count(&self) -> u32 {
        if self.end < self.start {
            return 0;
        }
        (self.end - self.start).num_days() as u32 + 1
    }

    /// Iterates the cycle's dates in order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start
            .iter_days()
            .take_while(move |d| *d <= self.end)
    }

    /// Iterates the full slot grid: each date crossed with day and night.
    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        self.dates()
            .flat_map(|date| ShiftType::ALL.into_iter().map(move |shift| Slot::new(date, shift)))
    }

    /// The Sundays starting each week that overlaps the cycle, in order.
    pub fn week_starts(&self) -> Vec<NaiveDate> {
        let mut weeks = Vec::new();
        if self.end < self.start {
            return weeks;
        }
        let mut sunday = week_start(self.start);
        while sunday <= self.end {
            weeks.push(sunday);
            sunday = sunday + Days::new(7);
        }
        weeks
    }

    /// How many days of the week starting at `sunday` fall inside the cycle.
    pub fn days_of_week_in_cycle(&self, sunday: NaiveDate) -> u32 {
        let week_end = sunday + Days::new(6);
        let lo = self.start.max(sunday);
        let hi = self.end.min(week_end);
        if hi < lo {
            return 0;
        }
        (hi - lo).num_days() as u32 + 1
    }
}
