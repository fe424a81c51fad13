//! Worker model.
//!
//! Workers are the people assigned to shift slots. Each worker has an
//! employment category, a primary shift type, a lead-eligibility flag,
//! a personal weekly work-day limit, and an ordered list of preferred
//! weekdays. Records are created by directory management and are
//! read-only to the engine.

use serde::{Deserialize, Serialize};

use crate::policy;

/// The two shift types covering a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftType {
    Day,
    Night,
}

impl ShiftType {
    /// Both shift types, in slot-grid iteration order.
    pub const ALL: [ShiftType; 2] = [ShiftType::Day, ShiftType::Night];

    /// Stable wire name, used in slot keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftType::Day => "day",
            ShiftType::Night => "night",
        }
    }
}

/// Employment category, which determines the default weekly work-day limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentCategory {
    FullTime,
    PartTime,
    PerDiem,
}

impl EmploymentCategory {
    /// Default weekly work-day limit for this category.
    pub fn default_weekly_limit(&self) -> u8 {
        match self {
            EmploymentCategory::FullTime => policy::DEFAULT_WEEKLY_LIMIT_FULL_TIME,
            EmploymentCategory::PartTime => policy::DEFAULT_WEEKLY_LIMIT_PART_TIME,
            EmploymentCategory::PerDiem => policy::DEFAULT_WEEKLY_LIMIT_PER_DIEM,
        }
    }
}

/// A worker who can be assigned to shift slots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Worker {
    /// Unique worker identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Employment category.
    pub category: EmploymentCategory,
    /// The shift type this worker normally covers.
    pub primary_shift: ShiftType,
    /// Whether this worker may hold the lead role.
    pub lead_eligible: bool,
    /// Maximum worked days per Sunday–Saturday week (1–7).
    pub weekly_limit: u8,
    /// Preferred weekdays (Sunday=0), in preference order.
    /// For per-diem workers a non-empty list is opt-in: they are only
    /// auto-assigned on listed weekdays.
    pub preferred_dows: Vec<u8>,
    /// Whether the worker is currently employed.
    pub active: bool,
    /// Whether the worker is on leave.
    pub on_leave: bool,
}

impl Worker {
    /// Creates an active worker with the category's default weekly limit.
    pub fn new(id: impl Into<String>, category: EmploymentCategory) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            category,
            primary_shift: ShiftType::Day,
            lead_eligible: false,
            weekly_limit: category.default_weekly_limit(),
            preferred_dows: Vec::new(),
            active: true,
            on_leave: false,
        }
    }

    /// Creates a full-time worker.
    pub fn full_time(id: impl Into<String>) -> Self {
        Self::new(id, EmploymentCategory::FullTime)
    }

    /// Creates a part-time worker.
    pub fn part_time(id: impl Into<String>) -> Self {
        Self::new(id, EmploymentCategory::PartTime)
    }

    /// Creates a per-diem worker.
    pub fn per_diem(id: impl Into<String>) -> Self {
        Self::new(id, EmploymentCategory::PerDiem)
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the primary shift type.
    pub fn with_primary_shift(mut self, shift: ShiftType) -> Self {
        self.primary_shift = shift;
        self
    }

    /// Marks the worker as lead-eligible.
    pub fn with_lead_eligible(mut self, eligible: bool) -> Self {
        self.lead_eligible = eligible;
        self
    }

    /// Overrides the weekly work-day limit (clamped to 1–7).
    pub fn with_weekly_limit(mut self, limit: u8) -> Self {
        self.weekly_limit = limit.clamp(1, 7);
        self
    }

    /// Sets the preferred weekdays (Sunday=0).
    pub fn with_preferred_dows(mut self, dows: Vec<u8>) -> Self {
        self.preferred_dows = dows;
        self
    }

    /// Sets the active flag.
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Sets the on-leave flag.
    pub fn with_on_leave(mut self, on_leave: bool) -> Self {
        self.on_leave = on_leave;
        self
    }

    /// Whether a weekday (Sunday=0) is among this worker's preferences.
    pub fn prefers_dow(&self, dow: u8) -> bool {
        self.preferred_dows.contains(&dow)
    }
}
