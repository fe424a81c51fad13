//! Date-scoped availability overrides.
//!
//! An override is an explicit exception entered by a manager or by the
//! worker themselves, forcing one date/shift on or off regardless of the
//! recurring work pattern. When several overrides match a lookup, one whose
//! scope names the requested shift type exactly takes precedence over a
//! `both`-scoped one.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::ShiftType;

/// Which shift(s) of the date an override applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverrideScope {
    Day,
    Night,
    Both,
}

impl OverrideScope {
    /// Whether this scope covers the given shift type.
    pub fn covers(&self, shift: ShiftType) -> bool {
        match self {
            OverrideScope::Day => shift == ShiftType::Day,
            OverrideScope::Night => shift == ShiftType::Night,
            OverrideScope::Both => true,
        }
    }

    /// Whether this scope names the given shift type exactly (not `both`).
    pub fn is_exact_for(&self, shift: ShiftType) -> bool {
        match self {
            OverrideScope::Day => shift == ShiftType::Day,
            OverrideScope::Night => shift == ShiftType::Night,
            OverrideScope::Both => false,
        }
    }
}

impl From<ShiftType> for OverrideScope {
    fn from(shift: ShiftType) -> Self {
        match shift {
            ShiftType::Day => OverrideScope::Day,
            ShiftType::Night => OverrideScope::Night,
        }
    }
}

/// Whether the override forces the worker on or off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverrideAction {
    ForceOn,
    ForceOff,
}

/// Who entered the override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverrideSource {
    Manager,
    Worker,
}

/// A single date/shift availability exception.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityOverride {
    /// Worker this override applies to.
    pub worker_id: String,
    /// Cycle this override belongs to.
    pub cycle_id: String,
    /// The date being overridden.
    pub date: NaiveDate,
    /// Shift scope.
    pub scope: OverrideScope,
    /// Force-on or force-off.
    pub action: OverrideAction,
    /// Who entered it.
    pub source: OverrideSource,
    /// Optional free-text note.
    pub note: Option<String>,
    /// When the override was entered.
    pub created_at: DateTime<Utc>,
}

impl AvailabilityOverride {
    /// Creates an override.
    pub fn new(
        worker_id: impl Into<String>,
        cycle_id: impl Into<String>,
        date: NaiveDate,
        scope: OverrideScope,
        action: OverrideAction,
        source: OverrideSource,
    ) -> Self {
        Self {
            worker_id: worker_id.into(),
            cycle_id: cycle_id.into(),
            date,
            scope,
            action,
            source,
            note: None,
            created_at: DateTime::<Utc>::MIN_UTC,
        }
    }

    /// Attaches a note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Sets the creation timestamp.
    pub fn with_created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = at;
        self
    }

    /// Whether this override matches a worker/cycle/date/shift lookup.
    pub fn matches(
        &self,
        worker_id: &str,
        cycle_id: &str,
        date: NaiveDate,
        shift: ShiftType,
    ) -> bool {
        self.worker_id == worker_id
            && self.cycle_id == cycle_id
            && self.date == date
            && self.scope.covers(shift)
    }
}

/// Whether a worker may edit or delete an override.
///
/// Manager-sourced overrides are immutable by workers; worker-sourced
/// overrides may only be touched by their own worker. This is an
/// authorization policy consumed by the external write path, not a
/// scheduling rule — the availability resolver does not consult it.
pub fn can_worker_mutate(ov: &AvailabilityOverride, worker_id: &str) -> bool {
    ov.source == OverrideSource::Worker && ov.worker_id == worker_id
}
