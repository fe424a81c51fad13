//! Shift assignment model.
//!
//! An assignment places one worker in one (date, shift) slot with a role
//! and a runtime status. Only `scheduled` and `on_call` statuses count
//! toward slot coverage; `sick` and `called_off` keep the record for
//! audit but leave the slot short.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ShiftType;

/// Role within a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftRole {
    Lead,
    Staff,
}

/// Runtime status of an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    Scheduled,
    OnCall,
    Sick,
    CalledOff,
}

impl AssignmentStatus {
    /// Whether this status counts toward slot coverage.
    pub fn counts_toward_coverage(&self) -> bool {
        matches!(self, AssignmentStatus::Scheduled | AssignmentStatus::OnCall)
    }
}

/// One worker placed in one (date, shift) slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftAssignment {
    /// Cycle this assignment belongs to.
    pub cycle_id: String,
    /// Calendar date.
    pub date: NaiveDate,
    /// Day or night shift.
    pub shift: ShiftType,
    /// Lead or staff role.
    pub role: ShiftRole,
    /// Assigned worker.
    pub worker_id: String,
    /// Runtime status.
    pub status: AssignmentStatus,
}

impl ShiftAssignment {
    /// Creates a `scheduled` staff assignment.
    pub fn new(
        cycle_id: impl Into<String>,
        date: NaiveDate,
        shift: ShiftType,
        worker_id: impl Into<String>,
    ) -> Self {
        Self {
            cycle_id: cycle_id.into(),
            date,
            shift,
            role: ShiftRole::Staff,
            worker_id: worker_id.into(),
            status: AssignmentStatus::Scheduled,
        }
    }

    /// Sets the role.
    pub fn with_role(mut self, role: ShiftRole) -> Self {
        self.role = role;
        self
    }

    /// Sets the status.
    pub fn with_status(mut self, status: AssignmentStatus) -> Self {
        self.status = status;
        self
    }

    /// Whether this assignment counts toward slot coverage.
    pub fn counts_toward_coverage(&self) -> bool {
        self.status.counts_toward_coverage()
    }
}
