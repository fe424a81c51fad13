//! Roster domain models.
//!
//! Core data types for representing a scheduling cycle and its inputs.
//! All records are strongly-typed value objects: loosely-typed store rows
//! are converted once at the boundary (see [`crate::normalize`]) so the
//! engine never sees partial data.
//!
//! # Conventions
//!
//! - Weekdays are numbered Sunday=0 through Saturday=6.
//! - Weeks are fixed Sunday–Saturday, independent of cycle boundaries.
//! - Dates are plain calendar dates (`chrono::NaiveDate`); shifts within a
//!   date are distinguished by [`ShiftType`], not by clock time.

mod assignment;
mod cycle;
mod overrides;
mod pattern;
mod worker;

pub use assignment::{AssignmentStatus, ShiftAssignment, ShiftRole};
pub use cycle::{week_start, ScheduleCycle, Slot};
pub use overrides::{
    can_worker_mutate, AvailabilityOverride, OverrideAction, OverrideScope, OverrideSource,
};
pub use pattern::{PatternMode, WeekendRotation, WorkPattern};
pub use worker::{EmploymentCategory, ShiftType, Worker};
