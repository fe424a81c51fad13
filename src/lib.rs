//! Shift roster rule engine.
//!
//! Assigns shift workers (day/night, lead/staff) to calendar dates within a
//! multi-week scheduling cycle, subject to per-worker availability rules,
//! weekly workload limits, and per-day coverage and leadership requirements.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Worker`, `WorkPattern`,
//!   `AvailabilityOverride`, `ShiftAssignment`, `ScheduleCycle`, `Slot`
//! - **`policy`**: Coverage and weekly-limit policy constants
//! - **`availability`**: Work-pattern evaluation and availability resolution
//! - **`selection`**: Round-robin assignment selector
//! - **`generation`**: Cycle-wide roster generation driver
//! - **`validation`**: Coverage and leadership violation reporting
//! - **`weekly`**: Weekly worked-day-count summary (publish gate)
//! - **`normalize`**: Boundary adaptation from loosely-typed store records
//!
//! # Architecture
//!
//! Every component is a pure, synchronous function over in-memory data. The
//! caller loads worker records, existing assignments, overrides, and cycle
//! bounds up front, invokes the engine, and persists results afterwards. The
//! only state threaded between calls is the explicit rotation cursor of the
//! selector. "No eligible worker" is a normal return value, not an error.
//!
//! # References
//!
//! - Burke et al. (2004), "The State of the Art of Nurse Rostering"
//! - Ernst et al. (2004), "Staff Scheduling and Rostering: A Review"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod availability;
pub mod generation;
pub mod models;
pub mod normalize;
pub mod policy;
pub mod selection;
pub mod validation;
pub mod weekly;
