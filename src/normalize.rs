//! Boundary normalization.
//!
//! Roster records arrive from a schemaless store with optional fields and
//! free-form category strings. This layer converts them, once, into the
//! engine's strongly-typed models with conservative defaults: an
//! unrecognized employment category becomes per-diem (the most
//! restrictive weekly limit), a malformed weekday is dropped, a missing
//! pattern means "no recurring constraint". Every function is total —
//! normalization never fails, it defaults or drops.
//!
//! An override row whose date is missing or whose force direction cannot
//! be read is dropped rather than guessed at; a weekend-rotation anchor
//! that drifted off a Saturday is logged and snapped back to the Saturday
//! on or before it.

use chrono::{DateTime, Datelike, Days, NaiveDate, Utc, Weekday};
use log::warn;
use serde::Deserialize;

use crate::models::{
    AvailabilityOverride, EmploymentCategory, OverrideAction, OverrideScope, OverrideSource,
    PatternMode, ShiftType, Worker, WorkPattern,
};

/// A worker row as stored, before typing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawWorker {
    pub id: String,
    pub name: Option<String>,
    pub category: Option<String>,
    pub primary_shift: Option<String>,
    pub lead_eligible: Option<bool>,
    pub weekly_limit: Option<i64>,
    pub preferred_dows: Option<Vec<i64>>,
    pub active: Option<bool>,
    pub on_leave: Option<bool>,
}

/// A work-pattern row as stored, before typing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawWorkPattern {
    pub works_dows: Option<Vec<i64>>,
    pub offs_dows: Option<Vec<i64>>,
    pub mode: Option<String>,
    pub weekend_anchor: Option<NaiveDate>,
}

/// Types a raw worker row.
///
/// Defaults: unknown category → per-diem; unknown shift → day; missing
/// weekly limit → the category default; out-of-range limits clamped to
/// 1–7; weekday entries outside 0–6 dropped; missing flags → active, not
/// on leave.
pub fn normalize_worker(raw: &RawWorker) -> Worker {
    let category = parse_category(raw.category.as_deref());
    let weekly_limit = raw
        .weekly_limit
        .map(|l| l.clamp(1, 7) as u8)
        .unwrap_or_else(|| category.default_weekly_limit());

    Worker {
        id: raw.id.clone(),
        name: raw.name.clone().unwrap_or_default(),
        category,
        primary_shift: parse_shift(raw.primary_shift.as_deref()),
        lead_eligible: raw.lead_eligible.unwrap_or(false),
        weekly_limit,
        preferred_dows: valid_dows(raw.preferred_dows.as_deref()),
        active: raw.active.unwrap_or(true),
        on_leave: raw.on_leave.unwrap_or(false),
    }
}

/// Types a raw pattern row; `None` means no recurring constraint.
pub fn normalize_pattern(raw: Option<&RawWorkPattern>) -> Option<WorkPattern> {
    let raw = raw?;
    let mut pattern = WorkPattern::new(valid_dows(raw.works_dows.as_deref()))
        .with_offs_dows(valid_dows(raw.offs_dows.as_deref()))
        .with_mode(parse_mode(raw.mode.as_deref()));
    if let Some(anchor) = raw.weekend_anchor {
        pattern = pattern.with_weekend_rotation(saturday_anchor(anchor));
    }
    Some(pattern)
}

/// An override row as stored, before typing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawOverride {
    pub worker_id: String,
    pub cycle_id: String,
    pub date: Option<NaiveDate>,
    pub scope: Option<String>,
    pub action: Option<String>,
    pub source: Option<String>,
    pub note: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Types a raw override row.
///
/// Rows without a readable date or force direction are dropped — an
/// exception whose day or direction is unknown cannot be applied.
/// Defaults: unknown scope → `both`; unknown source → `manager` (workers
/// cannot edit what they did not verifiably enter).
pub fn normalize_override(raw: &RawOverride) -> Option<AvailabilityOverride> {
    let date = raw.date?;
    let action = parse_action(raw.action.as_deref())?;

    let mut ov = AvailabilityOverride::new(
        raw.worker_id.clone(),
        raw.cycle_id.clone(),
        date,
        parse_scope(raw.scope.as_deref()),
        action,
        parse_source(raw.source.as_deref()),
    );
    if let Some(note) = &raw.note {
        ov = ov.with_note(note.clone());
    }
    if let Some(at) = raw.created_at {
        ov = ov.with_created_at(at);
    }
    Some(ov)
}

fn parse_category(s: Option<&str>) -> EmploymentCategory {
    match s.map(str::trim) {
        Some(c) if c.eq_ignore_ascii_case("full_time") || c.eq_ignore_ascii_case("full-time") => {
            EmploymentCategory::FullTime
        }
        Some(c) if c.eq_ignore_ascii_case("part_time") || c.eq_ignore_ascii_case("part-time") => {
            EmploymentCategory::PartTime
        }
        Some(c) if c.eq_ignore_ascii_case("per_diem") || c.eq_ignore_ascii_case("per-diem") => {
            EmploymentCategory::PerDiem
        }
        // Unknown or missing: the most restrictive default.
        _ => EmploymentCategory::PerDiem,
    }
}

fn parse_shift(s: Option<&str>) -> ShiftType {
    match s.map(str::trim) {
        Some(v) if v.eq_ignore_ascii_case("night") => ShiftType::Night,
        _ => ShiftType::Day,
    }
}

fn parse_mode(s: Option<&str>) -> PatternMode {
    match s.map(str::trim) {
        Some(v) if v.eq_ignore_ascii_case("soft") => PatternMode::Soft,
        _ => PatternMode::Hard,
    }
}

fn parse_scope(s: Option<&str>) -> OverrideScope {
    match s.map(str::trim) {
        Some(v) if v.eq_ignore_ascii_case("day") => OverrideScope::Day,
        Some(v) if v.eq_ignore_ascii_case("night") => OverrideScope::Night,
        _ => OverrideScope::Both,
    }
}

fn parse_action(s: Option<&str>) -> Option<OverrideAction> {
    match s.map(str::trim) {
        Some(v) if v.eq_ignore_ascii_case("force_on") || v.eq_ignore_ascii_case("force-on") => {
            Some(OverrideAction::ForceOn)
        }
        Some(v) if v.eq_ignore_ascii_case("force_off") || v.eq_ignore_ascii_case("force-off") => {
            Some(OverrideAction::ForceOff)
        }
        _ => None,
    }
}

fn parse_source(s: Option<&str>) -> OverrideSource {
    match s.map(str::trim) {
        Some(v) if v.eq_ignore_ascii_case("worker") || v.eq_ignore_ascii_case("therapist") => {
            OverrideSource::Worker
        }
        _ => OverrideSource::Manager,
    }
}

/// Snaps a weekend-rotation anchor to the Saturday on or before it.
///
/// Anchors are Saturdays by contract; one that drifted is a data-entry
/// problem surfaced through the log, not a reason to fail the load.
fn saturday_anchor(anchor: NaiveDate) -> NaiveDate {
    if anchor.weekday() == Weekday::Sat {
        return anchor;
    }
    let back = (anchor.weekday().num_days_from_sunday() + 1) % 7;
    warn!("weekend rotation anchor {anchor} is not a Saturday; snapping back {back} day(s)");
    anchor - Days::new(u64::from(back))
}

fn valid_dows(dows: Option<&[i64]>) -> Vec<u8> {
    dows.unwrap_or_default()
        .iter()
        .filter(|&&d| (0..=6).contains(&d))
        .map(|&d| d as u8)
        .collect()
}
