//! Shift slot model.
//!
//! A shift is a discrete duty slot: one period unit (a calendar date or a
//! weekday of a generic cycle) crossed with a shift type (day or night).
//! Shifts are immutable once generated; identity is stable for a run.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Shift type classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShiftType {
    /// Daytime duty.
    Day,
    /// Nighttime duty.
    Night,
}

impl ShiftType {
    /// Whether this is a night shift.
    #[inline]
    pub fn is_night(self) -> bool {
        matches!(self, ShiftType::Night)
    }

    /// Lowercase label ("day" / "night").
    pub fn label(self) -> &'static str {
        match self {
            ShiftType::Day => "day",
            ShiftType::Night => "night",
        }
    }
}

impl std::fmt::Display for ShiftType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// When a shift occurs: a calendar date (month planning) or a weekday
/// label (generic week-cycle planning).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PeriodKey {
    /// Absolute calendar date.
    Date(NaiveDate),
    /// Weekday of a generic, undated week cycle.
    Weekday(Weekday),
}

impl PeriodKey {
    /// Display label: ISO date ("2024-09-01") or full weekday name ("Monday").
    pub fn label(&self) -> String {
        match self {
            PeriodKey::Date(date) => date.format("%Y-%m-%d").to_string(),
            PeriodKey::Weekday(wd) => weekday_name(*wd).to_string(),
        }
    }

    /// Full weekday name of this period unit.
    pub fn weekday_name(&self) -> &'static str {
        match self {
            PeriodKey::Date(date) => weekday_name(date.weekday()),
            PeriodKey::Weekday(wd) => weekday_name(*wd),
        }
    }
}

impl std::fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

/// Full English weekday name.
pub(crate) fn weekday_name(wd: Weekday) -> &'static str {
    match wd {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// A duty slot to be staffed by exactly one worker.
///
/// `week` and `position` are derived at catalog-generation time:
/// `week` is the ISO week number in month planning (a single `0` bucket in
/// cycle planning), `position` the ordinal in the generated catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// Unique shift identifier ("S1", "S2", ...).
    pub id: String,
    /// When the shift occurs.
    pub period: PeriodKey,
    /// Week bucket for cap accounting.
    pub week: u32,
    /// Day or night.
    pub shift_type: ShiftType,
    /// Ordinal in the generated catalog.
    pub position: usize,
}

impl Shift {
    /// Creates a shift. `week` and `position` come from the catalog generator.
    pub fn new(
        id: impl Into<String>,
        period: PeriodKey,
        week: u32,
        shift_type: ShiftType,
        position: usize,
    ) -> Self {
        Self {
            id: id.into(),
            period,
            week,
            shift_type,
            position,
        }
    }

    /// Whether this is a night shift.
    #[inline]
    pub fn is_night(&self) -> bool {
        self.shift_type.is_night()
    }

    /// Display label: period label plus shift type ("2024-09-01 night").
    pub fn label(&self) -> String {
        format!("{} {}", self.period.label(), self.shift_type)
    }
}
