//! Planning period descriptor.
//!
//! A roster covers either one calendar month (dated shifts, ISO week
//! buckets) or one generic week cycle (weekday-labeled shifts, a single
//! cap bucket). The descriptor drives catalog generation, cap accounting,
//! and the per-mode rule semantics.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The planning period a roster covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanningPeriod {
    /// One calendar month. Shifts carry absolute dates.
    Month {
        /// Calendar year.
        year: i32,
        /// Calendar month (1-12).
        month: u32,
    },
    /// One generic, undated week cycle (Monday through Sunday).
    WeekCycle,
}

impl PlanningPeriod {
    /// Creates a calendar-month period.
    pub fn month(year: i32, month: u32) -> Self {
        Self::Month { year, month }
    }

    /// Creates a generic week-cycle period.
    pub fn week_cycle() -> Self {
        Self::WeekCycle
    }

    /// Whether this period uses absolute calendar dates.
    #[inline]
    pub fn is_calendar(&self) -> bool {
        matches!(self, Self::Month { .. })
    }

    /// First day of a month period, if representable.
    ///
    /// `None` for week-cycle periods and for out-of-range months.
    pub fn first_day(&self) -> Option<NaiveDate> {
        match *self {
            Self::Month { year, month } => NaiveDate::from_ymd_opt(year, month, 1),
            Self::WeekCycle => None,
        }
    }

    /// Number of days in a month period, if representable.
    pub fn days_in_month(&self) -> Option<u32> {
        match *self {
            Self::Month { year, month } => {
                let first = NaiveDate::from_ymd_opt(year, month, 1)?;
                let next_first = if month == 12 {
                    NaiveDate::from_ymd_opt(year + 1, 1, 1)?
                } else {
                    NaiveDate::from_ymd_opt(year, month + 1, 1)?
                };
                Some((next_first - first).num_days() as u32)
            }
            Self::WeekCycle => None,
        }
    }
}
