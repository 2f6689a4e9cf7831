//! Shift catalog generation.
//!
//! Turns a planning-period descriptor into the ordered shift sequence the
//! rest of the crate operates on: two shifts (day, then night) per period
//! unit, with sequential IDs and precomputed week buckets and catalog
//! positions. Generation is deterministic: the same descriptor always
//! yields an identical sequence.

use chrono::{Datelike, Days, Weekday};

use crate::models::{PeriodKey, PlanningPeriod, Shift, ShiftType};
use crate::validation::ValidationError;

const CYCLE_WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Generates the full shift catalog for a planning period.
///
/// Month periods yield `2 × days_in_month` dated shifts whose week bucket
/// is the date's ISO week number; week cycles yield 14 weekday-labeled
/// shifts in a single `0` bucket.
///
/// # Errors
/// Returns a `ValidationError` for a month outside 1-12 or an
/// unrepresentable calendar month.
pub fn generate(period: &PlanningPeriod) -> Result<Vec<Shift>, ValidationError> {
    match *period {
        PlanningPeriod::Month { year, month } => generate_month(year, month),
        PlanningPeriod::WeekCycle => Ok(generate_week_cycle()),
    }
}

fn generate_month(year: i32, month: u32) -> Result<Vec<Shift>, ValidationError> {
    let period = PlanningPeriod::month(year, month);
    let first = period.first_day().ok_or_else(|| {
        ValidationError::invalid_period(format!("Invalid calendar month: {year}-{month:02}"))
    })?;
    let days = period
        .days_in_month()
        .ok_or_else(|| ValidationError::invalid_period(format!("Invalid month: {month}")))?;

    let mut shifts = Vec::with_capacity(2 * days as usize);
    for day in 0..days {
        let date = first + Days::new(u64::from(day));
        let week = date.iso_week().week();
        for shift_type in [ShiftType::Day, ShiftType::Night] {
            let position = shifts.len();
            shifts.push(Shift::new(
                format!("S{}", position + 1),
                PeriodKey::Date(date),
                week,
                shift_type,
                position,
            ));
        }
    }
    Ok(shifts)
}

fn generate_week_cycle() -> Vec<Shift> {
    let mut shifts = Vec::with_capacity(2 * CYCLE_WEEKDAYS.len());
    for weekday in CYCLE_WEEKDAYS {
        for shift_type in [ShiftType::Day, ShiftType::Night] {
            let position = shifts.len();
            shifts.push(Shift::new(
                format!("S{}", position + 1),
                PeriodKey::Weekday(weekday),
                0,
                shift_type,
                position,
            ));
        }
    }
    shifts
}
