//! Roster domain models.
//!
//! Core data types for duty rostering: the staff pool, the shift catalog,
//! the planning period, and the resulting roster. Workers and shifts are
//! created once from inputs and read-only thereafter; a `Roster` is built
//! incrementally by the assignment engine and is the final output.

mod period;
mod roster;
mod shift;
mod worker;

pub use period::PlanningPeriod;
pub use roster::{Assignment, Diagnostic, DiagnosticKind, Roster};
pub use shift::{PeriodKey, Shift, ShiftType};
pub use worker::Worker;

pub(crate) use shift::weekday_name;
