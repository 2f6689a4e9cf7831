//! Textual roster report.
//!
//! Formats the run's two independent numbers (the flow-based feasibility
//! bound and the greedy roster) plus per-worker assignment lists, the
//! unassigned-shift list, and a weekly breakdown. Pure string formatting
//! over in-process data; there is no wire format.

use std::fmt::Write as _;

use chrono::Datelike;

use crate::models::{weekday_name, PeriodKey, Roster, Shift, Worker};

/// Renders the full textual report for a completed run.
///
/// `flow_bound` is the max-flow feasibility number; it is printed next to
/// the actual assignment count but never merged with it.
pub fn render(workers: &[Worker], shifts: &[Shift], roster: &Roster, flow_bound: u32) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Max flow (total assignable shifts): {flow_bound}");
    let _ = writeln!(out, "Assigned shifts: {}", roster.assignment_count());

    let _ = writeln!(out, "\nAssignments:");
    for worker in workers {
        let mine = roster.shifts_for_worker(&worker.id);
        let _ = writeln!(out, "{}: {} shifts", worker.id, mine.len());
        for shift in mine {
            let _ = writeln!(out, "  {}", shift.label());
        }
    }

    let unassigned: Vec<&Shift> = shifts
        .iter()
        .filter(|s| !roster.is_shift_assigned(&s.id))
        .collect();
    if unassigned.is_empty() {
        let _ = writeln!(out, "\nAll shifts assigned.");
    } else {
        let _ = writeln!(out, "\nUnassigned shifts:");
        for shift in unassigned {
            let _ = writeln!(out, "  {}", shift.label());
        }
    }

    let _ = writeln!(out, "\nWeekly breakdown:");
    for worker in workers {
        let _ = writeln!(out, "{}:", worker.id);
        for (week, mine) in roster.weekly_breakdown(&worker.id) {
            for (i, shift) in mine.iter().enumerate() {
                match shift.period {
                    PeriodKey::Date(date) => {
                        if i == 0 {
                            let _ = writeln!(out, "  Week {week}:");
                        }
                        let _ = writeln!(
                            out,
                            "    {} ({}): {} shift",
                            weekday_name(date.weekday()),
                            date.format("%Y-%m-%d"),
                            shift.shift_type
                        );
                    }
                    PeriodKey::Weekday(wd) => {
                        let _ = writeln!(out, "  {}: {} shift", weekday_name(wd), shift.shift_type);
                    }
                }
            }
        }
    }

    out
}
