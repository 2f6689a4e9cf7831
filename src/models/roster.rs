//! Roster (solution) model.
//!
//! A roster is the assignment engine's output: worker-shift assignments in
//! the order they were made, plus diagnostics for shifts that could not be
//! staffed and quotas that could not be met. Diagnostics are data, not
//! errors: an infeasible shift never aborts a run.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Shift;

/// A complete roster (solution to an assignment problem).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    /// Worker-shift assignments. Per-worker order = assignment order.
    pub assignments: Vec<Assignment>,
    /// Infeasibility diagnostics recorded during construction.
    pub diagnostics: Vec<Diagnostic>,
}

/// A single worker-shift assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    /// Assigned worker ID.
    pub worker_id: String,
    /// The assigned shift.
    pub shift: Shift,
}

/// A non-fatal problem recorded while building a roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Diagnostic category.
    pub kind: DiagnosticKind,
    /// Related entity ID (shift or worker).
    pub entity_id: String,
    /// Human-readable description.
    pub message: String,
}

/// Categories of roster diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// No eligible worker was found for a shift in the primary pass.
    InfeasibleShift,
    /// The backfill pass exhausted the catalog below a worker's quota.
    UnmetQuota,
}

impl Assignment {
    /// Creates a new assignment.
    pub fn new(worker_id: impl Into<String>, shift: Shift) -> Self {
        Self {
            worker_id: worker_id.into(),
            shift,
        }
    }
}

impl Diagnostic {
    /// Creates an infeasible-shift diagnostic.
    pub fn infeasible_shift(shift_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::InfeasibleShift,
            entity_id: shift_id.into(),
            message: message.into(),
        }
    }

    /// Creates an unmet-quota diagnostic.
    pub fn unmet_quota(worker_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::UnmetQuota,
            entity_id: worker_id.into(),
            message: message.into(),
        }
    }
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an assignment.
    pub fn add_assignment(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    /// Adds a diagnostic.
    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Whether the roster was built without diagnostics.
    pub fn is_complete(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Number of assignments.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    /// Shifts assigned to a worker, in assignment order.
    pub fn shifts_for_worker(&self, worker_id: &str) -> Vec<&Shift> {
        self.assignments
            .iter()
            .filter(|a| a.worker_id == worker_id)
            .map(|a| &a.shift)
            .collect()
    }

    /// Number of shifts assigned to a worker.
    pub fn count_for_worker(&self, worker_id: &str) -> usize {
        self.assignments
            .iter()
            .filter(|a| a.worker_id == worker_id)
            .count()
    }

    /// Whether any worker holds the given shift.
    pub fn is_shift_assigned(&self, shift_id: &str) -> bool {
        self.assignments.iter().any(|a| a.shift.id == shift_id)
    }

    /// A worker's shifts grouped by week bucket, weeks in ascending order.
    pub fn weekly_breakdown(&self, worker_id: &str) -> BTreeMap<u32, Vec<&Shift>> {
        let mut by_week: BTreeMap<u32, Vec<&Shift>> = BTreeMap::new();
        for shift in self.shifts_for_worker(worker_id) {
            by_week.entry(shift.week).or_default().push(shift);
        }
        by_week
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PeriodKey, ShiftType};
    use chrono::Weekday;

    fn shift(id: &str, wd: Weekday, week: u32, st: ShiftType, pos: usize) -> Shift {
        Shift::new(id, PeriodKey::Weekday(wd), week, st, pos)
    }

    fn sample_roster() -> Roster {
        let mut r = Roster::new();
        r.add_assignment(Assignment::new(
            "Alice",
            shift("S1", Weekday::Mon, 0, ShiftType::Day, 0),
        ));
        r.add_assignment(Assignment::new(
            "Bob",
            shift("S2", Weekday::Mon, 0, ShiftType::Night, 1),
        ));
        r.add_assignment(Assignment::new(
            "Alice",
            shift("S4", Weekday::Tue, 0, ShiftType::Night, 3),
        ));
        r
    }

    #[test]
    fn test_roster_queries() {
        let r = sample_roster();
        assert_eq!(r.assignment_count(), 3);
        assert_eq!(r.count_for_worker("Alice"), 2);
        assert_eq!(r.count_for_worker("Bob"), 1);
        assert_eq!(r.count_for_worker("Nobody"), 0);

        let alice = r.shifts_for_worker("Alice");
        assert_eq!(alice.len(), 2);
        // Assignment order preserved.
        assert_eq!(alice[0].id, "S1");
        assert_eq!(alice[1].id, "S4");

        assert!(r.is_shift_assigned("S2"));
        assert!(!r.is_shift_assigned("S3"));
    }

    #[test]
    fn test_is_complete() {
        let mut r = sample_roster();
        assert!(r.is_complete());
        r.add_diagnostic(Diagnostic::infeasible_shift("S9", "no eligible worker"));
        assert!(!r.is_complete());
        assert_eq!(r.diagnostics[0].kind, DiagnosticKind::InfeasibleShift);
    }

    #[test]
    fn test_diagnostic_factories() {
        let d = Diagnostic::infeasible_shift("S1", "no eligible worker");
        assert_eq!(d.kind, DiagnosticKind::InfeasibleShift);
        assert_eq!(d.entity_id, "S1");

        let d = Diagnostic::unmet_quota("Alice", "3 of 15");
        assert_eq!(d.kind, DiagnosticKind::UnmetQuota);
        assert_eq!(d.entity_id, "Alice");
    }

    #[test]
    fn test_weekly_breakdown_ordering() {
        let mut r = Roster::new();
        r.add_assignment(Assignment::new(
            "Alice",
            shift("S9", Weekday::Fri, 2, ShiftType::Day, 8),
        ));
        r.add_assignment(Assignment::new(
            "Alice",
            shift("S1", Weekday::Mon, 1, ShiftType::Day, 0),
        ));

        let weeks = r.weekly_breakdown("Alice");
        let keys: Vec<u32> = weeks.keys().copied().collect();
        assert_eq!(keys, vec![1, 2]); // ascending week order
        assert_eq!(weeks[&1][0].id, "S1");
    }

    #[test]
    fn test_empty_roster() {
        let r = Roster::new();
        assert_eq!(r.assignment_count(), 0);
        assert!(r.is_complete());
        assert!(r.shifts_for_worker("anyone").is_empty());
    }
}
