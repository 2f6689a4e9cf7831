//! Greedy assignment with quota backfill.
//!
//! # Algorithm
//!
//! 1. **Primary pass**: walk the catalog in order. For each shift, collect
//!    workers under their weekly cap for the shift's week bucket that the
//!    rule set does not veto, and give the shift to the least-loaded one
//!    (ties: worker-list order). A shift with no eligible worker gets an
//!    `InfeasibleShift` diagnostic.
//! 2. **Backfill pass**: for each worker short of their monthly quota,
//!    repeatedly take the first catalog shift not on their own list that
//!    the rules allow, until the quota is met or a full scan makes no
//!    progress (`UnmetQuota` diagnostic). The weekly cap is not re-checked
//!    here; only the rule set gates backfill candidates.
//!
//! The backfill pass does not look at other workers' lists unless the
//! engine is configured with [`BackfillPolicy::Exclusive`], so under the
//! default policy a backfilled shift may also be held by another worker.
//!
//! The flow-based feasibility bound (see [`crate::flow`]) is computed and
//! reported independently; the engine never consults it.

use std::collections::HashSet;

use crate::models::{Assignment, Diagnostic, PlanningPeriod, Roster, Shift, Worker};

use super::RuleSet;

/// Whether the backfill pass may hand a worker a shift another worker
/// already holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackfillPolicy {
    /// Backfill ignores other workers' lists; a shift can end up on two
    /// rosters. Matches the historical behavior.
    #[default]
    AllowShared,
    /// Backfill skips shifts any worker already holds.
    Exclusive,
}

/// Greedy roster builder.
///
/// # Example
///
/// ```
/// use duty_roster::catalog;
/// use duty_roster::engine::AssignmentEngine;
/// use duty_roster::models::{PlanningPeriod, Worker};
///
/// let period = PlanningPeriod::week_cycle();
/// let shifts = catalog::generate(&period).unwrap();
/// let workers = vec![Worker::new("Alice", 4), Worker::new("Bob", 3)];
///
/// let roster = AssignmentEngine::for_period(&period).assign(&workers, &shifts);
/// assert_eq!(roster.assignment_count(), 7); // capped at 4 + 3
/// ```
#[derive(Debug, Clone)]
pub struct AssignmentEngine {
    rules: RuleSet,
    backfill_policy: BackfillPolicy,
}

impl AssignmentEngine {
    /// Creates an engine with the default rules for a planning period.
    pub fn for_period(period: &PlanningPeriod) -> Self {
        Self {
            rules: RuleSet::for_period(period),
            backfill_policy: BackfillPolicy::default(),
        }
    }

    /// Replaces the rule set.
    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    /// Sets the backfill exclusivity policy.
    pub fn with_backfill_policy(mut self, policy: BackfillPolicy) -> Self {
        self.backfill_policy = policy;
        self
    }

    /// Builds a roster for the given workers and shift catalog.
    ///
    /// Never fails: infeasible shifts and unmet quotas become diagnostics
    /// on the returned roster and processing continues.
    pub fn assign(&self, workers: &[Worker], shifts: &[Shift]) -> Roster {
        let mut held: Vec<Vec<Shift>> = vec![Vec::new(); workers.len()];
        let mut claimed: HashSet<String> = HashSet::new();
        let mut diagnostics: Vec<Diagnostic> = Vec::new();

        self.primary_pass(workers, shifts, &mut held, &mut claimed, &mut diagnostics);
        self.backfill_pass(workers, shifts, &mut held, &mut claimed, &mut diagnostics);

        let mut roster = Roster::new();
        for (worker, assigned) in workers.iter().zip(held) {
            for shift in assigned {
                roster.add_assignment(Assignment::new(worker.id.as_str(), shift));
            }
        }
        for diagnostic in diagnostics {
            roster.add_diagnostic(diagnostic);
        }
        roster
    }

    fn primary_pass(
        &self,
        workers: &[Worker],
        shifts: &[Shift],
        held: &mut [Vec<Shift>],
        claimed: &mut HashSet<String>,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        for shift in shifts {
            match self.best_worker(workers, held, shift) {
                Some(w) => {
                    held[w].push(shift.clone());
                    claimed.insert(shift.id.clone());
                }
                None => diagnostics.push(Diagnostic::infeasible_shift(
                    shift.id.as_str(),
                    format!("Could not assign {} shift", shift.label()),
                )),
            }
        }
    }

    /// Least-loaded eligible worker for a shift, ties by input order.
    fn best_worker(&self, workers: &[Worker], held: &[Vec<Shift>], shift: &Shift) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (w, worker) in workers.iter().enumerate() {
            let in_bucket = held[w].iter().filter(|s| s.week == shift.week).count();
            if in_bucket >= worker.weekly_cap as usize {
                continue;
            }
            if self.rules.violates(worker, &held[w], shift) {
                continue;
            }
            match best {
                Some(b) if held[w].len() >= held[b].len() => {}
                _ => best = Some(w),
            }
        }
        best
    }

    fn backfill_pass(
        &self,
        workers: &[Worker],
        shifts: &[Shift],
        held: &mut [Vec<Shift>],
        claimed: &mut HashSet<String>,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        for (w, worker) in workers.iter().enumerate() {
            let quota = match worker.monthly_quota {
                Some(q) => q as usize,
                None => continue,
            };

            while held[w].len() < quota {
                let candidate = shifts.iter().find(|shift| {
                    if held[w].iter().any(|s| s.id == shift.id) {
                        return false;
                    }
                    if self.backfill_policy == BackfillPolicy::Exclusive
                        && claimed.contains(shift.id.as_str())
                    {
                        return false;
                    }
                    !self.rules.violates(worker, &held[w], shift)
                });

                match candidate {
                    Some(shift) => {
                        held[w].push(shift.clone());
                        claimed.insert(shift.id.clone());
                    }
                    None => {
                        diagnostics.push(Diagnostic::unmet_quota(
                            worker.id.as_str(),
                            format!(
                                "Could not fulfill minimum of {} shifts for {} ({} assigned)",
                                quota,
                                worker.id,
                                held[w].len()
                            ),
                        ));
                        break;
                    }
                }
            }
        }
    }
}
