//! Assignment engine and hard rules.
//!
//! `RuleSet` is the pure veto predicate over (worker, held shifts,
//! candidate shift); `AssignmentEngine` drives the greedy primary pass and
//! the quota-backfill pass, gating every candidate through the rules. The
//! engine records diagnostics for anything it cannot staff and never
//! aborts a run.

mod assign;
mod rules;

pub use assign::{AssignmentEngine, BackfillPolicy};
pub use rules::{RuleBreach, RuleSet};
