//! Hard assignment rules.
//!
//! A candidate assignment either passes every rule or is vetoed outright;
//! there is no soft scoring. Rules are evaluated in a fixed order and the
//! first breach short-circuits:
//!
//! 1. Unavailability
//! 2. Same-period overlap
//! 3. Night-load cap (ISO-week scoped for month planning, whole-period
//!    for week cycles)
//! 4. Run-length (no 3 consecutive same-type shifts)
//!
//! The worker record is an explicit parameter; the rule set holds no
//! registry of its own.

use crate::models::{PlanningPeriod, Shift, Worker};

/// The rule that vetoed a candidate assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleBreach {
    /// The worker is unavailable for this period unit and shift type.
    Unavailable,
    /// The worker already holds a shift on this period unit.
    SamePeriodOverlap,
    /// The assignment would exceed the night-shift load cap.
    NightLoadExceeded,
    /// The assignment would create a run of same-type shifts.
    SameTypeRun,
}

/// Scope of the night-load cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NightScope {
    /// Nights counted within the candidate's ISO week; the cap may be
    /// reached but not exceeded (month planning).
    IsoWeek,
    /// Nights counted across the whole period; a night candidate is vetoed
    /// once the cap is reached (week-cycle planning).
    WholePeriod,
}

/// The hard-rule validator.
#[derive(Debug, Clone)]
pub struct RuleSet {
    night_scope: NightScope,
    night_limit: usize,
    run_length: usize,
}

impl RuleSet {
    /// Creates the rule set for a planning period.
    ///
    /// Month periods cap nights per ISO week; week cycles cap nights across
    /// the whole cycle. Both limits default to 3, as does the forbidden
    /// same-type run length.
    pub fn for_period(period: &PlanningPeriod) -> Self {
        let night_scope = match period {
            PlanningPeriod::Month { .. } => NightScope::IsoWeek,
            PlanningPeriod::WeekCycle => NightScope::WholePeriod,
        };
        Self {
            night_scope,
            night_limit: 3,
            run_length: 3,
        }
    }

    /// Checks a candidate assignment against all rules.
    ///
    /// `held` is the worker's current assignment list. Returns the first
    /// breached rule, or `None` if the candidate passes.
    pub fn check(&self, worker: &Worker, held: &[Shift], candidate: &Shift) -> Option<RuleBreach> {
        if !worker.is_available(&candidate.period, candidate.shift_type) {
            return Some(RuleBreach::Unavailable);
        }

        if held.iter().any(|s| s.period == candidate.period) {
            return Some(RuleBreach::SamePeriodOverlap);
        }

        if self.night_load_breached(held, candidate) {
            return Some(RuleBreach::NightLoadExceeded);
        }

        if self.run_length_breached(held, candidate) {
            return Some(RuleBreach::SameTypeRun);
        }

        None
    }

    /// Whether assigning `candidate` to `worker` would violate any rule.
    pub fn violates(&self, worker: &Worker, held: &[Shift], candidate: &Shift) -> bool {
        self.check(worker, held, candidate).is_some()
    }

    fn night_load_breached(&self, held: &[Shift], candidate: &Shift) -> bool {
        match self.night_scope {
            NightScope::IsoWeek => {
                let mut nights = held
                    .iter()
                    .filter(|s| s.week == candidate.week && s.is_night())
                    .count();
                if candidate.is_night() {
                    nights += 1;
                }
                nights > self.night_limit
            }
            NightScope::WholePeriod => {
                candidate.is_night()
                    && held.iter().filter(|s| s.is_night()).count() >= self.night_limit
            }
        }
    }

    fn run_length_breached(&self, held: &[Shift], candidate: &Shift) -> bool {
        // Period keys in held + candidate are distinct once the overlap
        // rule has passed, so catalog position order equals period order.
        let mut ordered: Vec<&Shift> = held.iter().collect();
        ordered.push(candidate);
        ordered.sort_by_key(|s| s.position);

        ordered.windows(self.run_length).any(|run| {
            let first = run[0].shift_type;
            run.iter().all(|s| s.shift_type == first)
        })
    }
}
