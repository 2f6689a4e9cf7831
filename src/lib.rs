//! Duty roster construction.
//!
//! Assigns discrete day/night duty shifts to a pool of workers over a
//! fixed planning period (one calendar month or one generic week cycle),
//! subject to per-worker availability, weekly/monthly workload limits, and
//! fairness rules (no double-booking a period unit, capped night-shift
//! load, no long runs of one shift type).
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Worker`, `Shift`, `PlanningPeriod`,
//!   `Roster`, `Diagnostic`
//! - **`validation`**: Input integrity checks (duplicate IDs, malformed
//!   periods)
//! - **`catalog`**: Shift catalog generation from a period descriptor
//! - **`flow`**: Capacity network and Edmonds-Karp max-flow feasibility
//!   bound
//! - **`engine`**: Hard-rule validation and the greedy assignment engine
//! - **`report`**: Textual report rendering
//!
//! # Architecture
//!
//! The flow bound and the greedy roster are computed independently: the
//! network encodes availability and count capacities only, so its max flow
//! is a theoretical ceiling on assignable shifts, while the engine builds
//! the actual roster under the full rule set. The two numbers are reported
//! side by side and deliberately never reconciled.
//!
//! ```
//! use duty_roster::catalog;
//! use duty_roster::engine::AssignmentEngine;
//! use duty_roster::flow::{solve_max_flow, FlowNetwork};
//! use duty_roster::models::{PlanningPeriod, Worker};
//! use duty_roster::validation::validate_input;
//!
//! let period = PlanningPeriod::week_cycle();
//! let workers = vec![Worker::new("Alice", 4), Worker::new("Bob", 3)];
//! validate_input(&workers, &period).unwrap();
//!
//! let shifts = catalog::generate(&period).unwrap();
//! let bound = solve_max_flow(&FlowNetwork::build(&workers, &shifts, &period));
//! let roster = AssignmentEngine::for_period(&period).assign(&workers, &shifts);
//!
//! assert_eq!(bound, 7); // both budgets saturate
//! assert_eq!(roster.assignment_count(), 7);
//! let text = duty_roster::report::render(&workers, &shifts, &roster, bound);
//! assert!(text.contains("Max flow"));
//! ```
//!
//! # References
//!
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 26 (Max Flow)
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod catalog;
pub mod engine;
pub mod flow;
pub mod models;
pub mod report;
pub mod validation;
