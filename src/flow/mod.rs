//! Capacity network and max-flow feasibility bound.
//!
//! Provides the flow-network view of a rostering problem and an
//! Edmonds-Karp solver over it. The resulting max flow is an upper bound
//! on the number of assignable shifts; it encodes availability and count
//! capacities only, none of the sequencing rules, and is reported alongside
//! the greedy roster rather than reconciled with it.
//!
//! # References
//!
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 26
//! - Edmonds & Karp (1972), "Theoretical Improvements in Algorithmic
//!   Efficiency for Network Flow Problems"

mod network;
mod solver;

pub use network::FlowNetwork;
pub use solver::{solve_max_flow, MaxFlowSolver};
