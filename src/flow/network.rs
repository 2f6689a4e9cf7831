//! Flow network construction.
//!
//! Builds the capacity graph for a rostering problem:
//! source → worker edges carry the worker's assignable-shift budget,
//! worker → shift edges (capacity 1) exist where the worker is available,
//! shift → sink edges (capacity 1) enforce single staffing.
//!
//! # Node Layout
//! Node 0 is the source, nodes `1..=W` the workers in input order, nodes
//! `W+1..=W+S` the shifts in catalog order, and the last node the sink.

use std::collections::HashSet;

use crate::models::{PlanningPeriod, Shift, Worker};

/// A capacitated directed graph over {source, workers, shifts, sink}.
///
/// Capacities are non-negative by type; the graph is immutable during
/// solving (the solver works on its own residual copy).
#[derive(Debug, Clone)]
pub struct FlowNetwork {
    capacity: Vec<Vec<u32>>,
    worker_count: usize,
    shift_count: usize,
}

impl FlowNetwork {
    /// Builds the flow network for a rostering problem.
    ///
    /// Source capacities are `weekly_cap × weeks_in_period` for month
    /// periods (weeks_in_period = distinct ISO weeks in the catalog) and
    /// the flat `weekly_cap` for week cycles. A worker → shift edge exists
    /// only where the worker is available for that period unit and type.
    pub fn build(workers: &[Worker], shifts: &[Shift], period: &PlanningPeriod) -> Self {
        let worker_count = workers.len();
        let shift_count = shifts.len();
        let node_count = worker_count + shift_count + 2;
        let mut capacity = vec![vec![0u32; node_count]; node_count];

        let weeks_in_period = match period {
            PlanningPeriod::Month { .. } => {
                shifts.iter().map(|s| s.week).collect::<HashSet<_>>().len() as u32
            }
            PlanningPeriod::WeekCycle => 1,
        };

        let source = 0;
        let sink = node_count - 1;

        for (w, worker) in workers.iter().enumerate() {
            let worker_node = 1 + w;
            capacity[source][worker_node] = worker.weekly_cap * weeks_in_period;
            for (s, shift) in shifts.iter().enumerate() {
                if worker.is_available(&shift.period, shift.shift_type) {
                    capacity[worker_node][1 + worker_count + s] = 1;
                }
            }
        }

        for s in 0..shift_count {
            capacity[1 + worker_count + s][sink] = 1;
        }

        Self {
            capacity,
            worker_count,
            shift_count,
        }
    }

    /// Total number of nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.worker_count + self.shift_count + 2
    }

    /// The source node index.
    #[inline]
    pub fn source(&self) -> usize {
        0
    }

    /// The sink node index.
    #[inline]
    pub fn sink(&self) -> usize {
        self.node_count() - 1
    }

    /// Node index of the `i`-th worker (input order).
    #[inline]
    pub fn worker_node(&self, i: usize) -> usize {
        1 + i
    }

    /// Node index of the `i`-th shift (catalog order).
    #[inline]
    pub fn shift_node(&self, i: usize) -> usize {
        1 + self.worker_count + i
    }

    /// Capacity of the edge `u → v` (0 = no edge).
    #[inline]
    pub fn capacity(&self, u: usize, v: usize) -> u32 {
        self.capacity[u][v]
    }

    /// Overwrites the capacity of the edge `u → v`.
    pub fn set_capacity(&mut self, u: usize, v: usize, capacity: u32) {
        self.capacity[u][v] = capacity;
    }

    /// A copy of the full capacity matrix (the solver's residual seed).
    pub(crate) fn capacity_matrix(&self) -> Vec<Vec<u32>> {
        self.capacity.clone()
    }
}
