//! Edmonds-Karp maximum flow.
//!
//! # Algorithm
//!
//! Repeatedly find the fewest-edges augmenting path from source to sink by
//! breadth-first search over positive-residual edges, push the path's
//! bottleneck capacity along it (decrementing forward residuals and
//! incrementing reverse residuals, so later paths can cancel earlier
//! routing), and stop when the sink becomes unreachable. BFS path choice
//! bounds the number of augmentations, giving O(V * E^2) overall.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 26.2

use std::collections::VecDeque;

use super::FlowNetwork;

/// Edmonds-Karp solver over a private residual copy of a [`FlowNetwork`].
///
/// The caller's network is never mutated; the residual state lives for one
/// [`solve`](MaxFlowSolver::solve) call and is discarded with the solver.
#[derive(Debug)]
pub struct MaxFlowSolver {
    residual: Vec<Vec<u32>>,
    source: usize,
    sink: usize,
}

impl MaxFlowSolver {
    /// Creates a solver seeded with the network's capacities.
    ///
    /// Reverse residual edges start at 0 and exist only for flow
    /// cancellation.
    pub fn new(network: &FlowNetwork) -> Self {
        Self {
            residual: network.capacity_matrix(),
            source: network.source(),
            sink: network.sink(),
        }
    }

    /// Computes the maximum total flow from source to sink.
    ///
    /// The result is a feasibility upper bound on assignable shifts; it is
    /// advisory and never drives the actual assignment.
    pub fn solve(mut self) -> u32 {
        let mut total_flow = 0;

        while let Some(path) = self.augmenting_path() {
            // Bottleneck: minimum residual along the path.
            let bottleneck = path
                .iter()
                .map(|&(u, v)| self.residual[u][v])
                .fold(u32::MAX, u32::min);

            // Push the bottleneck: forward residuals down, reverse up.
            for &(u, v) in &path {
                self.residual[u][v] -= bottleneck;
                self.residual[v][u] += bottleneck;
            }

            total_flow += bottleneck;
        }

        total_flow
    }

    /// BFS for a fewest-edges source→sink path over positive-residual edges.
    ///
    /// Returns the path as `(u, v)` edges (sink-to-source order), or `None`
    /// when the sink is unreachable.
    fn augmenting_path(&self) -> Option<Vec<(usize, usize)>> {
        let n = self.residual.len();
        let mut parent: Vec<Option<usize>> = vec![None; n];
        let mut visited = vec![false; n];
        let mut queue = VecDeque::new();

        visited[self.source] = true;
        queue.push_back(self.source);

        'search: while let Some(u) = queue.pop_front() {
            for v in 0..n {
                if !visited[v] && self.residual[u][v] > 0 {
                    visited[v] = true;
                    parent[v] = Some(u);
                    if v == self.sink {
                        break 'search;
                    }
                    queue.push_back(v);
                }
            }
        }

        if !visited[self.sink] {
            return None;
        }

        let mut edges = Vec::new();
        let mut v = self.sink;
        while let Some(u) = parent[v] {
            edges.push((u, v));
            v = u;
        }
        Some(edges)
    }
}

/// Computes the max-flow feasibility bound for a network.
pub fn solve_max_flow(network: &FlowNetwork) -> u32 {
    MaxFlowSolver::new(network).solve()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::models::{PeriodKey, PlanningPeriod, ShiftType, Worker};
    use chrono::Weekday;

    fn cycle_net(workers: &[Worker]) -> FlowNetwork {
        let shifts = catalog::generate(&PlanningPeriod::week_cycle()).unwrap();
        FlowNetwork::build(workers, &shifts, &PlanningPeriod::week_cycle())
    }

    /// Two workers (cap 2 each) over four fully-available unit shifts.
    fn small_net() -> FlowNetwork {
        let workers = vec![Worker::new("A", 2), Worker::new("B", 2)];
        let shifts: Vec<_> = catalog::generate(&PlanningPeriod::week_cycle())
            .unwrap()
            .into_iter()
            .take(4)
            .collect();
        FlowNetwork::build(&workers, &shifts, &PlanningPeriod::week_cycle())
    }

    #[test]
    fn test_saturates_min_of_source_and_sink_capacity() {
        let net = small_net();
        // min(total source capacity 4, total sink capacity 4) = 4.
        assert_eq!(solve_max_flow(&net), 4);
    }

    #[test]
    fn test_source_caps_bound_flow() {
        let workers = vec![Worker::new("A", 2)];
        let net = cycle_net(&workers);
        // 14 unit shifts but the single worker's budget is 2.
        assert_eq!(solve_max_flow(&net), 2);
    }

    #[test]
    fn test_sink_caps_bound_flow() {
        let workers = vec![Worker::new("A", 20), Worker::new("B", 20)];
        let net = cycle_net(&workers);
        // Budgets total 40 but only 14 unit shifts exist.
        assert_eq!(solve_max_flow(&net), 14);
    }

    #[test]
    fn test_unavailability_reduces_flow() {
        let workers = vec![Worker::new("A", 14)
            .unavailable_all_day(PeriodKey::Weekday(Weekday::Mon))
            .unavailable(PeriodKey::Weekday(Weekday::Tue), [ShiftType::Night])];
        let net = cycle_net(&workers);
        // 14 shifts minus 2 Monday shifts minus Tuesday night.
        assert_eq!(solve_max_flow(&net), 11);
    }

    #[test]
    fn test_monotonic_under_edge_removal() {
        let workers = vec![Worker::new("A", 3), Worker::new("B", 3)];
        let base = cycle_net(&workers);
        let base_flow = solve_max_flow(&base);

        // Removing any single worker→shift edge never increases the flow.
        for w in 0..workers.len() {
            for s in 0..14 {
                let (u, v) = (base.worker_node(w), base.shift_node(s));
                if base.capacity(u, v) == 0 {
                    continue;
                }
                let mut pruned = base.clone();
                pruned.set_capacity(u, v, 0);
                assert!(solve_max_flow(&pruned) <= base_flow);
            }
        }
    }

    #[test]
    fn test_solver_does_not_mutate_network() {
        let net = small_net();
        let before = net.capacity(net.source(), net.worker_node(0));
        let _ = solve_max_flow(&net);
        assert_eq!(net.capacity(net.source(), net.worker_node(0)), before);
    }

    #[test]
    fn test_disconnected_network_has_zero_flow() {
        let workers = vec![Worker::new("A", 4)
            .unavailable_all_day(PeriodKey::Weekday(Weekday::Mon))
            .unavailable_all_day(PeriodKey::Weekday(Weekday::Tue))
            .unavailable_all_day(PeriodKey::Weekday(Weekday::Wed))
            .unavailable_all_day(PeriodKey::Weekday(Weekday::Thu))
            .unavailable_all_day(PeriodKey::Weekday(Weekday::Fri))
            .unavailable_all_day(PeriodKey::Weekday(Weekday::Sat))
            .unavailable_all_day(PeriodKey::Weekday(Weekday::Sun))];
        let net = cycle_net(&workers);
        assert_eq!(solve_max_flow(&net), 0);
    }
}
