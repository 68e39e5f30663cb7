//! High-level solver interface.

use mf_core::{Capacity, NodeId, UNBOUNDED, checked_add};
use mf_graph::{EdgeRef, ResidualNetwork, validate};
use tracing::{debug, info, warn};

use crate::error::{SolverError, SolverResult};
use crate::path::{Augmentation, VisitMarks, find_augmenting_path};

/// Solver configuration.
#[derive(Debug, Clone, Default)]
pub struct SolveConfig {
    /// Maximum number of augmentations before giving up (`None` = no cap)
    pub max_iterations: Option<usize>,
    /// Keep every augmenting path in the solution
    pub record_trace: bool,
    /// Check pairing, capacity bounds and conservation after termination
    pub verify: bool,
}

/// Flow carried by one caller-inserted edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeFlow {
    pub edge: EdgeRef,
    pub from: NodeId,
    pub to: NodeId,
    pub capacity: Capacity,
    pub flow: Capacity,
}

/// Result of a completed solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowSolution {
    /// Maximum flow value
    pub value: Capacity,
    /// Number of augmenting paths applied
    pub iterations: usize,
    /// Per-edge flows in insertion order
    pub edge_flows: Vec<EdgeFlow>,
    /// Applied paths, empty unless `record_trace` was set
    pub trace: Vec<Augmentation>,
}

#[derive(Debug, Clone)]
pub enum SolveProgressEvent {
    Augmented {
        iteration: usize,
        bottleneck: Capacity,
        total: Capacity,
    },
    Terminated {
        iterations: usize,
        total: Capacity,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SolverState {
    Searching,
    Terminated,
}

/// Compute the maximum flow value from `source` to `sink`.
pub fn max_flow(
    network: &mut ResidualNetwork,
    source: NodeId,
    sink: NodeId,
) -> SolverResult<Capacity> {
    solve(network, source, sink, &SolveConfig::default()).map(|s| s.value)
}

/// Solve and return the flow value together with the per-edge assignment.
///
/// Flows are reset before searching, so solving the same network twice gives
/// identical results. On error the network's flows are unspecified and no
/// value is returned.
pub fn solve(
    network: &mut ResidualNetwork,
    source: NodeId,
    sink: NodeId,
    config: &SolveConfig,
) -> SolverResult<FlowSolution> {
    solve_with_progress(network, source, sink, config, None)
}

pub fn solve_with_progress(
    network: &mut ResidualNetwork,
    source: NodeId,
    sink: NodeId,
    config: &SolveConfig,
    mut progress: Option<&mut dyn FnMut(SolveProgressEvent)>,
) -> SolverResult<FlowSolution> {
    check_endpoints(network, source, sink)?;
    network.reset_flows();

    let mut visited = VisitMarks::new(network.node_count());
    let mut total: Capacity = 0;
    let mut iterations = 0;
    let mut trace = Vec::new();
    let mut state = SolverState::Searching;

    while state == SolverState::Searching {
        visited.reset();
        match find_augmenting_path(network, source, sink, &mut visited, UNBOUNDED)? {
            Some(aug) if aug.bottleneck > 0 => {
                if let Some(limit) = config.max_iterations
                    && iterations >= limit
                {
                    warn!(limit, total, "iteration limit reached before termination");
                    return Err(SolverError::IterationLimit { limit });
                }
                total = checked_add(total, aug.bottleneck, "total flow")?;
                iterations += 1;
                debug!(
                    iteration = iterations,
                    bottleneck = aug.bottleneck,
                    total,
                    hops = aug.edges.len(),
                    "augmenting path applied"
                );
                if let Some(cb) = progress.as_mut() {
                    cb(SolveProgressEvent::Augmented {
                        iteration: iterations,
                        bottleneck: aug.bottleneck,
                        total,
                    });
                }
                if config.record_trace {
                    trace.push(aug);
                }
            }
            _ => state = SolverState::Terminated,
        }
    }

    info!(value = total, iterations, "maximum flow found");
    if let Some(cb) = progress.as_mut() {
        cb(SolveProgressEvent::Terminated { iterations, total });
    }

    if config.verify {
        verify(network, source, sink, total)?;
    }

    Ok(FlowSolution {
        value: total,
        iterations,
        edge_flows: edge_flows(network),
        trace,
    })
}

/// Current flow on every caller-inserted edge, in insertion order.
pub fn edge_flows(network: &ResidualNetwork) -> Vec<EdgeFlow> {
    network
        .forward_edges()
        .iter()
        .filter_map(|&edge| {
            network.edge(edge).map(|e| EdgeFlow {
                edge,
                from: edge.node,
                to: e.to(),
                capacity: e.capacity(),
                flow: e.flow(),
            })
        })
        .collect()
}

fn check_endpoints(network: &ResidualNetwork, source: NodeId, sink: NodeId) -> SolverResult<()> {
    for (role, node) in [("source", source), ("sink", sink)] {
        if !network.contains(node) {
            return Err(SolverError::InvalidArgument {
                what: format!(
                    "{} node {} is out of range (network has {} nodes)",
                    role,
                    node,
                    network.node_count()
                ),
            });
        }
    }
    if source == sink {
        return Err(SolverError::InvalidArgument {
            what: format!("source and sink are the same node {}", source),
        });
    }
    Ok(())
}

fn verify(
    network: &ResidualNetwork,
    source: NodeId,
    sink: NodeId,
    total: Capacity,
) -> SolverResult<()> {
    validate::check_flow(network, source, sink)?;
    let arrived = validate::net_inflow(network, sink);
    if arrived != i128::from(total) {
        return Err(SolverError::Invariant {
            what: format!("sink receives {} but solver reported {}", arrived, total),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mf_graph::NetworkBuilder;

    fn build(nodes: usize, edges: &[(u32, u32, Capacity)]) -> ResidualNetwork {
        NetworkBuilder::from_edges(nodes, edges.iter().copied())
            .build()
            .unwrap()
    }

    fn ends(net: &ResidualNetwork, s: u32, t: u32) -> (NodeId, NodeId) {
        (net.node(s).unwrap(), net.node(t).unwrap())
    }

    #[test]
    fn single_edge() {
        let mut net = build(2, &[(0, 1, 5)]);
        let (s, t) = ends(&net, 0, 1);
        assert_eq!(max_flow(&mut net, s, t).unwrap(), 5);
    }

    #[test]
    fn source_equal_to_sink_rejected() {
        let mut net = build(2, &[(0, 1, 5)]);
        let s = net.node(0).unwrap();
        let err = max_flow(&mut net, s, s).unwrap_err();
        assert!(matches!(err, SolverError::InvalidArgument { .. }));
    }

    #[test]
    fn out_of_range_endpoint_rejected() {
        let mut net = build(2, &[(0, 1, 5)]);
        let s = net.node(0).unwrap();
        let err = max_flow(&mut net, s, NodeId::from_index(2)).unwrap_err();
        assert!(err.to_string().contains("sink node 2"));
    }

    #[test]
    fn total_overflow_is_detected() {
        let mut net = build(3, &[(0, 2, i64::MAX), (0, 1, 1), (1, 2, 1)]);
        let (s, t) = ends(&net, 0, 2);
        let err = max_flow(&mut net, s, t).unwrap_err();
        assert!(matches!(err, SolverError::ArithmeticOverflow { .. }));
    }

    #[test]
    fn iteration_limit_is_enforced() {
        // Two disjoint paths need two augmentations.
        let mut net = build(4, &[(0, 1, 1), (1, 3, 1), (0, 2, 1), (2, 3, 1)]);
        let (s, t) = ends(&net, 0, 3);

        let capped = SolveConfig {
            max_iterations: Some(1),
            ..Default::default()
        };
        assert_eq!(
            solve(&mut net, s, t, &capped).unwrap_err(),
            SolverError::IterationLimit { limit: 1 }
        );

        let exact = SolveConfig {
            max_iterations: Some(2),
            ..Default::default()
        };
        assert_eq!(solve(&mut net, s, t, &exact).unwrap().value, 2);
    }

    #[test]
    fn trace_and_progress_are_reported() {
        let mut net = build(4, &[(0, 1, 2), (1, 3, 2), (0, 2, 3), (2, 3, 3)]);
        let (s, t) = ends(&net, 0, 3);
        let config = SolveConfig {
            record_trace: true,
            verify: true,
            ..Default::default()
        };

        let mut events = Vec::new();
        let solution =
            solve_with_progress(&mut net, s, t, &config, Some(&mut |e| events.push(e))).unwrap();

        assert_eq!(solution.value, 5);
        assert_eq!(solution.iterations, 2);
        let bottlenecks: Vec<Capacity> = solution.trace.iter().map(|a| a.bottleneck).collect();
        assert_eq!(bottlenecks, vec![2, 3]);
        assert_eq!(events.len(), 3);
        assert!(matches!(
            events.last(),
            Some(SolveProgressEvent::Terminated {
                iterations: 2,
                total: 5
            })
        ));
    }

    #[test]
    fn repeated_solves_reset_flows() {
        let mut net = build(2, &[(0, 1, 5)]);
        let (s, t) = ends(&net, 0, 1);
        let first = solve(&mut net, s, t, &SolveConfig::default()).unwrap();
        let second = solve(&mut net, s, t, &SolveConfig::default()).unwrap();
        assert_eq!(first, second);
        assert_eq!(second.edge_flows[0].flow, 5);
    }
}
