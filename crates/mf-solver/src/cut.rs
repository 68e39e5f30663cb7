//! Minimum cut extraction from a saturated residual network.

use mf_core::{Capacity, NodeId, checked_sum};
use mf_graph::{EdgeRef, ResidualNetwork};

use crate::error::{SolverError, SolverResult};

/// Source side of a cut plus the forward edges leaving it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinCut {
    /// Nodes reachable from the source, in index order.
    pub source_side: Vec<NodeId>,
    /// Forward edges from the source side to the rest, in insertion order.
    pub cut_edges: Vec<EdgeRef>,
    /// Sum of `cut_edges` capacities.
    pub capacity: Capacity,
}

impl MinCut {
    pub fn contains(&self, node: NodeId) -> bool {
        self.source_side.binary_search(&node).is_ok()
    }
}

/// Cut induced by the nodes reachable from `source` over positive residual
/// capacity.
///
/// After a completed solve its capacity equals the maximum flow value. On a
/// network with non-maximal flow the same routine still returns a valid cut,
/// just not a minimum one.
pub fn min_cut(network: &ResidualNetwork, source: NodeId) -> SolverResult<MinCut> {
    if !network.contains(source) {
        return Err(SolverError::InvalidArgument {
            what: format!("source node {} is out of range", source),
        });
    }

    let mut reachable = vec![false; network.node_count()];
    reachable[source.slot()] = true;
    let mut pending = vec![source];
    while let Some(node) = pending.pop() {
        for edge in network.edges(node) {
            let next = edge.to();
            if edge.residual_capacity() > 0 && !reachable[next.slot()] {
                reachable[next.slot()] = true;
                pending.push(next);
            }
        }
    }

    let source_side: Vec<NodeId> = network.nodes().filter(|n| reachable[n.slot()]).collect();
    let cut_edges: Vec<EdgeRef> = network
        .forward_edges()
        .iter()
        .copied()
        .filter(|&r| {
            network
                .edge(r)
                .is_some_and(|e| reachable[r.node.slot()] && !reachable[e.to().slot()])
        })
        .collect();
    let capacity = checked_sum(
        cut_edges
            .iter()
            .filter_map(|&r| network.edge(r).map(|e| e.capacity())),
        "cut capacity",
    )?;

    Ok(MinCut {
        source_side,
        cut_edges,
        capacity,
    })
}
