//! Network validation logic.

use mf_core::NodeId;

use crate::builder::EdgeSpec;
use crate::error::{GraphError, GraphResult};
use crate::network::{EdgeRef, ResidualNetwork};

/// Validate a raw edge list before anything is inserted.
pub(crate) fn validate_edge_specs(node_count: usize, edges: &[EdgeSpec]) -> GraphResult<()> {
    if node_count == 0 {
        return Err(GraphError::EmptyNetwork);
    }
    for spec in edges {
        for node in [spec.from, spec.to] {
            if node as usize >= node_count {
                return Err(GraphError::NodeOutOfRange { node, node_count });
            }
        }
        if spec.capacity < 0 {
            return Err(GraphError::NegativeCapacity {
                from: spec.from,
                to: spec.to,
                capacity: spec.capacity,
            });
        }
    }
    Ok(())
}

/// Every edge's companion must point back at it, with opposite direction
/// and the opposite forward/reverse role.
pub fn check_pairing(network: &ResidualNetwork) -> GraphResult<()> {
    for node in network.nodes() {
        for (slot, edge) in network.edges(node).iter().enumerate() {
            let here = EdgeRef { node, slot };
            let paired = network
                .reverse_of(here)
                .and_then(|r| network.edge(r).map(|e| (r, e)));
            let Some((reverse, companion)) = paired else {
                return Err(GraphError::BrokenPairing { edge: here });
            };
            let consistent = companion.to() == node
                && network.reverse_of(reverse) == Some(here)
                && companion.is_forward() != edge.is_forward()
                && companion.flow() == -edge.flow();
            if !consistent {
                return Err(GraphError::BrokenPairing { edge: here });
            }
        }
    }
    Ok(())
}

/// Forward edges must satisfy `0 <= flow <= capacity`.
pub fn check_capacity_bounds(network: &ResidualNetwork) -> GraphResult<()> {
    for &edge_ref in network.forward_edges() {
        let edge = network
            .edge(edge_ref)
            .ok_or(GraphError::EdgeNotFound { edge: edge_ref })?;
        if edge.flow() < 0 || edge.flow() > edge.capacity() {
            return Err(GraphError::CapacityViolation {
                edge: edge_ref,
                flow: edge.flow(),
                capacity: edge.capacity(),
            });
        }
    }
    Ok(())
}

/// Flow entering minus flow leaving `node`, over forward edges only.
pub fn net_inflow(network: &ResidualNetwork, node: NodeId) -> i128 {
    let (inflow, outflow) = throughput(network, node);
    inflow - outflow
}

/// Every node other than `source` and `sink` must pass on exactly what it
/// receives.
pub fn check_conservation(
    network: &ResidualNetwork,
    source: NodeId,
    sink: NodeId,
) -> GraphResult<()> {
    for node in network.nodes() {
        if node == source || node == sink {
            continue;
        }
        let (inflow, outflow) = throughput(network, node);
        if inflow != outflow {
            return Err(GraphError::ConservationViolation {
                node,
                inflow,
                outflow,
            });
        }
    }
    Ok(())
}

/// Run all flow invariant checks.
pub fn check_flow(network: &ResidualNetwork, source: NodeId, sink: NodeId) -> GraphResult<()> {
    check_pairing(network)?;
    check_capacity_bounds(network)?;
    check_conservation(network, source, sink)
}

// Sums in i128 so that no combination of i64 flows can overflow.
fn throughput(network: &ResidualNetwork, node: NodeId) -> (i128, i128) {
    let mut inflow = 0_i128;
    let mut outflow = 0_i128;
    for &edge_ref in network.forward_edges() {
        let Some(edge) = network.edge(edge_ref) else {
            continue;
        };
        // Self-loops count on both sides and cancel out.
        if edge.to() == node {
            inflow += i128::from(edge.flow());
        }
        if edge_ref.node == node {
            outflow += i128::from(edge.flow());
        }
    }
    (inflow, outflow)
}
