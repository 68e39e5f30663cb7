//! Graph-specific error types.

use mf_core::{Capacity, MfError, NodeId};

use crate::network::EdgeRef;

pub type GraphResult<T> = Result<T, GraphError>;

/// Network construction and validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A network needs at least one node.
    EmptyNetwork,

    /// Node count does not fit the compact node id space.
    TooManyNodes { count: usize },

    /// A node index is outside `[0, node_count)`.
    NodeOutOfRange { node: u32, node_count: usize },

    /// An edge was given a negative capacity.
    NegativeCapacity { from: u32, to: u32, capacity: Capacity },

    /// An edge handle does not point at an edge of this network.
    EdgeNotFound { edge: EdgeRef },

    /// An edge and its reverse companion do not point at each other.
    BrokenPairing { edge: EdgeRef },

    /// An edge's flow left `[.., capacity]` (or went negative on a forward edge).
    CapacityViolation {
        edge: EdgeRef,
        flow: Capacity,
        capacity: Capacity,
    },

    /// Inflow and outflow differ at an interior node.
    ConservationViolation {
        node: NodeId,
        inflow: i128,
        outflow: i128,
    },
}

impl GraphError {
    /// True for errors caused by caller input rather than a corrupted network.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            GraphError::EmptyNetwork
                | GraphError::TooManyNodes { .. }
                | GraphError::NodeOutOfRange { .. }
                | GraphError::NegativeCapacity { .. }
                | GraphError::EdgeNotFound { .. }
        )
    }
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::EmptyNetwork => write!(f, "Network must contain at least one node"),
            GraphError::TooManyNodes { count } => {
                write!(f, "Network has {} nodes, more than ids can address", count)
            }
            GraphError::NodeOutOfRange { node, node_count } => {
                write!(
                    f,
                    "Node {} is out of range (network has {} nodes)",
                    node, node_count
                )
            }
            GraphError::NegativeCapacity { from, to, capacity } => {
                write!(
                    f,
                    "Edge {} -> {} has negative capacity {}",
                    from, to, capacity
                )
            }
            GraphError::EdgeNotFound { edge } => {
                write!(f, "Edge {} does not exist", edge)
            }
            GraphError::BrokenPairing { edge } => {
                write!(f, "Edge {} is not paired with its reverse edge", edge)
            }
            GraphError::CapacityViolation {
                edge,
                flow,
                capacity,
            } => {
                write!(
                    f,
                    "Edge {} carries flow {} outside its capacity {}",
                    edge, flow, capacity
                )
            }
            GraphError::ConservationViolation {
                node,
                inflow,
                outflow,
            } => {
                write!(
                    f,
                    "Node {} receives {} but sends {}",
                    node, inflow, outflow
                )
            }
        }
    }
}

impl std::error::Error for GraphError {}

impl From<GraphError> for MfError {
    fn from(err: GraphError) -> Self {
        match err {
            GraphError::NodeOutOfRange { node, node_count } => MfError::IndexOob {
                what: "node",
                index: node as usize,
                len: node_count,
            },
            other if other.is_invalid_argument() => MfError::InvalidArg {
                what: other.to_string(),
            },
            other => MfError::Invariant {
                what: other.to_string(),
            },
        }
    }
}
