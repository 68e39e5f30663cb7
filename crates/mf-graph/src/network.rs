//! Residual network: adjacency lists of paired forward/reverse edges.

use mf_core::{Capacity, MfError, MfResult, NodeId, checked_add, checked_sub};

use crate::error::{GraphError, GraphResult};

/// Handle to an edge: owning node plus position in that node's adjacency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeRef {
    pub node: NodeId,
    pub slot: usize,
}

impl std::fmt::Display for EdgeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.node, self.slot)
    }
}

/// A directed arc of the residual network.
///
/// Forward edges are the ones the caller inserted. Each has a reverse
/// companion with capacity 0 whose flow mirrors the forward flow negated, so
/// its residual capacity is the amount that can be pushed back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub(crate) to: NodeId,
    pub(crate) capacity: Capacity,
    pub(crate) flow: Capacity,
    pub(crate) rev: usize,
    pub(crate) forward: bool,
}

impl Edge {
    pub fn to(&self) -> NodeId {
        self.to
    }

    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    pub fn flow(&self) -> Capacity {
        self.flow
    }

    /// Position of the paired edge in the target node's adjacency list.
    pub fn reverse_index(&self) -> usize {
        self.rev
    }

    /// True for caller-inserted edges, false for reverse companions.
    pub fn is_forward(&self) -> bool {
        self.forward
    }

    /// Remaining pushable amount, `capacity - flow`.
    pub fn residual_capacity(&self) -> Capacity {
        // flow <= capacity is upheld by push_flow; clamp so a corrupted edge
        // is never traversable rather than reporting a negative residual.
        debug_assert!(self.flow <= self.capacity);
        self.capacity.saturating_sub(self.flow).max(0)
    }
}

/// Ordered adjacency lists, one per node.
///
/// Insertion order is the scan order of the path search and therefore decides
/// which augmenting path is found first.
#[derive(Debug, Clone)]
pub struct ResidualNetwork {
    adjacency: Vec<Vec<Edge>>,
    /// Forward edges in insertion order.
    forward_edges: Vec<EdgeRef>,
}

impl ResidualNetwork {
    /// Create a network with `node_count` isolated nodes.
    pub fn new(node_count: usize) -> GraphResult<Self> {
        if node_count == 0 {
            return Err(GraphError::EmptyNetwork);
        }
        if node_count > u32::MAX as usize {
            return Err(GraphError::TooManyNodes { count: node_count });
        }
        Ok(Self {
            adjacency: vec![Vec::new(); node_count],
            forward_edges: Vec::new(),
        })
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of caller-inserted edges (reverse companions not counted).
    pub fn edge_count(&self) -> usize {
        self.forward_edges.len()
    }

    /// Resolve a raw node index, checking it against the node count.
    pub fn node(&self, index: u32) -> GraphResult<NodeId> {
        if (index as usize) < self.node_count() {
            Ok(NodeId::from_index(index))
        } else {
            Err(GraphError::NodeOutOfRange {
                node: index,
                node_count: self.node_count(),
            })
        }
    }

    pub fn contains(&self, node: NodeId) -> bool {
        node.slot() < self.node_count()
    }

    /// Iterate over all node IDs in index order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.node_count() as u32).map(NodeId::from_index)
    }

    /// Insert `from -> to` with the given capacity plus its reverse companion.
    ///
    /// Self-loops are accepted; they never lie on an augmenting path because
    /// the search does not revisit a node.
    pub fn add_edge(
        &mut self,
        from: NodeId,
        to: NodeId,
        capacity: Capacity,
    ) -> GraphResult<EdgeRef> {
        for node in [from, to] {
            if !self.contains(node) {
                return Err(GraphError::NodeOutOfRange {
                    node: node.index(),
                    node_count: self.node_count(),
                });
            }
        }
        if capacity < 0 {
            return Err(GraphError::NegativeCapacity {
                from: from.index(),
                to: to.index(),
                capacity,
            });
        }

        let forward_slot = self.adjacency[from.slot()].len();
        // A self-loop puts both edges in one list, the reverse right after.
        let reverse_slot = self.adjacency[to.slot()].len() + usize::from(from == to);

        self.adjacency[from.slot()].push(Edge {
            to,
            capacity,
            flow: 0,
            rev: reverse_slot,
            forward: true,
        });
        self.adjacency[to.slot()].push(Edge {
            to: from,
            capacity: 0,
            flow: 0,
            rev: forward_slot,
            forward: false,
        });

        let edge = EdgeRef {
            node: from,
            slot: forward_slot,
        };
        self.forward_edges.push(edge);
        Ok(edge)
    }

    /// Adjacency list of a node (empty for unknown nodes).
    pub fn edges(&self, node: NodeId) -> &[Edge] {
        self.adjacency
            .get(node.slot())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn edge(&self, edge: EdgeRef) -> Option<&Edge> {
        self.adjacency.get(edge.node.slot())?.get(edge.slot)
    }

    /// Handle of the companion edge paired with `edge`.
    pub fn reverse_of(&self, edge: EdgeRef) -> Option<EdgeRef> {
        let e = self.edge(edge)?;
        Some(EdgeRef {
            node: e.to,
            slot: e.rev,
        })
    }

    /// Caller-inserted edges in insertion order.
    pub fn forward_edges(&self) -> &[EdgeRef] {
        &self.forward_edges
    }

    /// Push `amount` along `edge`, mirroring it on the reverse companion.
    ///
    /// Both updates use checked arithmetic and are committed together; on
    /// error the network is unchanged.
    pub fn push_flow(&mut self, edge: EdgeRef, amount: Capacity) -> MfResult<()> {
        if amount < 0 {
            return Err(MfError::InvalidArg {
                what: format!("pushed amount must be non-negative, got {amount}"),
            });
        }
        let reverse = self
            .reverse_of(edge)
            .ok_or(GraphError::EdgeNotFound { edge })?;
        let (flow, capacity) = {
            let e = &self.adjacency[edge.node.slot()][edge.slot];
            (e.flow, e.capacity)
        };
        let new_flow = checked_add(flow, amount, "edge flow")?;
        if new_flow > capacity {
            return Err(GraphError::CapacityViolation {
                edge,
                flow: new_flow,
                capacity,
            }
            .into());
        }
        let reverse_flow = self
            .edge(reverse)
            .ok_or(GraphError::BrokenPairing { edge })?
            .flow;
        let new_reverse_flow = checked_sub(reverse_flow, amount, "reverse edge flow")?;

        self.adjacency[edge.node.slot()][edge.slot].flow = new_flow;
        self.adjacency[reverse.node.slot()][reverse.slot].flow = new_reverse_flow;
        Ok(())
    }

    /// Zero every flow, returning the network to its freshly built state.
    pub fn reset_flows(&mut self) {
        for list in &mut self.adjacency {
            for edge in list {
                edge.flow = 0;
            }
        }
    }
}
