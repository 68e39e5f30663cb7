//! Augmenting path search.
//!
//! Depth-first, first feasible edge in insertion order. The traversal uses an
//! explicit stack of `(node, edge cursor, bound)` frames so depth is limited by
//! heap memory rather than the call stack.

use mf_core::{Capacity, NodeId};
use mf_graph::{EdgeRef, ResidualNetwork};

use crate::error::SolverResult;

/// Per-attempt visited set, reused across attempts to avoid reallocation.
#[derive(Debug, Clone)]
pub struct VisitMarks {
    marks: Vec<bool>,
}

impl VisitMarks {
    pub fn new(node_count: usize) -> Self {
        Self {
            marks: vec![false; node_count],
        }
    }

    /// Clear all marks for a fresh attempt.
    pub fn reset(&mut self) {
        self.marks.fill(false);
    }

    pub fn mark(&mut self, node: NodeId) {
        if let Some(m) = self.marks.get_mut(node.slot()) {
            *m = true;
        }
    }

    pub fn is_marked(&self, node: NodeId) -> bool {
        self.marks.get(node.slot()).copied().unwrap_or(false)
    }
}

/// One applied augmenting path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Augmentation {
    /// Amount pushed along the path.
    pub bottleneck: Capacity,
    /// Nodes from source to sink.
    pub path: Vec<NodeId>,
    /// Residual edges taken, one per hop.
    pub edges: Vec<EdgeRef>,
}

#[derive(Debug)]
struct Frame {
    node: NodeId,
    /// Next adjacency slot to try; the edge taken to the child is `cursor - 1`.
    cursor: usize,
    bound: Capacity,
}

/// Find one augmenting path from `source` to `sink` and push its bottleneck.
///
/// `visited` must be reset by the caller before each attempt. Nodes marked
/// while exploring a dead end stay marked for the rest of the attempt.
/// Returns `None` when the sink is unreachable through positive residual
/// capacity. When `source == sink` the search ends immediately with
/// `ceiling` as bottleneck and no edges; callers are expected to reject that
/// case beforehand.
pub fn find_augmenting_path(
    network: &mut ResidualNetwork,
    source: NodeId,
    sink: NodeId,
    visited: &mut VisitMarks,
    ceiling: Capacity,
) -> SolverResult<Option<Augmentation>> {
    if ceiling <= 0 {
        return Ok(None);
    }

    let mut stack = vec![Frame {
        node: source,
        cursor: 0,
        bound: ceiling,
    }];
    visited.mark(source);

    loop {
        let Some(top) = stack.last_mut() else {
            return Ok(None);
        };
        if top.node == sink {
            break;
        }

        let edges = network.edges(top.node);
        let mut child = None;
        while top.cursor < edges.len() {
            let edge = &edges[top.cursor];
            top.cursor += 1;
            let residual = edge.residual_capacity();
            if residual > 0 && !visited.is_marked(edge.to()) {
                child = Some(Frame {
                    node: edge.to(),
                    cursor: 0,
                    bound: top.bound.min(residual),
                });
                break;
            }
        }

        match child {
            Some(frame) => {
                visited.mark(frame.node);
                stack.push(frame);
            }
            // Dead end: backtrack, the parent resumes at its cursor.
            None => {
                stack.pop();
            }
        }
    }

    let bottleneck = stack.last().map_or(0, |f| f.bound);
    let path: Vec<NodeId> = stack.iter().map(|f| f.node).collect();
    let hops = stack.len().saturating_sub(1);
    let edges: Vec<EdgeRef> = stack[..hops]
        .iter()
        .map(|f| EdgeRef {
            node: f.node,
            slot: f.cursor - 1,
        })
        .collect();

    // Deepest edge first, matching the unwinding order of a recursive search.
    for &edge in edges.iter().rev() {
        network.push_flow(edge, bottleneck)?;
    }

    Ok(Some(Augmentation {
        bottleneck,
        path,
        edges,
    }))
}
