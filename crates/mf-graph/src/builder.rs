//! Network builder from a caller's raw edge list.

use mf_core::Capacity;

use crate::error::GraphResult;
use crate::network::{EdgeRef, ResidualNetwork};
use crate::validate;

/// One `(from, to, capacity)` triple as supplied by a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeSpec {
    pub from: u32,
    pub to: u32,
    pub capacity: Capacity,
}

/// Builder for constructing a residual network from raw node indices.
///
/// Collect edges with `add_edge`, then call `build()` to validate the whole
/// list and insert it in order.
#[derive(Debug, Default, Clone)]
pub struct NetworkBuilder {
    node_count: usize,
    edges: Vec<EdgeSpec>,
}

impl NetworkBuilder {
    /// Create a builder for a network with `node_count` nodes.
    pub fn new(node_count: usize) -> Self {
        Self {
            node_count,
            edges: Vec::new(),
        }
    }

    /// Builder pre-filled from a sequence of `(from, to, capacity)` triples.
    pub fn from_edges<I>(node_count: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = (u32, u32, Capacity)>,
    {
        let mut builder = Self::new(node_count);
        for (from, to, capacity) in edges {
            builder.add_edge(from, to, capacity);
        }
        builder
    }

    /// Queue an edge and return its position in insertion order.
    ///
    /// The position matches the index into `ResidualNetwork::forward_edges`
    /// after `build()`.
    pub fn add_edge(&mut self, from: u32, to: u32, capacity: Capacity) -> usize {
        self.edges.push(EdgeSpec { from, to, capacity });
        self.edges.len() - 1
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn edges(&self) -> &[EdgeSpec] {
        &self.edges
    }

    /// Validate every queued edge, then build the network.
    pub fn build(self) -> GraphResult<ResidualNetwork> {
        validate::validate_edge_specs(self.node_count, &self.edges)?;

        let mut network = ResidualNetwork::new(self.node_count)?;
        for spec in &self.edges {
            insert(&mut network, spec)?;
        }
        Ok(network)
    }
}

fn insert(network: &mut ResidualNetwork, spec: &EdgeSpec) -> GraphResult<EdgeRef> {
    let from = network.node(spec.from)?;
    let to = network.node(spec.to)?;
    network.add_edge(from, to, spec.capacity)
}
