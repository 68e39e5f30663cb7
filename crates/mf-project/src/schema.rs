//! Network file schema definitions.

use mf_core::Capacity;
use serde::{Deserialize, Serialize};

pub const LATEST_VERSION: u32 = 1;

/// A flow network with its designated terminals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NetworkFile {
    pub version: u32,
    pub name: String,
    pub node_count: usize,
    pub source: u32,
    pub sink: u32,
    /// Edges in insertion order; the order decides which paths are tried first.
    #[serde(default)]
    pub edges: Vec<EdgeDef>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct EdgeDef {
    pub from: u32,
    pub to: u32,
    pub capacity: Capacity,
}

impl NetworkFile {
    pub fn new(name: impl Into<String>, node_count: usize, source: u32, sink: u32) -> Self {
        Self {
            version: LATEST_VERSION,
            name: name.into(),
            node_count,
            source,
            sink,
            edges: Vec::new(),
        }
    }

    pub fn with_edges<I>(mut self, edges: I) -> Self
    where
        I: IntoIterator<Item = (u32, u32, Capacity)>,
    {
        self.edges
            .extend(edges.into_iter().map(|(from, to, capacity)| EdgeDef {
                from,
                to,
                capacity,
            }));
        self
    }
}
