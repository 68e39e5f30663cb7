//! mf-graph: residual network layer for the max-flow solver.
//!
//! Provides:
//! - Residual network with paired forward/reverse edges
//! - Builder that validates a caller's raw edge list before insertion
//! - Invariant checks (pairing, capacity bounds, flow conservation)
//!
//! # Example
//!
//! ```
//! use mf_graph::NetworkBuilder;
//!
//! let mut builder = NetworkBuilder::new(3);
//! builder.add_edge(0, 1, 5);
//! builder.add_edge(1, 2, 4);
//! let network = builder.build().unwrap();
//!
//! assert_eq!(network.node_count(), 3);
//! assert_eq!(network.edge_count(), 2);
//! ```

pub mod builder;
pub mod error;
pub mod network;
pub mod validate;

// Re-exports for ergonomics
pub use builder::{EdgeSpec, NetworkBuilder};
pub use error::{GraphError, GraphResult};
pub use network::{Edge, EdgeRef, ResidualNetwork};
