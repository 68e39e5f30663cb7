//! Maximum flow solver using augmenting paths over a residual network.
//!
//! Each iteration runs a depth-first search that takes the first feasible
//! edge in insertion order, pushes the path's bottleneck along it, and stops
//! once no source-to-sink path with positive residual capacity remains. The
//! search is not a shortest-path search, so the iteration count can grow
//! with the flow value on unlucky graphs.

pub mod cut;
pub mod error;
pub mod path;
pub mod solve;

pub use cut::{MinCut, min_cut};
pub use error::{SolverError, SolverResult};
pub use path::{Augmentation, VisitMarks, find_augmenting_path};
pub use solve::{
    EdgeFlow, FlowSolution, SolveConfig, SolveProgressEvent, edge_flows, max_flow, solve,
    solve_with_progress,
};
