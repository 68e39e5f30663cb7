//! mf-core: shared foundation for the max-flow workspace.
//!
//! Contains:
//! - ids (compact node identifiers)
//! - numeric (capacity type + checked flow arithmetic)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{MfError, MfResult};
pub use ids::*;
pub use numeric::*;
