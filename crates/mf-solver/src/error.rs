//! Error types for solver operations.

use mf_core::MfError;
use mf_graph::GraphError;
use thiserror::Error;

/// Errors that can occur while computing a maximum flow.
///
/// No variant carries a partial result: a failed solve reports only why.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error("Invalid argument: {what}")]
    InvalidArgument { what: String },

    #[error("Arithmetic overflow: {what}")]
    ArithmeticOverflow { what: String },

    #[error("Iteration limit reached: {limit} augmentations and paths remain")]
    IterationLimit { limit: usize },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}

pub type SolverResult<T> = Result<T, SolverError>;

impl From<MfError> for SolverError {
    fn from(e: MfError) -> Self {
        match e {
            MfError::InvalidArg { what } => SolverError::InvalidArgument { what },
            err @ MfError::IndexOob { .. } => SolverError::InvalidArgument {
                what: err.to_string(),
            },
            MfError::Overflow { what } => SolverError::ArithmeticOverflow {
                what: what.to_string(),
            },
            MfError::Invariant { what } => SolverError::Invariant { what },
        }
    }
}

impl From<GraphError> for SolverError {
    fn from(e: GraphError) -> Self {
        if e.is_invalid_argument() {
            SolverError::InvalidArgument {
                what: e.to_string(),
            }
        } else {
            SolverError::Invariant {
                what: e.to_string(),
            }
        }
    }
}
