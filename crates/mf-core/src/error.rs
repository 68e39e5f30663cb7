use thiserror::Error;

pub type MfResult<T> = Result<T, MfError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MfError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },

    #[error("Index out of bounds: {what} (index={index}, len={len})")]
    IndexOob {
        what: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Arithmetic overflow: {what}")]
    Overflow { what: &'static str },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}
