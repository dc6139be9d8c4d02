use thiserror::Error;

// Unified error type for genmat

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinalgError {
    #[error("matrix is empty")]
    EmptyData,
    #[error("cannot shape {len} elements into a {rows}x{cols} matrix")]
    ShapeMismatch { rows: usize, cols: usize, len: usize },
    #[error("row {row} has {found} elements, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("invalid dimensions {rows}x{cols}: both must be positive")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("dimension mismatch in {op}: {left:?} vs {right:?}")]
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },
    #[error("length mismatch: expected {expected}, found {found}")]
    LengthMismatch { expected: usize, found: usize },
    #[error("matrix is not square: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },
    #[error("determinant does not exist: {0}")]
    NoDeterminant(&'static str),
    #[error("matrix is singular (determinant is zero)")]
    SingularMatrix,
    #[error("cannot normalize a zero-magnitude vector")]
    ZeroMagnitude,
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("vector of length {len} has no {component} component")]
    ComponentMissing { component: char, len: usize },
    #[error("invalid axis selector {0}")]
    InvalidAxis(usize),
}

pub type Result<T> = std::result::Result<T, LinalgError>;
