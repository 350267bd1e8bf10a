//! Error type shared by every fallible `EuclideanVector` operation.
use std::error::Error;
use std::fmt;

/// Result alias for vector operations.
pub type Result<T> = std::result::Result<T, VectorError>;

/// Coarse failure category, for callers that branch on what went wrong
/// rather than on the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    OutOfRange,
    DimensionMismatch,
    DivideByZero,
}

/// Error raised by construction, checked access and checked arithmetic.
#[derive(Debug, Clone, PartialEq)]
pub enum VectorError {
    /// An argument that can never produce a valid vector (negative dimension,
    /// malformed text, ...).
    InvalidArgument { message: String },
    /// Checked access outside `[0, dimension)`.
    OutOfRange { index: i64, dimension: usize },
    /// Element-wise operation between vectors of different dimension.
    DimensionMismatch { lhs: usize, rhs: usize },
    /// Division by a zero scalar or normalization of a zero-norm vector.
    DivideByZero { message: String },
}

impl VectorError {
    pub(crate) fn negative_dimension(dimension: i64) -> Self {
        VectorError::InvalidArgument {
            message: format!(
                "EuclideanVector cannot have a negative dimension (got {})",
                dimension
            ),
        }
    }

    pub(crate) fn scalar_division() -> Self {
        VectorError::DivideByZero {
            message: "Invalid vector division by 0".to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            VectorError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            VectorError::OutOfRange { .. } => ErrorKind::OutOfRange,
            VectorError::DimensionMismatch { .. } => ErrorKind::DimensionMismatch,
            VectorError::DivideByZero { .. } => ErrorKind::DivideByZero,
        }
    }
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            VectorError::InvalidArgument { message } => write!(f, "{}", message),
            VectorError::OutOfRange { index, dimension } => write!(
                f,
                "Index {} is not valid for this EuclideanVector object (dimension {})",
                index, dimension
            ),
            VectorError::DimensionMismatch { lhs, rhs } => {
                write!(f, "Dimensions of LHS({}) and RHS({}) do not match", lhs, rhs)
            }
            VectorError::DivideByZero { message } => write!(f, "{}", message),
        }
    }
}

impl Error for VectorError {}
