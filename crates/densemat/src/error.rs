use std::error::Error;
use std::fmt;

/// Arithmetic operation that performed a shape check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixOp {
    Add,
    Subtract,
    Multiply,
}

impl fmt::Display for MatrixOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatrixOp::Add => write!(f, "addition"),
            MatrixOp::Subtract => write!(f, "subtraction"),
            MatrixOp::Multiply => write!(f, "multiplication"),
        }
    }
}

/// Errors reported by [`Matrix`](crate::math::Matrix) construction and arithmetic.
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// A dimension was zero, or the element count does not fit in memory.
    InvalidDimension { rows: usize, cols: usize },
    /// Row input where `row` has `len` elements instead of `expected`.
    RaggedRows {
        row: usize,
        len: usize,
        expected: usize,
    },
    /// Operand shapes are incompatible for `op`.
    DimensionMismatch {
        op: MatrixOp,
        left: (usize, usize),
        right: (usize, usize),
    },
    /// Buffer length does not equal `rows * cols`.
    ShapeMismatch { rows: usize, cols: usize, len: usize },
    /// Raised only by the checked accessors.
    IndexOutOfBounds {
        row: usize,
        col: usize,
        shape: (usize, usize),
    },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatrixError::InvalidDimension { rows, cols } => {
                write!(f, "invalid matrix dimensions {}x{}", rows, cols)
            }
            MatrixError::RaggedRows { row, len, expected } => {
                write!(f, "row {} has {} elements, expected {}", row, len, expected)
            }
            MatrixError::DimensionMismatch { op, left, right } => write!(
                f,
                "Matrix dimensions do not match for {}: {}x{} and {}x{}",
                op, left.0, left.1, right.0, right.1
            ),
            MatrixError::ShapeMismatch { rows, cols, len } => write!(
                f,
                "invalid shape ({}, {}) for buffer of length {}",
                rows, cols, len
            ),
            MatrixError::IndexOutOfBounds { row, col, shape } => write!(
                f,
                "index ({}, {}) out of bounds for {}x{} matrix",
                row, col, shape.0, shape.1
            ),
        }
    }
}

impl Error for MatrixError {}
