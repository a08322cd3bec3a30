//! densemat: a minimal dense matrix value type.
//!
//! The crate provides a fixed-shape, row-major `f64` [`Matrix`] with
//! permissive element access, shape-checked addition, subtraction and
//! multiplication, transpose, and plain-text rendering helpers used by the
//! demonstration driver.
//!
//! Shape violations are reported as [`MatrixError`] values; no operation
//! panics or mutates its operands on failure.
pub mod error;
pub mod math;
pub mod utils;

pub use error::{MatrixError, MatrixOp};
pub use math::Matrix;
