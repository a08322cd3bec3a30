//! The dense matrix value type.
//!
//! `Matrix` owns a single contiguous row-major buffer of `f64` values whose
//! shape is fixed at construction.
pub mod matrix;

pub use matrix::Matrix;
