//! densemat-cli: demonstration driver for the `densemat` matrix type.
//!
//! Builds two fixed operands, applies the configured operations and prints
//! every matrix to standard output.
pub mod cli;
pub mod config;
pub mod demo;
