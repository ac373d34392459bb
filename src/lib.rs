//! rnn-matrix: dense matrix storage for recurrent neural networks.
//!
//! This crate provides [`Matrix`], a row-major 2-D container of `f64`
//! weights paired with a same-shape "recurrence" buffer that accumulates
//! training-time state, plus [`MatrixJson`], the plain snapshot record used
//! to persist and restore weights. Arithmetic (multiply, add, transpose)
//! lives with the callers; this crate is the storage and accessor layer
//! underneath them.
pub mod error;
pub mod matrix;
pub mod utilities;

pub use error::MatrixError;
pub use matrix::{Matrix, MatrixJson};
