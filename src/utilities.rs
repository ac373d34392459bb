//! Shared buffer helpers.

use num_traits::Zero;

/// Allocate a numeric buffer of `len` elements, every one set to zero.
///
/// All matrix storage is allocated through this function so the zero-fill
/// guarantee lives in one place.
pub fn zeros<T: Clone + Zero>(len: usize) -> Vec<T> {
    vec![T::zero(); len]
}
