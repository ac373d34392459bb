use serde::{Deserialize, Serialize};

use crate::error::MatrixError;
use crate::utilities::zeros;

/// Dimensions of a shaped matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Shape {
    rows: usize,
    columns: usize,
}

/// A dense 2-D matrix of `f64` values in row-major order.
///
/// Two flat buffers of identical length back every matrix: `weights`, the
/// stored values proper, and `recurrence`, a same-shape buffer the
/// surrounding training code accumulates gradient-like updates into. The
/// element at `(row, col)` lives at flat index `row * columns + col` in
/// both buffers.
///
/// A matrix is either *shaped* (dimensions and buffers allocated) or an
/// *unshaped* placeholder produced by [`Matrix::unshaped`]. The placeholder
/// panics on element access until it is replaced by a shaped value; it
/// never yields garbage.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Matrix {
    shape: Option<Shape>,
    weights: Vec<f64>,
    recurrence: Vec<f64>,
}

/// Plain serializable snapshot of a matrix: dimensions plus the weight
/// buffer in row-major order.
///
/// The recurrence buffer is deliberately absent: it holds transient
/// training-time state and never round-trips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixJson {
    pub rows: usize,
    pub columns: usize,
    pub weights: Vec<f64>,
}

impl Matrix {
    /// Allocate a `rows` x `columns` matrix with zero-filled weight and
    /// recurrence buffers.
    pub fn new(rows: usize, columns: usize) -> Self {
        Matrix {
            shape: Some(Shape { rows, columns }),
            weights: zeros(rows * columns),
            recurrence: zeros(rows * columns),
        }
    }

    /// A placeholder with no dimensions and no buffers.
    ///
    /// Serves as a slot value until the real matrix arrives from
    /// [`Matrix::new`], [`Matrix::from_json`], or [`Matrix::from_array`].
    /// Equivalent to `Matrix::default()`.
    pub fn unshaped() -> Self {
        Matrix::default()
    }

    /// Number of rows.
    ///
    /// # Panics
    /// Panics if the matrix is unshaped.
    pub fn rows(&self) -> usize {
        self.expect_shape().rows
    }

    /// Number of columns.
    ///
    /// # Panics
    /// Panics if the matrix is unshaped.
    pub fn columns(&self) -> usize {
        self.expect_shape().columns
    }

    /// `(rows, columns)` for a shaped matrix, `None` for the placeholder.
    pub fn shape(&self) -> Option<(usize, usize)> {
        self.shape.map(|s| (s.rows, s.columns))
    }

    pub fn is_shaped(&self) -> bool {
        self.shape.is_some()
    }

    /// Number of stored elements: `rows * columns`, or zero when unshaped.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// The weight buffer as a flat row-major slice.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Mutable view of the weight buffer.
    pub fn weights_mut(&mut self) -> &mut [f64] {
        &mut self.weights
    }

    /// The recurrence buffer as a flat row-major slice.
    pub fn recurrence(&self) -> &[f64] {
        &self.recurrence
    }

    /// Mutable view of the recurrence buffer.
    pub fn recurrence_mut(&mut self) -> &mut [f64] {
        &mut self.recurrence
    }

    /// Read the weight at `(row, col)`.
    ///
    /// The indices fold into the flat row-major offset
    /// `columns * row + col` with no per-axis bounds check: a `col` past
    /// the end of a row reads from the next row's region of the buffer.
    /// Only the buffer's own length is enforced, by the indexing itself.
    ///
    /// # Panics
    /// Panics if the matrix is unshaped or the flat offset reaches past
    /// `rows * columns`. [`Matrix::try_get_weight`] checks both axes
    /// instead.
    pub fn get_weight(&self, row: usize, col: usize) -> f64 {
        let ix = self.offset(row, col);
        self.weights[ix]
    }

    /// Write `v` to the weight at `(row, col)`.
    ///
    /// Same flat-offset addressing as [`Matrix::get_weight`], with the same
    /// absence of per-axis bounds checking. Mutates exactly one element of
    /// the weight buffer.
    ///
    /// # Panics
    /// Panics if the matrix is unshaped or the flat offset reaches past
    /// `rows * columns`.
    pub fn set_weight(&mut self, row: usize, col: usize, v: f64) {
        let ix = self.offset(row, col);
        self.weights[ix] = v;
    }

    /// Write `v` to the recurrence element at `(row, col)`.
    ///
    /// Same flat-offset addressing as [`Matrix::get_weight`]. Mutates
    /// exactly one element of the recurrence buffer; weights are untouched.
    ///
    /// # Panics
    /// Panics if the matrix is unshaped or the flat offset reaches past
    /// `rows * columns`.
    pub fn set_recurrence(&mut self, row: usize, col: usize, v: f64) {
        let ix = self.offset(row, col);
        self.recurrence[ix] = v;
    }

    /// Bounds-checked read for defensive callers.
    pub fn try_get_weight(&self, row: usize, col: usize) -> Result<f64, MatrixError> {
        let ix = self.checked_offset(row, col)?;
        Ok(self.weights[ix])
    }

    /// Bounds-checked weight write.
    pub fn try_set_weight(&mut self, row: usize, col: usize, v: f64) -> Result<(), MatrixError> {
        let ix = self.checked_offset(row, col)?;
        self.weights[ix] = v;
        Ok(())
    }

    /// Bounds-checked recurrence write.
    pub fn try_set_recurrence(
        &mut self,
        row: usize,
        col: usize,
        v: f64,
    ) -> Result<(), MatrixError> {
        let ix = self.checked_offset(row, col)?;
        self.recurrence[ix] = v;
        Ok(())
    }

    /// Snapshot the serializable state: dimensions plus a copy of the
    /// weight buffer.
    ///
    /// The copy is independent; mutating the matrix afterwards leaves the
    /// snapshot untouched. Recurrence state is not captured.
    ///
    /// # Panics
    /// Panics if the matrix is unshaped.
    pub fn to_json(&self) -> MatrixJson {
        let Shape { rows, columns } = self.expect_shape();
        MatrixJson {
            rows,
            columns,
            weights: self.weights.clone(),
        }
    }

    /// Rebuild a matrix from a snapshot.
    ///
    /// Allocates a fresh zero-filled matrix of the recorded dimensions and
    /// copies the snapshot's weights over it, element by element. The
    /// recurrence buffer stays zeroed; snapshots never carry it. Extra
    /// trailing weight values in the snapshot are ignored.
    ///
    /// # Panics
    /// Panics if the snapshot holds fewer than `rows * columns` weights.
    /// [`Matrix::try_from_json`] validates the length up front instead.
    pub fn from_json(json: &MatrixJson) -> Self {
        let mut matrix = Matrix::new(json.rows, json.columns);
        let len = json.rows * json.columns;
        for i in 0..len {
            matrix.weights[i] = json.weights[i];
        }
        log::trace!("restored {}x{} matrix from snapshot", json.rows, json.columns);
        matrix
    }

    /// Validating variant of [`Matrix::from_json`].
    ///
    /// Rejects a snapshot whose weight count differs from `rows * columns`
    /// in either direction.
    pub fn try_from_json(json: &MatrixJson) -> Result<Self, MatrixError> {
        if json.weights.len() != json.rows * json.columns {
            return Err(MatrixError::WeightsLength {
                rows: json.rows,
                columns: json.columns,
                len: json.weights.len(),
            });
        }
        Ok(Matrix::from_json(json))
    }

    /// Build a matrix from nested rows of weights.
    ///
    /// One matrix row per inner vector; the column count comes from the
    /// first row alone, and later rows are read for exactly that many
    /// values. When `recurrence_rows` is `None` the weight rows also seed
    /// the recurrence buffer, so both buffers start with equal values while
    /// remaining independent copies.
    ///
    /// # Panics
    /// Panics if `weight_rows` is empty, or if any row consulted is shorter
    /// than the first.
    pub fn from_array(weight_rows: &[Vec<f64>], recurrence_rows: Option<&[Vec<f64>]>) -> Self {
        let rows = weight_rows.len();
        let columns = weight_rows[0].len();
        let mut matrix = Matrix::new(rows, columns);

        let recurrence_rows = recurrence_rows.unwrap_or(weight_rows);

        for row_index in 0..rows {
            let weight_values = &weight_rows[row_index];
            let recurrence_values = &recurrence_rows[row_index];
            for column_index in 0..columns {
                matrix.set_weight(row_index, column_index, weight_values[column_index]);
                matrix.set_recurrence(row_index, column_index, recurrence_values[column_index]);
            }
        }

        log::trace!("built {}x{} matrix from nested rows", rows, columns);
        matrix
    }

    fn expect_shape(&self) -> Shape {
        match self.shape {
            Some(shape) => shape,
            None => panic!("matrix is unshaped (no dimensions allocated)"),
        }
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        self.expect_shape().columns * row + col
    }

    fn checked_offset(&self, row: usize, col: usize) -> Result<usize, MatrixError> {
        let Shape { rows, columns } = self.shape.ok_or(MatrixError::Unshaped)?;
        if row >= rows || col >= columns {
            return Err(MatrixError::OutOfBounds {
                row,
                col,
                rows,
                columns,
            });
        }
        Ok(columns * row + col)
    }
}
