//! The matrix type, random generation, and the sequential multiplier.
//!
//! Matrices are stored flat in row-major order with explicit dimensions,
//! the same layout the multipliers index into directly.

pub mod factory;
pub mod sequential;

use std::fmt;
use std::time::Duration;

use crate::error::{Error, Result};

/// A rectangular integer matrix, stored flat in row-major order.
///
/// Cells are `i64`. A matrix is written during construction and once per
/// multiplication; nothing mutates it after a multiply returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<i64>,
}

impl Matrix {
    /// Build a matrix from explicit rows.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if there are no rows, the first row is
    /// empty, or the rows are ragged.
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Err(Error::InvalidArgument(
                "matrix needs at least one row".into(),
            ));
        };
        let cols = first.len();
        if cols == 0 {
            return Err(Error::InvalidArgument(
                "matrix rows must not be empty".into(),
            ));
        }

        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in &rows {
            if row.len() != cols {
                return Err(Error::InvalidArgument(format!(
                    "ragged matrix: expected {} columns, found a row with {}",
                    cols,
                    row.len()
                )));
            }
            data.extend_from_slice(row);
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// All-zero matrix of the given shape.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "matrix dimensions must be positive");
        Self {
            rows,
            cols,
            data: vec![0; rows * cols],
        }
    }

    /// Identity matrix of size `n`.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = 1;
        }
        m
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell at row `i`, column `j`.
    #[inline]
    pub fn at(&self, i: usize, j: usize) -> i64 {
        self.data[i * self.cols + j]
    }

    /// Row `i` as a slice.
    pub fn row(&self, i: usize) -> &[i64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Iterator over mutable row slices. Rows are disjoint, which is what
    /// lets the parallel multipliers hand one to each worker without locks.
    pub(crate) fn rows_mut(&mut self) -> std::slice::ChunksMut<'_, i64> {
        self.data.chunks_mut(self.cols)
    }
}

/// Rows printed one per line, cells separated by single spaces.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            for (j, cell) in self.row(i).iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A product matrix together with how long the multiply loop took.
///
/// Timing covers only the compute phase; allocation, dimension checks, and
/// printing all sit outside the measurement so the sequential and parallel
/// paths compare fairly.
#[derive(Debug, Clone)]
pub struct Product {
    pub matrix: Matrix,
    pub elapsed: Duration,
}

/// Check that `a` and `b` share an inner dimension.
pub(crate) fn check_compatible(a: &Matrix, b: &Matrix) -> Result<()> {
    if a.cols != b.rows {
        return Err(Error::DimensionMismatch {
            left_rows: a.rows,
            left_cols: a.cols,
            right_rows: b.rows,
            right_cols: b.cols,
        });
    }
    Ok(())
}
