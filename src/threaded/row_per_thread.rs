//! One worker thread per output row.

use std::thread;
use std::time::Instant;

use log::debug;

use super::fill_row;
use crate::error::Result;
use crate::matrix::{Matrix, Product, check_compatible};

/// Parallel matrix multiplication with one worker thread per output row.
///
/// Each worker gets exclusive ownership of one mutable row slice of the
/// result plus shared read access to both inputs. Rows never overlap, so
/// the result needs no locking, and the inputs are never written after
/// creation, so they need no synchronization either. `thread::scope` joins
/// every worker before returning: the product is fully populated by the
/// time the caller can observe it.
///
/// Thread count equals the row count with no upper bound. That is the whole
/// point of the exercise, not a model to copy; reach for
/// [`matmul_pooled`](crate::threaded::pooled::matmul_pooled) when the row
/// count is not toy-sized.
///
/// Overflow wraps, matching the sequential path. Timing covers spawn
/// through join only.
///
/// # Errors
///
/// [`crate::Error::DimensionMismatch`] if `a.cols() != b.rows()`.
pub fn matmul_row_per_thread(a: &Matrix, b: &Matrix) -> Result<Product> {
    check_compatible(a, b)?;

    let mut out = Matrix::zeros(a.rows(), b.cols());
    debug!("spawning {} row workers", a.rows());

    let start = Instant::now();
    thread::scope(|s| {
        for (i, row) in out.rows_mut().enumerate() {
            s.spawn(move || fill_row(a, b, i, row));
        }
        // Scope exit is the join barrier: every row worker has finished
        // before the timing stops.
    });
    let elapsed = start.elapsed();

    Ok(Product {
        matrix: out,
        elapsed,
    })
}
