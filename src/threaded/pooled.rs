//! Bounded worker pool claiming rows from a shared queue.

use std::thread;
use std::time::Instant;

use crossbeam::channel;
use log::debug;

use super::fill_row;
use crate::error::{Error, Result};
use crate::matrix::{Matrix, Product, check_compatible};

/// Parallel multiplication with at most `max_threads` workers.
///
/// The bounded alternative to
/// [`matmul_row_per_thread`](crate::threaded::row_per_thread::matmul_row_per_thread):
/// jobs are `(row index, row slice)` pairs pushed through a channel, and
/// `min(max_threads, rows)` scoped workers drain the queue until it is
/// empty. Each row is claimed exactly once, so the disjoint-write guarantee
/// carries over unchanged and the result is element-wise identical to the
/// other multipliers.
///
/// # Errors
///
/// [`crate::Error::InvalidArgument`] if `max_threads` is zero,
/// [`crate::Error::DimensionMismatch`] if `a.cols() != b.rows()`.
pub fn matmul_pooled(a: &Matrix, b: &Matrix, max_threads: usize) -> Result<Product> {
    if max_threads == 0 {
        return Err(Error::InvalidArgument(
            "worker cap must be positive".into(),
        ));
    }
    check_compatible(a, b)?;

    let mut out = Matrix::zeros(a.rows(), b.cols());
    let workers = max_threads.min(a.rows());
    debug!("pooled multiply: {} workers for {} rows", workers, a.rows());

    let start = Instant::now();
    let (tx, rx) = channel::unbounded();
    for job in out.rows_mut().enumerate() {
        tx.send(job).unwrap();
    }
    // Workers see a closed, fully loaded queue and exit once it drains.
    drop(tx);

    thread::scope(|s| {
        for _ in 0..workers {
            let rx = rx.clone();
            s.spawn(move || {
                for (i, row) in rx {
                    fill_row(a, b, i, row);
                }
            });
        }
    });
    let elapsed = start.elapsed();
    drop(rx);

    Ok(Product {
        matrix: out,
        elapsed,
    })
}
