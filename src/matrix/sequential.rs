//! Single-threaded multiplication, timed.

use std::time::Instant;

use log::debug;

use super::{Matrix, Product, check_compatible};
use crate::error::Result;

/// Sequential matrix multiplication using the textbook i-j-k loop order.
///
/// Computes `result[i][j] = sum over k of a[i][k] * b[k][j]` on the calling
/// thread. Accumulation is wrapping `i64` arithmetic: a product that
/// overflows wraps around rather than widening or panicking.
///
/// Only the triple loop is timed. Allocation and the dimension check happen
/// before the clock starts, so [`Product::elapsed`] is directly comparable
/// to the parallel multipliers.
///
/// # Errors
///
/// [`crate::Error::DimensionMismatch`] if `a.cols() != b.rows()`.
pub fn matmul_sequential(a: &Matrix, b: &Matrix) -> Result<Product> {
    check_compatible(a, b)?;

    let (m, n, k) = (a.rows(), b.cols(), a.cols());
    let mut out = Matrix::zeros(m, n);

    debug!("sequential multiply: {}x{} by {}x{}", m, k, k, n);

    let start = Instant::now();
    for i in 0..m {
        for j in 0..n {
            for p in 0..k {
                let cell = &mut out.data[i * n + j];
                *cell = cell.wrapping_add(a.at(i, p).wrapping_mul(b.at(p, j)));
            }
        }
    }
    let elapsed = start.elapsed();

    Ok(Product {
        matrix: out,
        elapsed,
    })
}
