//! Random generation of compatible matrix pairs.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Matrix;
use crate::error::{Error, Result};

/// Cells are drawn uniformly from this inclusive range.
const CELL_RANGE: std::ops::RangeInclusive<i64> = 1..=10;

/// Generate a compatible pair of random matrices from an explicit seed.
///
/// The first matrix is `rows` x `cols` and the second `cols` x `rows`, so
/// the pair can always be multiplied in that order. Every cell is drawn
/// independently and uniformly from 1..=10. The same seed reproduces the
/// same pair, which is what the tests rely on.
///
/// # Errors
///
/// [`Error::InvalidArgument`] if either dimension is zero.
pub fn random_pair_seeded(rows: usize, cols: usize, seed: u64) -> Result<(Matrix, Matrix)> {
    let mut rng = StdRng::seed_from_u64(seed);
    random_pair_from(&mut rng, rows, cols)
}

/// Generate a compatible pair of random matrices seeded from OS entropy.
///
/// Same contract as [`random_pair_seeded`], different matrices every run.
pub fn random_pair(rows: usize, cols: usize) -> Result<(Matrix, Matrix)> {
    let mut rng = StdRng::from_entropy();
    random_pair_from(&mut rng, rows, cols)
}

fn random_pair_from(rng: &mut StdRng, rows: usize, cols: usize) -> Result<(Matrix, Matrix)> {
    if rows == 0 || cols == 0 {
        return Err(Error::InvalidArgument(format!(
            "matrix dimensions must be positive, got {}x{}",
            rows, cols
        )));
    }

    let mut first = Matrix::zeros(rows, cols);
    let mut second = Matrix::zeros(cols, rows);

    // One draw per matrix at each (i, j), interleaved.
    for i in 0..rows {
        for j in 0..cols {
            first.data[i * cols + j] = rng.gen_range(CELL_RANGE);
            second.data[j * rows + i] = rng.gen_range(CELL_RANGE);
        }
    }

    debug!(
        "generated random pair: {}x{} and {}x{}",
        rows, cols, cols, rows
    );
    Ok((first, second))
}
