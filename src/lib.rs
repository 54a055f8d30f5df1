//! Sequential vs thread-per-row matrix multiplication, timed.
//!
//! A benchmarking toy: generate two random integer matrices, multiply them
//! with the textbook triple loop and again with one thread per output row,
//! and compare the wall-clock time of each. The interesting part is the
//! parallel decomposition: every output row is a disjoint destination, so
//! each worker owns exactly one row slice and the whole thing runs without
//! a single lock.
//!
//! ## Usage
//!
//! ```
//! use rowmul::{matmul_sequential, Matrix};
//!
//! let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
//! let b = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap();
//!
//! let product = matmul_sequential(&a, &b).unwrap();
//! assert_eq!(product.matrix.row(0), &[19, 22]);
//! assert_eq!(product.matrix.row(1), &[43, 50]);
//! ```
//!
//! The parallel version has the same contract:
//!
//! ```
//! use rowmul::{matmul_row_per_thread, random_pair_seeded};
//!
//! let (a, b) = random_pair_seeded(3, 3, 7).unwrap();
//! let product = matmul_row_per_thread(&a, &b).unwrap();
//! assert_eq!(product.matrix.rows(), 3);
//! ```
//!
//! ## What's inside
//!
//! - Seeded random matrix generation (uniform integers in 1..=10)
//! - Textbook i-j-k sequential multiply
//! - Thread-per-row parallel multiply (scoped threads, full join barrier)
//! - A bounded worker pool that claims rows from a shared queue, for when
//!   thread-per-row would spawn an unreasonable number of threads

pub mod error;
pub mod matrix;
pub mod threaded;

pub use error::{Error, Result};
pub use matrix::factory::{random_pair, random_pair_seeded};
pub use matrix::sequential::matmul_sequential;
pub use matrix::{Matrix, Product};
pub use threaded::pooled::matmul_pooled;
pub use threaded::row_per_thread::matmul_row_per_thread;
