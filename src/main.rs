//! Driver for the fixed 3x3 multiplication demonstration.

use anyhow::Result;

use rowmul::{matmul_row_per_thread, matmul_sequential, random_pair};

const ROWS: usize = 3;
const COLS: usize = 3;

fn main() -> Result<()> {
    env_logger::init();

    let (matrix1, matrix2) = random_pair(ROWS, COLS)?;

    println!("Matrix 1:");
    print!("{}", matrix1);
    println!("Matrix 2:");
    print!("{}", matrix2);

    let sequential = matmul_sequential(&matrix1, &matrix2)?;
    println!("Result of single-threaded matrix multiplication:");
    print!("{}", sequential.matrix);
    println!(
        "Time taken to multiply matrices: {} seconds",
        sequential.elapsed.as_secs_f64()
    );

    let parallel = matmul_row_per_thread(&matrix1, &matrix2)?;
    println!("Result of multi-threaded matrix multiplication:");
    print!("{}", parallel.matrix);
    println!(
        "Time taken for multithreaded matrix multiplication: {} seconds",
        parallel.elapsed.as_secs_f64()
    );

    Ok(())
}
