use rowmul::{
    Error, Matrix, matmul_pooled, matmul_row_per_thread, matmul_sequential, random_pair_seeded,
};

fn matrix(rows: Vec<Vec<i64>>) -> Matrix {
    Matrix::from_rows(rows).unwrap()
}

// ============================================================
// Concrete small cases
// ============================================================

#[test]
fn test_2x2_known_product() {
    let a = matrix(vec![vec![1, 2], vec![3, 4]]);
    let b = matrix(vec![vec![5, 6], vec![7, 8]]);
    let expected = matrix(vec![vec![19, 22], vec![43, 50]]);

    assert_eq!(matmul_sequential(&a, &b).unwrap().matrix, expected);
    assert_eq!(matmul_row_per_thread(&a, &b).unwrap().matrix, expected);
    assert_eq!(matmul_pooled(&a, &b, 2).unwrap().matrix, expected);
}

#[test]
fn test_2x3_times_3x2() {
    let a = matrix(vec![vec![1, 2, 3], vec![4, 5, 6]]);
    let b = matrix(vec![vec![7, 8], vec![9, 10], vec![11, 12]]);
    let expected = matrix(vec![vec![58, 64], vec![139, 154]]);

    assert_eq!(matmul_sequential(&a, &b).unwrap().matrix, expected);
    assert_eq!(matmul_row_per_thread(&a, &b).unwrap().matrix, expected);
}

#[test]
fn test_1x1() {
    let a = matrix(vec![vec![6]]);
    let b = matrix(vec![vec![7]]);
    let expected = matrix(vec![vec![42]]);

    assert_eq!(matmul_sequential(&a, &b).unwrap().matrix, expected);
    assert_eq!(matmul_row_per_thread(&a, &b).unwrap().matrix, expected);
}

// ============================================================
// Algebraic properties
// ============================================================

#[test]
fn test_identity_is_neutral() {
    let shapes = [(2, 2), (3, 3), (2, 5), (4, 3)];

    for (rows, cols) in shapes {
        let (a, _) = random_pair_seeded(rows, cols, 11).unwrap();
        let product = matmul_sequential(&a, &Matrix::identity(cols)).unwrap();
        assert_eq!(product.matrix, a, "{}x{} times identity", rows, cols);

        let product = matmul_row_per_thread(&a, &Matrix::identity(cols)).unwrap();
        assert_eq!(product.matrix, a, "{}x{} times identity, threaded", rows, cols);
    }
}

#[test]
fn test_zero_matrix_annihilates() {
    let (a, _) = random_pair_seeded(3, 4, 23).unwrap();
    let zero = Matrix::zeros(4, 2);

    let product = matmul_row_per_thread(&a, &zero).unwrap();
    assert_eq!(product.matrix, Matrix::zeros(3, 2));
}

#[test]
fn test_sequential_is_idempotent() {
    let (a, b) = random_pair_seeded(3, 3, 99).unwrap();

    let first = matmul_sequential(&a, &b).unwrap();
    let second = matmul_sequential(&a, &b).unwrap();

    assert_eq!(first.matrix, second.matrix);
}

// ============================================================
// Parallel matches sequential
// ============================================================

#[test]
fn test_parallel_matches_sequential() {
    let shapes = [(2, 2), (3, 3), (5, 5), (3, 7), (7, 3), (1, 9), (16, 16)];

    for (rows, cols) in shapes {
        let (a, b) = random_pair_seeded(rows, cols, 42).unwrap();

        let sequential = matmul_sequential(&a, &b).unwrap().matrix;
        let threaded = matmul_row_per_thread(&a, &b).unwrap().matrix;

        assert_eq!(sequential, threaded, "{}x{} pair", rows, cols);
    }
}

#[test]
fn test_pooled_matches_sequential_across_caps() {
    let (a, b) = random_pair_seeded(8, 5, 7).unwrap();
    let expected = matmul_sequential(&a, &b).unwrap().matrix;

    for cap in [1, 2, 3, 8, 64] {
        let pooled = matmul_pooled(&a, &b, cap).unwrap().matrix;
        assert_eq!(pooled, expected, "cap {}", cap);
    }
}

// ============================================================
// Error paths
// ============================================================

#[test]
fn test_dimension_mismatch() {
    let a = matrix(vec![vec![1, 2, 3], vec![4, 5, 6]]); // 2x3
    let b = matrix(vec![vec![1, 2], vec![3, 4]]); // 2x2, inner dimension 3 != 2

    assert!(matches!(
        matmul_sequential(&a, &b),
        Err(Error::DimensionMismatch { .. })
    ));
    assert!(matches!(
        matmul_row_per_thread(&a, &b),
        Err(Error::DimensionMismatch { .. })
    ));
    assert!(matches!(
        matmul_pooled(&a, &b, 4),
        Err(Error::DimensionMismatch { .. })
    ));
}

#[test]
fn test_factory_rejects_zero_dimensions() {
    assert!(matches!(
        random_pair_seeded(0, 3, 1),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        random_pair_seeded(3, 0, 1),
        Err(Error::InvalidArgument(_))
    ));
}

#[test]
fn test_pooled_rejects_zero_workers() {
    let (a, b) = random_pair_seeded(2, 2, 5).unwrap();
    assert!(matches!(
        matmul_pooled(&a, &b, 0),
        Err(Error::InvalidArgument(_))
    ));
}

#[test]
fn test_ragged_rows_rejected() {
    assert!(matches!(
        Matrix::from_rows(vec![vec![1, 2], vec![3]]),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        Matrix::from_rows(vec![]),
        Err(Error::InvalidArgument(_))
    ));
}

// ============================================================
// Factory output
// ============================================================

#[test]
fn test_factory_shapes_and_range() {
    let (first, second) = random_pair_seeded(3, 3, 2024).unwrap();

    assert_eq!((first.rows(), first.cols()), (3, 3));
    assert_eq!((second.rows(), second.cols()), (3, 3));

    for m in [&first, &second] {
        for i in 0..m.rows() {
            for &cell in m.row(i) {
                assert!((1..=10).contains(&cell), "cell {} out of range", cell);
            }
        }
    }
}

#[test]
fn test_factory_rectangular_pair_is_compatible() {
    let (first, second) = random_pair_seeded(2, 5, 8).unwrap();

    assert_eq!((first.rows(), first.cols()), (2, 5));
    assert_eq!((second.rows(), second.cols()), (5, 2));

    // The pair multiplies in the generated order without any reshaping.
    let product = matmul_sequential(&first, &second).unwrap();
    assert_eq!((product.matrix.rows(), product.matrix.cols()), (2, 2));
}

#[test]
fn test_factory_same_seed_same_pair() {
    let (a1, b1) = random_pair_seeded(4, 4, 77).unwrap();
    let (a2, b2) = random_pair_seeded(4, 4, 77).unwrap();

    assert_eq!(a1, a2);
    assert_eq!(b1, b2);
}

// ============================================================
// Display format
// ============================================================

#[test]
fn test_display_space_separated_rows() {
    let m = matrix(vec![vec![1, 2, 3], vec![4, 5, 6]]);
    assert_eq!(m.to_string(), "1 2 3\n4 5 6\n");
}
