use crate::error::{Result, check_dims};
use crate::matrix::RowMatrix;

/// Transpose-then-multiply on 2D matrices: `C[i][j] = A[j][i] * B[i][j]`
///
/// Writes A^T into a flat scratch buffer first, then multiplies it with B
/// element by element, indexing A, B and C through their rows. C is fully
/// overwritten.
///
/// # Errors
///
/// Returns `DimensionMismatch` if B or C differ in size from A.
pub fn transpose_hadamard_2d(a: &RowMatrix, b: &RowMatrix, c: &mut RowMatrix) -> Result<()> {
    let n = a.dim();
    check_dims(n, &[b.dim(), c.dim()])?;

    let mut a_t = vec![0.0f32; n * n];

    for i in 0..n {
        for j in 0..n {
            a_t[j * n + i] = a[(i, j)];
        }
    }

    for i in 0..n {
        for j in 0..n {
            c[(i, j)] = a_t[i * n + j] * b[(i, j)];
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatrixError;

    #[test]
    fn test_2x2_by_hand() {
        let a = RowMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let b = RowMatrix::from_rows(vec![vec![5.0, 6.0], vec![7.0, 8.0]]).unwrap();
        let mut c = RowMatrix::zeros(2).unwrap();

        transpose_hadamard_2d(&a, &b, &mut c).unwrap();

        // A^T = [[1, 3], [2, 4]]
        let expected = RowMatrix::from_rows(vec![vec![5.0, 18.0], vec![14.0, 32.0]]).unwrap();
        assert_eq!(c, expected);
    }

    #[test]
    fn test_overwrites_output() {
        let a = RowMatrix::filled(3, 2.0).unwrap();
        let b = RowMatrix::filled(3, 3.0).unwrap();
        let mut c = RowMatrix::filled(3, 100.0).unwrap();

        transpose_hadamard_2d(&a, &b, &mut c).unwrap();

        assert!(c.rows().flatten().all(|&x| x == 6.0));
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = RowMatrix::zeros(4).unwrap();
        let b = RowMatrix::zeros(4).unwrap();
        let mut c = RowMatrix::zeros(3).unwrap();

        assert_eq!(
            transpose_hadamard_2d(&a, &b, &mut c),
            Err(MatrixError::DimensionMismatch { expected: 4, got: 3 })
        );
    }
}
