//! Square matrix stored as one owned buffer per row.

use std::ops::{Index, IndexMut};

use rand::Rng;
use rand::distributions::Standard;

use crate::error::{MatrixError, Result};
use crate::matrix::flat::FlatMatrix;

/// An N×N `f32` matrix with a separate heap buffer for each row.
///
/// Access goes through two levels of indirection (row, then column), which
/// is the layout the scalar 2D and SIMD kernels are measured against.
#[derive(Clone, Debug, PartialEq)]
pub struct RowMatrix {
    rows: Vec<Box<[f32]>>,
}

impl RowMatrix {
    /// Builds a matrix from its rows. Every row must have `rows.len()` elements.
    pub fn from_rows(rows: Vec<Vec<f32>>) -> Result<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(MatrixError::Empty);
        }
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != n) {
            return Err(MatrixError::Ragged {
                row,
                len: r.len(),
                expected: n,
            });
        }
        Ok(Self {
            rows: rows.into_iter().map(Vec::into_boxed_slice).collect(),
        })
    }

    pub(crate) fn from_parts(rows: Vec<Box<[f32]>>) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == rows.len()));
        Self { rows }
    }

    /// N×N matrix with every element set to `value`.
    pub fn filled(n: usize, value: f32) -> Result<Self> {
        if n == 0 {
            return Err(MatrixError::Empty);
        }
        Ok(Self {
            rows: (0..n).map(|_| vec![value; n].into_boxed_slice()).collect(),
        })
    }

    pub fn zeros(n: usize) -> Result<Self> {
        Self::filled(n, 0.0)
    }

    pub fn identity(n: usize) -> Result<Self> {
        let mut m = Self::zeros(n)?;
        for i in 0..n {
            m[(i, i)] = 1.0;
        }
        Ok(m)
    }

    /// N×N matrix of uniform samples in [0, 1), drawn row by row.
    pub fn rand<R: Rng>(rng: &mut R, n: usize) -> Result<Self> {
        if n == 0 {
            return Err(MatrixError::Empty);
        }
        let rows = (0..n)
            .map(|_| (0..n).map(|_| rng.sample(Standard)).collect())
            .collect();
        Ok(Self { rows })
    }

    /// Fills two matrices from one generator, interleaving samples per element
    /// so `a[i][j]` is drawn right before `b[i][j]`.
    pub fn rand_pair<R: Rng>(rng: &mut R, n: usize) -> Result<(Self, Self)> {
        let mut a = Self::zeros(n)?;
        let mut b = Self::zeros(n)?;
        for i in 0..n {
            for j in 0..n {
                a[(i, j)] = rng.sample(Standard);
                b[(i, j)] = rng.sample(Standard);
            }
        }
        Ok((a, b))
    }

    /// Dimension N.
    pub fn dim(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, r: usize) -> &[f32] {
        &self.rows[r]
    }

    pub fn row_mut(&mut self, r: usize) -> &mut [f32] {
        &mut self.rows[r]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f32]> {
        self.rows.iter().map(|r| &r[..])
    }

    /// Copies the rows into one contiguous row-major buffer.
    pub fn flatten(&self) -> FlatMatrix {
        let n = self.dim();
        let mut values = Vec::with_capacity(n * n);
        for row in &self.rows {
            values.extend_from_slice(row);
        }
        FlatMatrix::from_parts(values, n)
    }
}

impl Index<(usize, usize)> for RowMatrix {
    type Output = f32;

    #[inline]
    fn index(&self, (r, c): (usize, usize)) -> &f32 {
        &self.rows[r][c]
    }
}

impl IndexMut<(usize, usize)> for RowMatrix {
    #[inline]
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut f32 {
        &mut self.rows[r][c]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_from_rows_rejects_ragged() {
        let err = RowMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(
            err,
            MatrixError::Ragged {
                row: 1,
                len: 1,
                expected: 2
            }
        );
    }

    #[test]
    fn test_from_rows_rejects_non_square() {
        // 2 rows of 3 is rectangular, row 0 already fails
        let err = RowMatrix::from_rows(vec![vec![0.0; 3], vec![0.0; 3]]).unwrap_err();
        assert!(matches!(err, MatrixError::Ragged { row: 0, .. }));
    }

    #[test]
    fn test_zero_dimension() {
        assert_eq!(RowMatrix::zeros(0).unwrap_err(), MatrixError::Empty);
        assert_eq!(RowMatrix::from_rows(vec![]).unwrap_err(), MatrixError::Empty);
    }

    #[test]
    fn test_identity() {
        let m = RowMatrix::identity(4).unwrap();
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(m[(i, j)], if i == j { 1.0 } else { 0.0 });
            }
        }
    }

    #[test]
    fn test_rand_in_unit_interval() {
        let mut rng = StdRng::seed_from_u64(7);
        let m = RowMatrix::rand(&mut rng, 16).unwrap();
        assert!(m.rows().flatten().all(|&x| (0.0..1.0).contains(&x)));
    }

    #[test]
    fn test_rand_pair_is_reproducible() {
        let (a1, b1) = RowMatrix::rand_pair(&mut StdRng::seed_from_u64(42), 8).unwrap();
        let (a2, b2) = RowMatrix::rand_pair(&mut StdRng::seed_from_u64(42), 8).unwrap();
        assert_eq!(a1, a2);
        assert_eq!(b1, b2);
        assert_ne!(a1, b1);
    }

    #[test]
    fn test_flatten_round_trip() {
        let m = RowMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let flat = m.flatten();
        assert_eq!(flat.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(flat.to_rows(), m);
    }
}
