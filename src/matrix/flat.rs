//! Square matrix stored as a single row-major buffer.

use std::ops::{Index, IndexMut};

use crate::error::{MatrixError, Result};
use crate::matrix::rows::RowMatrix;

/// An N×N `f32` matrix in one contiguous buffer, element (r, c) at `r * n + c`.
#[derive(Clone, Debug, PartialEq)]
pub struct FlatMatrix {
    values: Vec<f32>,
    n: usize,
}

impl FlatMatrix {
    /// Wraps a row-major buffer of length `n * n`.
    pub fn new(values: Vec<f32>, n: usize) -> Result<Self> {
        if n == 0 {
            return Err(MatrixError::Empty);
        }
        if values.len() != n * n {
            return Err(MatrixError::BufferLength {
                len: values.len(),
                expected: n * n,
            });
        }
        Ok(Self { values, n })
    }

    pub(crate) fn from_parts(values: Vec<f32>, n: usize) -> Self {
        debug_assert_eq!(values.len(), n * n);
        Self { values, n }
    }

    pub fn zeros(n: usize) -> Result<Self> {
        Self::new(vec![0.0; n * n], n)
    }

    pub fn dim(&self) -> usize {
        self.n
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.values
    }

    pub fn row(&self, r: usize) -> &[f32] {
        &self.values[r * self.n..(r + 1) * self.n]
    }

    /// Splits the buffer back into one owned buffer per row.
    pub fn to_rows(&self) -> RowMatrix {
        let rows = self.values.chunks_exact(self.n).map(Box::from).collect();
        RowMatrix::from_parts(rows)
    }
}

impl Index<(usize, usize)> for FlatMatrix {
    type Output = f32;

    #[inline]
    fn index(&self, (r, c): (usize, usize)) -> &f32 {
        &self.values[r * self.n + c]
    }
}

impl IndexMut<(usize, usize)> for FlatMatrix {
    #[inline]
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut f32 {
        &mut self.values[r * self.n + c]
    }
}
