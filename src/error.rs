use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error("matrix dimension must be at least 1")]
    Empty,
    #[error("row {row} has {len} elements, expected {expected}")]
    Ragged {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("flat buffer has {len} elements, expected {expected}")]
    BufferLength { len: usize, expected: usize },
    #[error("dimension mismatch: expected {expected}x{expected}, got {got}x{got}")]
    DimensionMismatch { expected: usize, got: usize },
}

pub type Result<T> = std::result::Result<T, MatrixError>;

/// Checks that every operand of a kernel call has dimension `n`.
pub(crate) fn check_dims(n: usize, others: &[usize]) -> Result<()> {
    match others.iter().find(|&&got| got != n) {
        Some(&got) => Err(MatrixError::DimensionMismatch { expected: n, got }),
        None => Ok(()),
    }
}
