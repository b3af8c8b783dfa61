use crate::error::{Result, check_dims};
use crate::matrix::FlatMatrix;
use crate::matrix::transpose::transpose;

/// Transpose-then-multiply on flat row-major matrices.
///
/// Once A^T sits in a buffer with the same layout as B, the element-wise
/// multiply needs no 2D indexing at all: it's one pass over N² elements.
///
/// # Errors
///
/// Returns `DimensionMismatch` if B or C differ in size from A.
pub fn transpose_hadamard_1d(a: &FlatMatrix, b: &FlatMatrix, c: &mut FlatMatrix) -> Result<()> {
    let n = a.dim();
    check_dims(n, &[b.dim(), c.dim()])?;

    let mut a_t = vec![0.0f32; n * n];
    transpose(a.as_slice(), &mut a_t, n, n);

    for ((out, &x), &y) in c.as_mut_slice().iter_mut().zip(&a_t).zip(b.as_slice()) {
        *out = x * y;
    }

    Ok(())
}
