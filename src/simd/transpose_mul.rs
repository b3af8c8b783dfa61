//! Vectorized transpose + Hadamard kernel.

use crate::error::{Result, check_dims};
use crate::matrix::RowMatrix;
use crate::simd::lanes::{F32x8, Lanes};

#[cfg(target_arch = "x86_64")]
use crate::simd::lanes::Avx8;

/// Transpose-then-multiply on 2D matrices, `V::WIDTH` lanes at a time.
///
/// Step 1 walks A in blocks of `WIDTH` columns: for every row j it loads
/// `A[j][i..i + WIDTH]` (contiguous inside that row) and scatters the lanes
/// to `A^T[i + k][j]`. Step 2 multiplies `A^T` row i with `B[i]` a vector at
/// a time and stores into `C[i]`. The last `n % WIDTH` columns of both steps
/// go through a scalar tail, so any size works.
///
/// # Safety
///
/// Caller must ensure the CPU supports the instruction set behind `V`.
///
/// # Errors
///
/// Returns `DimensionMismatch` if B or C differ in size from A.
#[inline]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn transpose_hadamard_lanes<V: Lanes>(
    a: &RowMatrix,
    b: &RowMatrix,
    c: &mut RowMatrix,
) -> Result<()> {
    let n = a.dim();
    check_dims(n, &[b.dim(), c.dim()])?;

    let w = V::WIDTH;
    let n_main = (n / w) * w;

    let mut a_t = vec![0.0f32; n * n];

    // Step 1: transpose, one vector load per row, lanes scattered down a column block
    for i in (0..n_main).step_by(w) {
        for j in 0..n {
            let v = V::load(&a.row(j)[i..i + w]);
            for (k, &x) in v.to_array().as_ref().iter().enumerate() {
                a_t[(i + k) * n + j] = x;
            }
        }
    }

    // Leftover columns that don't fill a vector
    for i in n_main..n {
        for j in 0..n {
            a_t[i * n + j] = a[(j, i)];
        }
    }

    // Step 2: C[i] = A^T[i] * B[i]
    for i in 0..n {
        let at_row = &a_t[i * n..(i + 1) * n];
        let b_row = b.row(i);
        let c_row = c.row_mut(i);

        for j in (0..n_main).step_by(w) {
            let prod = V::load(&at_row[j..]).mul(V::load(&b_row[j..]));
            prod.store(&mut c_row[j..]);
        }

        for j in n_main..n {
            c_row[j] = at_row[j] * b_row[j];
        }
    }

    Ok(())
}

/// [`transpose_hadamard_lanes`] compiled with AVX enabled, 8 lanes wide.
///
/// # Safety
///
/// Caller must ensure the CPU supports AVX.
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx")]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn transpose_hadamard_avx(a: &RowMatrix, b: &RowMatrix, c: &mut RowMatrix) -> Result<()> {
    transpose_hadamard_lanes::<Avx8>(a, b, c)
}

/// [`transpose_hadamard_lanes`] over plain arrays. Runs on any target.
pub fn transpose_hadamard_portable(a: &RowMatrix, b: &RowMatrix, c: &mut RowMatrix) -> Result<()> {
    // F32x8 needs no CPU feature
    unsafe { transpose_hadamard_lanes::<F32x8>(a, b, c) }
}
