//! Scalar transpose + Hadamard kernels.
//!
//! Both compute `C = A^T ∘ B` with plain loops and differ only in layout:
//! - `rows_2d`: row-of-buffers matrices, every access goes through the row
//! - `flat_1d`: contiguous buffers, so the multiply is a single linear pass

pub mod flat_1d;
pub mod rows_2d;

pub use flat_1d::transpose_hadamard_1d;
pub use rows_2d::transpose_hadamard_2d;
