//! Transpose + Hadamard product in Rust, three ways.
//!
//! Every kernel computes `C[i][j] = A[j][i] * B[i][j]` on square `f32`
//! matrices. They only differ in how memory is laid out and walked:
//!
//! - scalar 2D: one heap buffer per row, indexed through the row
//! - scalar 1D: one flat row-major buffer, multiply as a single linear pass
//! - SIMD: 2D matrices, 8-wide loads/multiplies/stores (AVX, SSE or portable)
//!
//! ## Usage
//!
//! ```
//! use hadamard::{RowMatrix, transpose_hadamard_2d, transpose_hadamard_simd};
//!
//! let a = RowMatrix::identity(64).unwrap();
//! let b = RowMatrix::filled(64, 1.0).unwrap();
//! let mut c = RowMatrix::zeros(64).unwrap();
//!
//! transpose_hadamard_simd(&a, &b, &mut c).unwrap();
//! assert_eq!(c, a);
//!
//! let mut c_scalar = RowMatrix::zeros(64).unwrap();
//! transpose_hadamard_2d(&a, &b, &mut c_scalar).unwrap();
//! assert_eq!(c, c_scalar);
//! ```
//!
//! The flat layout works the same way:
//!
//! ```
//! use hadamard::{FlatMatrix, transpose_hadamard_1d};
//!
//! let a = FlatMatrix::new(vec![1.0, 2.0, 3.0, 4.0], 2).unwrap();
//! let b = FlatMatrix::new(vec![1.0; 4], 2).unwrap();
//! let mut c = FlatMatrix::zeros(2).unwrap();
//!
//! transpose_hadamard_1d(&a, &b, &mut c).unwrap();
//! assert_eq!(c.as_slice(), &[1.0, 3.0, 2.0, 4.0]);
//! ```

pub mod bench;
pub mod error;
pub mod matrix;
pub mod scalar;
pub mod simd;

pub use error::{MatrixError, Result};
pub use matrix::{FlatMatrix, RowMatrix};
pub use scalar::{transpose_hadamard_1d, transpose_hadamard_2d};
pub use simd::transpose_hadamard_simd;
