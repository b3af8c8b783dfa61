//! Vectorized transpose + Hadamard.
//!
//! The kernel in `transpose_mul` is generic over the lane type from
//! `lanes`, so the same index arithmetic runs at any vector width:
//! - `Avx8`: 8 lanes, `__m256`, needs AVX
//! - `Sse4`: 4 lanes, `__m128`, always there on x86_64
//! - `F32x8`: 8 lanes in a plain array, any target

use std::fmt;

use crate::error::Result;
use crate::matrix::RowMatrix;

pub mod lanes;
pub mod transpose_mul;

pub use transpose_mul::{transpose_hadamard_lanes, transpose_hadamard_portable};

#[cfg(target_arch = "x86_64")]
pub use transpose_mul::transpose_hadamard_avx;

/// Vector instruction set the SIMD kernel runs with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backend {
    Avx,
    Sse,
    Portable,
}

impl Backend {
    /// Best backend for the running CPU (AVX > SSE > portable).
    #[cfg(target_arch = "x86_64")]
    pub fn detect() -> Self {
        if is_x86_feature_detected!("avx") {
            Backend::Avx
        } else {
            Backend::Sse
        }
    }

    #[cfg(not(target_arch = "x86_64"))]
    pub fn detect() -> Self {
        Backend::Portable
    }

    /// Lanes per vector.
    pub fn width(self) -> usize {
        match self {
            Backend::Avx | Backend::Portable => 8,
            Backend::Sse => 4,
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Backend::Avx => "AVX",
            Backend::Sse => "SSE",
            Backend::Portable => "portable",
        };
        write!(f, "{} ({} lanes)", name, self.width())
    }
}

/// Vectorized `C = A^T ∘ B`, using the fastest backend this CPU supports.
///
/// # Errors
///
/// Returns `DimensionMismatch` if B or C differ in size from A.
pub fn transpose_hadamard_simd(a: &RowMatrix, b: &RowMatrix, c: &mut RowMatrix) -> Result<()> {
    match Backend::detect() {
        #[cfg(target_arch = "x86_64")]
        Backend::Avx => unsafe { transpose_hadamard_avx(a, b, c) },
        #[cfg(target_arch = "x86_64")]
        Backend::Sse => unsafe { transpose_hadamard_lanes::<lanes::Sse4>(a, b, c) },
        _ => transpose_hadamard_portable(a, b, c),
    }
}
