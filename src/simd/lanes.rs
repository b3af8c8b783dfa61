//! Fixed-width f32 vectors behind one interface.
//!
//! The vectorized kernel is written once against [`Lanes`]; the width it
//! steps by and the loads/stores it issues come from the implementation.

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

/// A bundle of `WIDTH` f32 lanes that can be loaded, multiplied and stored.
///
/// # Safety
///
/// Implementations backed by CPU intrinsics are only sound to use after the
/// matching feature has been detected. Callers of the `unsafe fn`s must also
/// pass slices holding at least `WIDTH` elements.
pub unsafe trait Lanes: Copy {
    /// Number of f32 lanes.
    const WIDTH: usize;

    /// Lane values in order, as a plain array.
    type Array: AsRef<[f32]>;

    /// Unaligned load of `src[..WIDTH]`.
    unsafe fn load(src: &[f32]) -> Self;

    /// Unaligned store into `dst[..WIDTH]`.
    unsafe fn store(self, dst: &mut [f32]);

    /// Lanewise IEEE-754 multiply.
    unsafe fn mul(self, rhs: Self) -> Self;

    unsafe fn to_array(self) -> Self::Array;
}

/// Eight lanes in a plain array; builds everywhere, needs no CPU feature.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct F32x8(pub [f32; 8]);

unsafe impl Lanes for F32x8 {
    const WIDTH: usize = 8;
    type Array = [f32; 8];

    #[inline(always)]
    unsafe fn load(src: &[f32]) -> Self {
        let mut v = [0.0; 8];
        v.copy_from_slice(&src[..8]);
        F32x8(v)
    }

    #[inline(always)]
    unsafe fn store(self, dst: &mut [f32]) {
        dst[..8].copy_from_slice(&self.0);
    }

    #[inline(always)]
    unsafe fn mul(self, rhs: Self) -> Self {
        F32x8(std::array::from_fn(|k| self.0[k] * rhs.0[k]))
    }

    #[inline(always)]
    unsafe fn to_array(self) -> [f32; 8] {
        self.0
    }
}

/// Four lanes in an SSE register. SSE is part of the x86_64 baseline.
#[cfg(target_arch = "x86_64")]
#[derive(Clone, Copy, Debug)]
pub struct Sse4(__m128);

#[cfg(target_arch = "x86_64")]
#[allow(unsafe_op_in_unsafe_fn)]
unsafe impl Lanes for Sse4 {
    const WIDTH: usize = 4;
    type Array = [f32; 4];

    #[inline(always)]
    unsafe fn load(src: &[f32]) -> Self {
        debug_assert!(src.len() >= 4);
        Sse4(_mm_loadu_ps(src.as_ptr()))
    }

    #[inline(always)]
    unsafe fn store(self, dst: &mut [f32]) {
        debug_assert!(dst.len() >= 4);
        _mm_storeu_ps(dst.as_mut_ptr(), self.0);
    }

    #[inline(always)]
    unsafe fn mul(self, rhs: Self) -> Self {
        Sse4(_mm_mul_ps(self.0, rhs.0))
    }

    #[inline(always)]
    unsafe fn to_array(self) -> [f32; 4] {
        let mut out = [0.0; 4];
        _mm_storeu_ps(out.as_mut_ptr(), self.0);
        out
    }
}

/// Eight lanes in an AVX register.
#[cfg(target_arch = "x86_64")]
#[derive(Clone, Copy, Debug)]
pub struct Avx8(__m256);

#[cfg(target_arch = "x86_64")]
#[allow(unsafe_op_in_unsafe_fn)]
unsafe impl Lanes for Avx8 {
    const WIDTH: usize = 8;
    type Array = [f32; 8];

    #[inline(always)]
    unsafe fn load(src: &[f32]) -> Self {
        debug_assert!(src.len() >= 8);
        Avx8(_mm256_loadu_ps(src.as_ptr()))
    }

    #[inline(always)]
    unsafe fn store(self, dst: &mut [f32]) {
        debug_assert!(dst.len() >= 8);
        _mm256_storeu_ps(dst.as_mut_ptr(), self.0);
    }

    #[inline(always)]
    unsafe fn mul(self, rhs: Self) -> Self {
        Avx8(_mm256_mul_ps(self.0, rhs.0))
    }

    #[inline(always)]
    unsafe fn to_array(self) -> [f32; 8] {
        let mut out = [0.0; 8];
        _mm256_storeu_ps(out.as_mut_ptr(), self.0);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_lanes<V: Lanes>() {
        let a: Vec<f32> = (0..V::WIDTH).map(|i| i as f32 + 1.0).collect();
        let b: Vec<f32> = (0..V::WIDTH).map(|i| 0.5 * i as f32).collect();
        let mut out = vec![-1.0f32; V::WIDTH + 1];

        unsafe {
            let prod = V::load(&a).mul(V::load(&b));
            prod.store(&mut out);
            assert_eq!(&out[..V::WIDTH], prod.to_array().as_ref());
        }

        for k in 0..V::WIDTH {
            assert_eq!(out[k], a[k] * b[k]);
        }
        // store must not touch anything past WIDTH
        assert_eq!(out[V::WIDTH], -1.0);
    }

    #[test]
    fn test_portable_lanes() {
        check_lanes::<F32x8>();
    }

    #[cfg(target_arch = "x86_64")]
    #[test]
    fn test_sse_lanes() {
        check_lanes::<Sse4>();
    }

    #[cfg(target_arch = "x86_64")]
    #[test]
    fn test_avx_lanes() {
        if !is_x86_feature_detected!("avx") {
            println!("Skipping - AVX not available");
            return;
        }
        check_lanes::<Avx8>();
    }
}
