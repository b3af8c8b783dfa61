//! Benchmark driver: build the inputs, time each kernel once, report.

use std::fmt;
use std::time::{Duration, Instant};

use cpu_time::ProcessTime;
use rand::Rng;
use tracing::{debug, info_span};

use crate::error::Result;
use crate::matrix::{FlatMatrix, RowMatrix};
use crate::scalar::{transpose_hadamard_1d, transpose_hadamard_2d};
use crate::simd::{Backend, transpose_hadamard_simd};

/// Matrix dimension the benchmark binary runs at.
pub const N: usize = 1024;

/// Inputs and output shared by all three kernels.
#[derive(Clone, Debug)]
pub struct Workload {
    pub a: RowMatrix,
    pub b: RowMatrix,
    pub c: RowMatrix,
}

impl Workload {
    /// Random A and B in [0, 1), zeroed C.
    pub fn generate<R: Rng>(rng: &mut R, n: usize) -> Result<Self> {
        let (a, b) = RowMatrix::rand_pair(rng, n)?;
        let c = RowMatrix::zeros(n)?;
        Ok(Self { a, b, c })
    }
}

/// Process CPU time of each kernel for one run.
#[derive(Clone, Debug)]
pub struct Report {
    pub n: usize,
    pub backend: Backend,
    pub scalar_2d: Duration,
    pub scalar_1d: Duration,
    pub simd: Duration,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "N = {}", self.n)?;
        writeln!(f)?;
        writeln!(f, "Scalar 2D time: {:.6} seconds", self.scalar_2d.as_secs_f64())?;
        writeln!(f)?;
        writeln!(f, "Scalar 1D time: {:.6} seconds", self.scalar_1d.as_secs_f64())?;
        writeln!(f)?;
        write!(f, "SIMD time: {:.6} seconds", self.simd.as_secs_f64())
    }
}

/// Runs `f` once and returns the process CPU time it consumed.
///
/// Wall time is only logged, at debug level.
pub fn time_kernel<F>(name: &str, f: F) -> Result<Duration>
where
    F: FnOnce() -> Result<()>,
{
    let _span = info_span!("kernel", kernel = name).entered();

    let wall_start = Instant::now();
    let cpu_start = ProcessTime::now();
    f()?;
    let cpu = cpu_start.elapsed();
    let wall = wall_start.elapsed();

    debug!(
        cpu_seconds = cpu.as_secs_f64(),
        wall_seconds = wall.as_secs_f64(),
        "finished"
    );
    Ok(cpu)
}

/// Runs scalar 2D, scalar 1D and SIMD kernels on one random workload of size `n`.
///
/// The flat copies for the 1D kernel are built between timings, so copying
/// isn't charged to any kernel. The SIMD kernel reuses the 2D inputs and
/// overwrites the same C as the scalar 2D run.
pub fn run<R: Rng>(rng: &mut R, n: usize) -> Result<Report> {
    let Workload { a, b, mut c } = Workload::generate(rng, n)?;

    let scalar_2d = time_kernel("scalar_2d", || transpose_hadamard_2d(&a, &b, &mut c))?;

    let a_flat = a.flatten();
    let b_flat = b.flatten();
    let mut c_flat = FlatMatrix::zeros(n)?;

    let scalar_1d = time_kernel("scalar_1d", || {
        transpose_hadamard_1d(&a_flat, &b_flat, &mut c_flat)
    })?;

    let backend = Backend::detect();
    let simd = time_kernel("simd", || transpose_hadamard_simd(&a, &b, &mut c))?;

    Ok(Report {
        n,
        backend,
        scalar_2d,
        scalar_1d,
        simd,
    })
}
