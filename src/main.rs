//! Benchmark runner for the transpose + Hadamard kernels.

use clap::Parser;
use hadamard::MatrixError;
use hadamard::bench::{self, N};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Seed for the random input matrices. Drawn from OS entropy when omitted.
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> Result<(), MatrixError> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    // stdout carries the report
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, n = N, "generating inputs");

    let mut rng = StdRng::seed_from_u64(seed);
    let report = bench::run(&mut rng, N)?;
    info!(backend = %report.backend, "vectorized kernel");

    println!("\n\n{report}\n\n");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_with_seed() {
        let args = Args::try_parse_from(["hadamard", "--seed", "7"]).unwrap();
        assert_eq!(args.seed, Some(7));

        let args = Args::try_parse_from(["hadamard", "-s", "42"]).unwrap();
        assert_eq!(args.seed, Some(42));
    }

    #[test]
    fn test_args_without_seed() {
        let args = Args::try_parse_from(["hadamard"]).unwrap();
        assert_eq!(args.seed, None);
    }

    #[test]
    fn test_args_rejects_bad_seed() {
        assert!(Args::try_parse_from(["hadamard", "--seed", "-1"]).is_err());
        assert!(Args::try_parse_from(["hadamard", "--size", "8"]).is_err());
    }
}
