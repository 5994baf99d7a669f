//! Benchmark runner for the multiplication strategies.

use std::env;
use std::process;
use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tiled_matmul::{Config, Matrix, Multiplier, Result, Strategy};

fn main() {
    let verbosity = env::var("MATMUL_VERBOSE")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(1);
    stderrlog::new()
        .module(module_path!())
        .module("tiled_matmul")
        .verbosity(verbosity)
        .init()
        .ok();

    if let Err(e) = run() {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    println!("=== Integer Matrix Multiplication Benchmark ===\n");

    let config = Config::from_env()?;
    let multiplier = Multiplier::new(config);
    let sizes = [256, 512];
    let iterations = 3;
    let mut rng = StdRng::from_os_rng();
    let mut all_results = Vec::new();

    println!(
        "Block edge: {} elements, workers: {:?}\n",
        config.block_edge.resolve::<i32>()?,
        config.workers
    );

    for &size in &sizes {
        println!("Matrix: {}×{}", size, size);
        println!("{}", "-".repeat(50));

        let a: Matrix<i32> = Matrix::random(size, 0..100, &mut rng);
        let b: Matrix<i32> = Matrix::random(size, 0..100, &mut rng);

        let mut gold = Matrix::zeros(size);
        multiplier.multiply(Strategy::Serial, &a, &b, &mut gold)?;

        let mut results = Vec::new();
        for strategy in Strategy::ALL {
            let time_ms = bench(&multiplier, strategy, &a, &b, &gold, iterations)?;
            results.push((strategy, time_ms));
        }

        let baseline_time = results[0].1;
        for (i, (strategy, time_ms)) in results.iter().enumerate() {
            println!(
                "{}. {:16} {:8.2} ms  ({:.1}×)",
                i + 1,
                strategy.name(),
                time_ms,
                baseline_time / time_ms
            );
        }
        println!();

        all_results.push((size, results));
    }

    print_summary_table(&all_results);
    Ok(())
}

/// Average wall time of `strategy` in milliseconds, after one warmup run
/// that is checked against `gold`.
fn bench(
    multiplier: &Multiplier,
    strategy: Strategy,
    a: &Matrix<i32>,
    b: &Matrix<i32>,
    gold: &Matrix<i32>,
    iterations: usize,
) -> Result<f64> {
    let n = a.dim();

    let mut r = Matrix::zeros(n);
    multiplier.multiply(strategy, a, b, &mut r)?;
    if &r != gold {
        log::error!("{} disagrees with the naive result", strategy);
    }

    let mut total = 0.0;
    for _ in 0..iterations {
        r.fill_zero();
        let start = Instant::now();
        multiplier.multiply(strategy, a, b, &mut r)?;
        total += start.elapsed().as_secs_f64();
    }

    Ok(total / iterations as f64 * 1000.0)
}

fn print_summary_table(all_results: &[(usize, Vec<(Strategy, f64)>)]) {
    println!("{}", "=".repeat(60));
    println!("SUMMARY");
    println!("{}", "=".repeat(60));

    print!("\n{:<18}", "Method");
    for (size, _) in all_results {
        print!(" {:>14}", format!("{}×{}", size, size));
    }
    println!(" {:>10}", "Speedup");
    println!("{}", "-".repeat(60));

    for (method_idx, strategy) in Strategy::ALL.iter().enumerate() {
        print!("{:<18}", strategy.name());
        let mut speedups = Vec::new();
        for (_, results) in all_results {
            let time_ms = results[method_idx].1;
            speedups.push(results[0].1 / time_ms);
            print!(" {:>11.2} ms", time_ms);
        }
        let avg_speedup: f64 = speedups.iter().sum::<f64>() / speedups.len() as f64;
        println!(" {:>9.1}×", avg_speedup);
    }

    println!("{}", "=".repeat(60));
    println!("\nSpeedup relative to Naive (i-j-k). Higher is better.\n");
}
