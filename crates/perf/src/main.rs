//! Array representation comparison
//!
//! Fills each grid representation with pseudo-random 0/1 values, then times
//! reads of its first and last cells.
//!
//! Run with: cargo run -p gridbench-perf --release -- [--rows N] [--cols N] [rect|tri|sparse]...

mod bench;
mod config;
mod report;
mod utils;

use clap::Parser;
use config::{Category, Config};
use report::Report;
use std::error::Error;
use std::thread;

/// The fixed-size grids are built on the stack.
const RUNNER_STACK_SIZE: usize = 64 * 1024 * 1024;

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::parse();

    let runner = thread::Builder::new()
        .name("perf-runner".to_string())
        .stack_size(RUNNER_STACK_SIZE)
        .spawn(move || run(&config))?;

    let report = runner
        .join()
        .map_err(|_| "benchmark runner panicked")??;

    if report.is_empty() {
        println!("No representations selected.");
        return Ok(());
    }

    report.print_summary();
    println!("{} measurements", report.len());
    Ok(())
}

fn run(config: &Config) -> gridbench_core::Result<Report> {
    let mut report = Report::new();

    println!(
        "======== Comparison of arrays with {} elements ========\n",
        config.rows * config.cols
    );

    if config.wants(Category::Rect) {
        println!("Rectangular arrays:");
        bench::rect::run(config, &mut report)?;
        println!();
    }

    if config.wants(Category::Tri) {
        println!("Triangular arrays:");
        bench::triangle::run(config, &mut report)?;
        println!();
    }

    if config.wants(Category::Sparse) {
        println!("Sparse matrix:");
        bench::sparse::run(config, &mut report);
        println!();
    }

    Ok(report)
}
