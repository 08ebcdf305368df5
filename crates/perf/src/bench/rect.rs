//! Rectangular array benchmarks

use super::{access, fill_in_place};
use crate::config::Config;
use crate::report::Report;
use crate::utils::*;
use gridbench_core::{Result, Shape};
use gridbench_dense::{DynamicGrid, StaticGrid};

pub fn run(config: &Config, report: &mut Report) -> Result<()> {
    static_grid(config, report)?;
    dynamic_grid(config, report)?;
    Ok(())
}

fn static_grid(config: &Config, report: &mut Report) -> Result<()> {
    println!("  Static Rectangular ({}x{}):", FIXED_SIZE, FIXED_SIZE);
    if config.rows != FIXED_SIZE || config.cols != FIXED_SIZE {
        println!("    skipped: compiled at {}x{}", FIXED_SIZE, FIXED_SIZE);
        return Ok(());
    }

    let shape = Shape::rectangular(FIXED_SIZE, FIXED_SIZE);
    let bits = random_bits(shape.cell_count(), config.seed);
    let mut grid: StaticGrid<i32, FIXED_SIZE, FIXED_SIZE> = StaticGrid::new();

    fill_in_place("Rectangular/Static", &mut grid, shape, &bits, config.iterations(), report)?;
    access("Rectangular/Static", &grid, shape, config.iterations(), report);
    Ok(())
}

fn dynamic_grid(config: &Config, report: &mut Report) -> Result<()> {
    println!("  Dynamic Rectangular ({}x{}):", config.rows, config.cols);
    let shape = Shape::rectangular(config.rows, config.cols);
    let bits = random_bits(shape.cell_count(), config.seed);
    let mut grid: DynamicGrid<i32> = DynamicGrid::new(config.rows, config.cols);

    fill_in_place("Rectangular/Dynamic", &mut grid, shape, &bits, config.iterations(), report)?;
    access("Rectangular/Dynamic", &grid, shape, config.iterations(), report);
    Ok(())
}
