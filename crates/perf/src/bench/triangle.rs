//! Triangular array benchmarks

use super::{access, fill_in_place};
use crate::config::Config;
use crate::report::Report;
use crate::utils::*;
use gridbench_core::{Result, Shape};
use gridbench_dense::{DynamicTriangle, StaticTriangle};

pub fn run(config: &Config, report: &mut Report) -> Result<()> {
    static_triangle(config, report)?;
    dynamic_triangle(config, report)?;
    Ok(())
}

fn static_triangle(config: &Config, report: &mut Report) -> Result<()> {
    println!("  Static Triangular ({} rows):", FIXED_SIZE);
    if config.rows != FIXED_SIZE {
        println!("    skipped: compiled at {} rows", FIXED_SIZE);
        return Ok(());
    }

    let shape = Shape::triangular(FIXED_SIZE);
    let bits = random_bits(shape.cell_count(), config.seed);
    let mut tri: StaticTriangle<i32, FIXED_SIZE, FIXED_TRIANGLE_LEN> = StaticTriangle::new();

    fill_in_place("Triangular/Static", &mut tri, shape, &bits, config.iterations(), report)?;
    access("Triangular/Static", &tri, shape, config.iterations(), report);
    Ok(())
}

fn dynamic_triangle(config: &Config, report: &mut Report) -> Result<()> {
    println!("  Dynamic Triangular ({} rows):", config.rows);
    let shape = Shape::triangular(config.rows);
    let bits = random_bits(shape.cell_count(), config.seed);
    let mut tri: DynamicTriangle<i32> = DynamicTriangle::new(config.rows);

    fill_in_place("Triangular/Dynamic", &mut tri, shape, &bits, config.iterations(), report)?;
    access("Triangular/Dynamic", &tri, shape, config.iterations(), report);
    Ok(())
}
