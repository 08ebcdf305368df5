//! Benchmark modules

pub mod rect;
pub mod sparse;
pub mod triangle;

use crate::report::Report;
use crate::utils::*;
use gridbench_core::{Grid, Result, Shape};

/// Coordinates of every addressable cell in fill order (row-major).
pub fn coordinates(shape: Shape) -> impl Iterator<Item = (usize, usize)> {
    (0..shape.rows()).flat_map(move |row| {
        let width = if shape.is_triangular() {
            row + 1
        } else {
            shape.columns()
        };
        (0..width).map(move |column| (row, column))
    })
}

/// Writes one value from `bits` into every cell of `shape`.
pub fn fill<G: Grid<i32>>(grid: &mut G, shape: Shape, bits: &[i32]) -> Result<()> {
    for ((row, column), &value) in coordinates(shape).zip(bits) {
        grid.write(row, column, value)?;
    }
    Ok(())
}

/// Times a full fill of a grid that is overwritten in place each iteration.
pub fn fill_in_place<G: Grid<i32>>(
    category: &str,
    grid: &mut G,
    shape: Shape,
    bits: &[i32],
    iterations: usize,
    report: &mut Report,
) -> Result<()> {
    // One checked pass first so a shape error surfaces instead of being timed
    fill(grid, shape, bits)?;

    let result = measure(iterations, || fill(grid, shape, bits));
    let throughput = result.throughput(shape.cell_count());
    println!(
        "    fill:          {:>10} ({:>12})",
        format_duration(result.mean),
        format_throughput(throughput)
    );
    report.add_result(category, "fill", Some(shape.cell_count()), result, Some(throughput));
    Ok(())
}

/// Times single reads of the first and last addressable cells.
pub fn access<G: Grid<i32>>(
    category: &str,
    grid: &G,
    shape: Shape,
    iterations: usize,
    report: &mut Report,
) {
    let Some(last) = shape.last() else {
        println!("    access: skipped, empty grid");
        return;
    };

    for (name, (row, column)) in [("first access", (0, 0)), ("last access", last)] {
        let result = measure(iterations, || grid.read(row, column));
        println!("    {:<14} {:>10}", format!("{}:", name), format_duration(result.mean));
        report.add_result(category, name, None, result, None);
    }
}
