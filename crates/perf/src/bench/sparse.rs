//! Sparse matrix benchmarks

use super::{access, coordinates};
use crate::config::Config;
use crate::report::Report;
use crate::utils::*;
use gridbench_core::Shape;
use gridbench_sparse::SparseMatrix;

const CATEGORY: &str = "Sparse";

pub fn run(config: &Config, report: &mut Report) {
    println!("  Sparse ({}x{}):", config.rows, config.cols);
    let shape = Shape::rectangular(config.rows, config.cols);
    let bits = random_bits(shape.cell_count(), config.seed);

    let fill = |mut matrix: SparseMatrix<i32>| {
        for ((row, column), &value) in coordinates(shape).zip(&bits) {
            matrix.set(row, column, value);
        }
        matrix
    };

    // Every iteration starts from an empty matrix so each write is an insert
    let result = measure_with_setup(config.iterations(), SparseMatrix::new, &fill);
    let throughput = result.throughput(shape.cell_count());
    println!(
        "    fill:          {:>10} ({:>12}, {:.2} ms)",
        format_duration(result.mean),
        format_throughput(throughput),
        result.mean_ms()
    );
    report.add_result(CATEGORY, "fill", Some(shape.cell_count()), result, Some(throughput));

    let matrix = fill(SparseMatrix::new());
    let stats = matrix.stats();
    let summary = format!(
        "{} entries in {} rows, {:.1} per row",
        stats.entries(),
        stats.rows(),
        stats.mean_row_length()
    );
    println!("    stored:        {}", summary);
    report.annotate(CATEGORY, summary);

    access(CATEGORY, &matrix, shape, config.iterations(), report);
}
