//! Utility functions for benchmarking

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};

/// Warmup iterations before measurement
pub const WARMUP_ITERATIONS: usize = 3;

/// Default grid extent, matching the compiled size of the fixed-size grids
pub const DEFAULT_ROWS: usize = 500;
pub const DEFAULT_COLS: usize = 500;

/// Fixed-size grids are compiled at this extent
pub const FIXED_SIZE: usize = 500;

/// Packed length of a fixed-size triangle of `FIXED_SIZE` rows
pub const FIXED_TRIANGLE_LEN: usize = FIXED_SIZE * (FIXED_SIZE + 1) / 2;

/// Measure execution time with multiple iterations (includes warmup)
pub fn measure<F, R>(iterations: usize, mut f: F) -> BenchResult
where
    F: FnMut() -> R,
{
    // Warmup phase - exclude from measurements
    for _ in 0..WARMUP_ITERATIONS {
        std::hint::black_box(f());
    }

    let mut times = Vec::with_capacity(iterations);

    for _ in 0..iterations {
        let start = Instant::now();
        std::hint::black_box(f());
        times.push(start.elapsed());
    }

    BenchResult::from_times(&times)
}

/// Measure with setup function (setup time excluded, includes warmup)
pub fn measure_with_setup<S, F, T, R>(iterations: usize, mut setup: S, mut f: F) -> BenchResult
where
    S: FnMut() -> T,
    F: FnMut(T) -> R,
{
    // Warmup phase
    for _ in 0..WARMUP_ITERATIONS {
        let data = setup();
        std::hint::black_box(f(data));
    }

    let mut times = Vec::with_capacity(iterations);

    for _ in 0..iterations {
        let data = setup();
        let start = Instant::now();
        std::hint::black_box(f(data));
        times.push(start.elapsed());
    }

    BenchResult::from_times(&times)
}

/// Timing summary of one measured case
#[derive(Clone, Debug)]
pub struct BenchResult {
    pub mean: Duration,
    pub median: Duration,
    pub std_dev: Duration,
    pub samples: usize,
}

impl BenchResult {
    /// Summarises the samples. An empty sample set yields all-zero durations.
    pub fn from_times(times: &[Duration]) -> Self {
        let mut sorted: Vec<_> = times.to_vec();
        sorted.sort_unstable();

        let count = sorted.len().max(1);
        let total: Duration = sorted.iter().sum();
        let mean = total / count as u32;
        let median = sorted.get(sorted.len() / 2).copied().unwrap_or_default();

        let mean_nanos = mean.as_nanos() as f64;
        let variance = sorted
            .iter()
            .map(|t| (t.as_nanos() as f64 - mean_nanos).powi(2))
            .sum::<f64>()
            / count as f64;

        Self {
            mean,
            median,
            std_dev: Duration::from_nanos(variance.sqrt() as u64),
            samples: sorted.len(),
        }
    }

    /// Spread of the samples as printed in the summary table
    pub fn spread(&self) -> String {
        format!(
            "± {} (median {}, n={})",
            format_duration(self.std_dev),
            format_duration(self.median),
            self.samples
        )
    }

    pub fn mean_ms(&self) -> f64 {
        self.mean.as_secs_f64() * 1000.0
    }

    pub fn throughput(&self, count: usize) -> f64 {
        let secs = self.mean.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            count as f64 / secs
        }
    }
}

/// Format duration for display
pub fn format_duration(d: Duration) -> String {
    let nanos = d.as_nanos();
    if nanos < 1_000 {
        format!("{} ns", nanos)
    } else if nanos < 1_000_000 {
        format!("{:.2} μs", nanos as f64 / 1_000.0)
    } else if nanos < 1_000_000_000 {
        format!("{:.2} ms", nanos as f64 / 1_000_000.0)
    } else {
        format!("{:.2} s", nanos as f64 / 1_000_000_000.0)
    }
}

/// Format throughput for display
pub fn format_throughput(ops_per_sec: f64) -> String {
    if ops_per_sec >= 1_000_000.0 {
        format!("{:.2}M ops/s", ops_per_sec / 1_000_000.0)
    } else if ops_per_sec >= 1_000.0 {
        format!("{:.2}K ops/s", ops_per_sec / 1_000.0)
    } else {
        format!("{:.2} ops/s", ops_per_sec)
    }
}

/// Reproducible stream of 0/1 cell values
pub fn random_bits(count: usize, seed: u64) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| rng.gen_range(0..2)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_times() {
        let times = [
            Duration::from_micros(30),
            Duration::from_micros(10),
            Duration::from_micros(20),
        ];
        let result = BenchResult::from_times(&times);
        assert_eq!(result.mean, Duration::from_micros(20));
        assert_eq!(result.median, Duration::from_micros(20));
        assert_eq!(result.samples, 3);
        assert!(result.std_dev > Duration::ZERO);
    }

    #[test]
    fn test_spread() {
        let times = [Duration::from_micros(4), Duration::from_micros(4)];
        let result = BenchResult::from_times(&times);
        assert_eq!(result.std_dev, Duration::ZERO);
        assert_eq!(result.spread(), "± 0 ns (median 4.00 μs, n=2)");
    }

    #[test]
    fn test_from_times_empty() {
        let result = BenchResult::from_times(&[]);
        assert_eq!(result.mean, Duration::ZERO);
        assert_eq!(result.samples, 0);
        assert_eq!(result.throughput(100), 0.0);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_nanos(500)), "500 ns");
        assert_eq!(format_duration(Duration::from_nanos(1_500)), "1.50 μs");
        assert_eq!(format_duration(Duration::from_micros(2_250)), "2.25 ms");
        assert_eq!(format_duration(Duration::from_secs(3)), "3.00 s");
    }

    #[test]
    fn test_format_throughput() {
        assert_eq!(format_throughput(2_500_000.0), "2.50M ops/s");
        assert_eq!(format_throughput(1_500.0), "1.50K ops/s");
        assert_eq!(format_throughput(12.0), "12.00 ops/s");
    }

    #[test]
    fn test_random_bits() {
        let bits = random_bits(1_000, 42);
        assert_eq!(bits.len(), 1_000);
        assert!(bits.iter().all(|&b| b == 0 || b == 1));
        assert!(bits.contains(&0) && bits.contains(&1));
        assert_eq!(bits, random_bits(1_000, 42));
    }
}
