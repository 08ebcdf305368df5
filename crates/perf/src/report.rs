//! Performance report generation

use crate::utils::{format_duration, format_throughput, BenchResult};
use hashbrown::HashMap;

#[derive(Clone)]
pub struct BenchEntry {
    pub name: String,
    pub category: String,
    pub size: Option<usize>,
    pub result: BenchResult,
    pub throughput: Option<f64>,
    pub note: Option<String>,
}

pub struct Report {
    entries: Vec<BenchEntry>,
    categories: HashMap<String, Vec<usize>>,
}

impl Report {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            categories: HashMap::new(),
        }
    }

    pub fn add(&mut self, entry: BenchEntry) {
        let idx = self.entries.len();
        self.categories
            .entry(entry.category.clone())
            .or_default()
            .push(idx);
        self.entries.push(entry);
    }

    pub fn add_result(
        &mut self,
        category: &str,
        name: &str,
        size: Option<usize>,
        result: BenchResult,
        throughput: Option<f64>,
    ) {
        self.add(BenchEntry {
            name: name.to_string(),
            category: category.to_string(),
            size,
            result,
            throughput,
            note: None,
        });
    }

    /// Attaches a note to the most recent entry of `category`.
    pub fn annotate(&mut self, category: &str, note: String) {
        if let Some(&idx) = self.categories.get(category).and_then(|ids| ids.last()) {
            self.entries[idx].note = Some(note);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn print_summary(&self) {
        println!("╔══════════════════════════════════════════════════════════════════╗");
        println!("║                      PERFORMANCE SUMMARY                         ║");
        println!("╚══════════════════════════════════════════════════════════════════╝\n");

        // Group by category
        let mut categories: Vec<_> = self.categories.keys().collect();
        categories.sort();

        for category in categories {
            println!("┌─ {} ─", category);
            if let Some(indices) = self.categories.get(category.as_str()) {
                for &idx in indices {
                    let entry = &self.entries[idx];
                    let size_str = entry
                        .size
                        .map(|s| format!(" [{:>6}]", format_size(s)))
                        .unwrap_or_default();

                    let throughput_str = entry
                        .throughput
                        .map(|t| format!(" ({})", format_throughput(t)))
                        .unwrap_or_default();

                    let note_str = entry
                        .note
                        .as_ref()
                        .map(|n| format!(" [{}]", n))
                        .unwrap_or_default();

                    println!(
                        "│ {:<14}{}: {:>12} {}{}{}",
                        entry.name,
                        size_str,
                        format_duration(entry.result.mean),
                        entry.result.spread(),
                        throughput_str,
                        note_str
                    );
                }
            }
            println!("└─");
            println!();
        }
    }
}

fn format_size(size: usize) -> String {
    if size >= 1_000_000 {
        format!("{}M", size / 1_000_000)
    } else if size >= 1_000 {
        format!("{}K", size / 1_000)
    } else {
        format!("{}", size)
    }
}
