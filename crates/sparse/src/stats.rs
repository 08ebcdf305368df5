//! Occupancy statistics for a sparse matrix.

/// Counters kept up to date by every insertion and removal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatrixStats {
    /// Number of headers in the row index.
    rows: usize,
    /// Number of stored (non-zero) entries.
    entries: usize,
    /// Highest entry count reached since creation or the last clear.
    peak_entries: usize,
}

impl MatrixStats {
    /// Creates a new empty stats instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of live rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of stored entries.
    pub fn entries(&self) -> usize {
        self.entries
    }

    /// Returns the highest entry count reached.
    pub fn peak_entries(&self) -> usize {
        self.peak_entries
    }

    /// Returns the mean number of entries per live row.
    pub fn mean_row_length(&self) -> f64 {
        if self.rows == 0 {
            0.0
        } else {
            self.entries as f64 / self.rows as f64
        }
    }

    pub(crate) fn add_row(&mut self) {
        self.rows += 1;
    }

    pub(crate) fn remove_row(&mut self) {
        debug_assert!(self.rows > 0);
        self.rows -= 1;
    }

    pub(crate) fn add_entry(&mut self) {
        self.entries += 1;
        self.peak_entries = self.peak_entries.max(self.entries);
    }

    pub(crate) fn remove_entry(&mut self) {
        debug_assert!(self.entries > 0);
        self.entries -= 1;
    }

    /// Resets every counter, including the peak.
    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}
