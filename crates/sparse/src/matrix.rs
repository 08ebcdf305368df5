//! Sparse matrix implementation.

use crate::arena::Arena;
use crate::iter::{Iter, RowEntries, Rows};
use crate::node::{EntryId, EntryNode, RowId, RowNode, NULL_ENTRY, ROW_SENTINEL};
use crate::stats::MatrixStats;
use alloc::format;
use core::fmt;
use gridbench_core::{Cell, Error, Grid, Result};

/// A sparse matrix storing only non-zero cells.
///
/// The row index is a singly-linked list of row headers in ascending row
/// order. Each header owns a singly-linked list of entries in ascending column
/// order. A row is present in the index exactly when its entry list is
/// non-empty, and no entry ever holds the zero value.
#[derive(Clone)]
pub struct SparseMatrix<T> {
    /// Row headers. Slot `ROW_SENTINEL` is the row index sentinel.
    rows: Arena<RowNode>,
    /// Entries and the sentinel head of every row's entry list.
    entries: Arena<EntryNode<T>>,
    /// Live row and entry counters.
    stats: MatrixStats,
}

impl<T> SparseMatrix<T> {
    /// Creates an empty matrix.
    pub fn new() -> Self {
        Self::with_capacity(0, 0)
    }

    /// Creates an empty matrix with room for `rows` row headers and `entries` cells.
    pub fn with_capacity(rows: usize, entries: usize) -> Self {
        let mut row_arena = Arena::with_capacity(rows + 1);
        let sentinel = row_arena.alloc(RowNode::sentinel());
        debug_assert_eq!(sentinel, ROW_SENTINEL);

        Self {
            rows: row_arena,
            // One sentinel per row on top of the cells
            entries: Arena::with_capacity(entries + rows),
            stats: MatrixStats::new(),
        }
    }

    /// Returns the number of stored (non-zero) cells.
    pub fn len(&self) -> usize {
        self.stats.entries()
    }

    /// Returns true if no cell is stored.
    pub fn is_empty(&self) -> bool {
        self.rows[ROW_SENTINEL].next.is_none()
    }

    /// Returns the number of rows holding at least one cell.
    pub fn row_count(&self) -> usize {
        self.stats.rows()
    }

    /// Returns the occupancy statistics.
    pub fn stats(&self) -> &MatrixStats {
        &self.stats
    }

    /// Returns the number of allocated row and entry slots, sentinels included.
    pub fn allocated_slots(&self) -> (usize, usize) {
        (self.rows.slots(), self.entries.slots())
    }

    /// Returns the last row header whose number is strictly less than `row`,
    /// or the row index sentinel.
    fn find_row_before(&self, row: usize) -> RowId {
        let mut current = ROW_SENTINEL;
        while let Some(next) = self.rows[current].next {
            if self.rows[next].key >= row {
                break;
            }
            current = next;
        }
        current
    }

    /// Returns the last entry after `head` whose column is strictly less than
    /// `column`, or `head` itself.
    fn find_column_before(&self, head: EntryId, column: usize) -> EntryId {
        let mut current = head;
        while let Some(next) = self.entries[current].next {
            if self.entries[next].key >= column {
                break;
            }
            current = next;
        }
        current
    }

    /// Locates the header for `row`, returning its predecessor and the header.
    fn locate_row(&self, row: usize) -> (RowId, Option<RowId>) {
        let before = self.find_row_before(row);
        let found = self.rows[before]
            .next
            .filter(|&next| self.rows[next].key == row);
        (before, found)
    }

    /// Locates the entry for `column` in the list starting at `head`,
    /// returning its predecessor and the entry.
    fn locate_entry(&self, head: EntryId, column: usize) -> (EntryId, Option<EntryId>) {
        let before = self.find_column_before(head, column);
        let found = self.entries[before]
            .next
            .filter(|&next| self.entries[next].key == column);
        (before, found)
    }

    /// Returns a reference to the stored cell, or None if the cell is zero.
    pub fn get_ref(&self, row: usize, column: usize) -> Option<&T> {
        let (_, row_id) = self.locate_row(row);
        let head = self.rows[row_id?].head;
        let (_, entry_id) = self.locate_entry(head, column);
        self.entries[entry_id?].value.as_ref()
    }

    /// Returns true if a non-zero cell is stored at the coordinate.
    pub fn contains(&self, row: usize, column: usize) -> bool {
        self.get_ref(row, column).is_some()
    }

    /// Removes the cell and returns its value, or None if nothing was stored.
    ///
    /// Removing the last cell of a row also removes the row header.
    pub fn take(&mut self, row: usize, column: usize) -> Option<T> {
        let (row_before, row_id) = self.locate_row(row);
        let row_id = row_id?;
        let head = self.rows[row_id].head;
        let (entry_before, entry_id) = self.locate_entry(head, column);
        let entry_id = entry_id?;

        self.entries[entry_before].next = self.entries[entry_id].next;
        let value = self.entries[entry_id].value.take();
        self.entries.release(entry_id);
        self.stats.remove_entry();

        // At most one entry is removed per call, so an empty row shows up as
        // a sentinel with no successor.
        if self.entries[head].next.is_none() {
            self.rows[row_before].next = self.rows[row_id].next;
            self.entries.release(head);
            self.rows.release(row_id);
            self.stats.remove_row();
        }

        value
    }

    /// Removes the cell. Returns false if nothing was stored there.
    pub fn delete(&mut self, row: usize, column: usize) -> bool {
        self.take(row, column).is_some()
    }

    /// Removes every cell and row.
    pub fn clear(&mut self) {
        self.rows.clear();
        self.rows.alloc(RowNode::sentinel());
        self.entries.clear();
        self.stats.clear();
    }

    /// Returns an iterator over every stored cell in row-major order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.rows, &self.entries, ROW_SENTINEL, self.len())
    }

    /// Returns an iterator over the row numbers holding at least one cell.
    pub fn rows(&self) -> Rows<'_> {
        Rows::new(&self.rows, ROW_SENTINEL)
    }

    /// Returns an iterator over the cells of one row, empty if the row is absent.
    pub fn row(&self, row: usize) -> RowEntries<'_, T> {
        let (_, row_id) = self.locate_row(row);
        RowEntries::new(&self.entries, row_id.map(|id| self.rows[id].head))
    }
}

impl<T: Cell> SparseMatrix<T> {
    /// Returns the cell value, or zero if the cell was never written or was cleared.
    pub fn get(&self, row: usize, column: usize) -> T {
        self.get_ref(row, column).cloned().unwrap_or_else(T::zero)
    }

    /// Stores a value. Writing zero removes the cell.
    pub fn set(&mut self, row: usize, column: usize, value: T) {
        if value.is_zero() {
            self.delete(row, column);
            return;
        }

        let (row_before, row_id) = self.locate_row(row);
        let row_id = match row_id {
            Some(id) => id,
            None => {
                let head = self.entries.alloc(EntryNode::sentinel());
                let next = self.rows[row_before].next;
                let id = self.rows.alloc(RowNode::new(row, head, next));
                self.rows[row_before].next = Some(id);
                self.stats.add_row();
                id
            }
        };

        let head = self.rows[row_id].head;
        let (entry_before, entry_id) = self.locate_entry(head, column);
        match entry_id {
            Some(id) => self.entries[id].value = Some(value),
            None => {
                let next = self.entries[entry_before].next;
                let id = self.entries.alloc(EntryNode::new(column, value, next));
                self.entries[entry_before].next = Some(id);
                self.stats.add_entry();
            }
        }
    }

    /// Walks both lists and reports the first broken invariant.
    ///
    /// Checks ascending unique keys, that no row is empty, that no entry
    /// stores zero, and that the counters match the lists.
    pub fn check_invariants(&self) -> Result<()> {
        let mut row_total = 0;
        let mut entry_total = 0;
        let mut previous_row: Option<usize> = None;
        let mut current = self.rows[ROW_SENTINEL].next;

        while let Some(row_id) = current {
            let node = &self.rows[row_id];
            if let Some(prev) = previous_row {
                if node.key <= prev {
                    return Err(Error::invariant_violation(format!(
                        "row {} follows row {}",
                        node.key, prev
                    )));
                }
            }
            if node.head == NULL_ENTRY {
                return Err(Error::invariant_violation(format!(
                    "row {} has no entry list",
                    node.key
                )));
            }
            if self.entries[node.head].next.is_none() {
                return Err(Error::invariant_violation(format!(
                    "row {} is empty",
                    node.key
                )));
            }

            let mut previous_column: Option<usize> = None;
            let mut entry = self.entries[node.head].next;
            while let Some(entry_id) = entry {
                let cell = &self.entries[entry_id];
                if let Some(prev) = previous_column {
                    if cell.key <= prev {
                        return Err(Error::invariant_violation(format!(
                            "column {} follows column {} in row {}",
                            cell.key, prev, node.key
                        )));
                    }
                }
                match cell.value.as_ref() {
                    None => {
                        return Err(Error::invariant_violation(format!(
                            "cell ({}, {}) has no value",
                            node.key, cell.key
                        )))
                    }
                    Some(value) if value.is_zero() => {
                        return Err(Error::invariant_violation(format!(
                            "cell ({}, {}) stores zero",
                            node.key, cell.key
                        )))
                    }
                    Some(_) => {}
                }
                previous_column = Some(cell.key);
                entry_total += 1;
                entry = cell.next;
            }

            previous_row = Some(node.key);
            row_total += 1;
            current = node.next;
        }

        if row_total != self.stats.rows() || entry_total != self.stats.entries() {
            return Err(Error::invariant_violation(format!(
                "counted {} rows and {} entries, stats report {} and {}",
                row_total,
                entry_total,
                self.stats.rows(),
                self.stats.entries()
            )));
        }

        // Live slots: the row index sentinel, then one entry sentinel per row
        if self.rows.len() != row_total + 1 || self.entries.len() != entry_total + row_total {
            return Err(Error::invariant_violation(format!(
                "{} live row slots and {} live entry slots for {} rows and {} entries",
                self.rows.len(),
                self.entries.len(),
                row_total,
                entry_total
            )));
        }
        Ok(())
    }
}

impl<T> Default for SparseMatrix<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(row, column, value)| ((row, column), value)))
            .finish()
    }
}

/// Two matrices are equal when they store the same cells; arena layout is
/// not compared.
impl<T: PartialEq> PartialEq for SparseMatrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SparseMatrix<T> {}

impl<T: Cell> Extend<(usize, usize, T)> for SparseMatrix<T> {
    fn extend<I: IntoIterator<Item = (usize, usize, T)>>(&mut self, iter: I) {
        for (row, column, value) in iter {
            self.set(row, column, value);
        }
    }
}

impl<T: Cell> FromIterator<(usize, usize, T)> for SparseMatrix<T> {
    fn from_iter<I: IntoIterator<Item = (usize, usize, T)>>(iter: I) -> Self {
        let mut matrix = Self::new();
        matrix.extend(iter);
        matrix
    }
}

impl<'a, T> IntoIterator for &'a SparseMatrix<T> {
    type Item = (usize, usize, &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Cell> Grid<T> for SparseMatrix<T> {
    fn read(&self, row: usize, column: usize) -> Option<T> {
        Some(self.get(row, column))
    }

    fn write(&mut self, row: usize, column: usize, value: T) -> Result<()> {
        self.set(row, column, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn row_numbers<T>(matrix: &SparseMatrix<T>) -> Vec<usize> {
        matrix.rows().collect()
    }

    #[test]
    fn test_matrix_new() {
        let matrix: SparseMatrix<i32> = SparseMatrix::new();
        assert!(matrix.is_empty());
        assert_eq!(matrix.len(), 0);
        assert_eq!(matrix.row_count(), 0);
        assert_eq!(matrix.get(0, 0), 0);
        assert_eq!(matrix.allocated_slots(), (1, 0));
        matrix.check_invariants().unwrap();
    }

    #[test]
    fn test_matrix_set_get() {
        let mut matrix = SparseMatrix::new();
        matrix.set(1, 2, 7);
        matrix.set(0, 5, 3);
        matrix.set(1, 0, 9);

        assert_eq!(matrix.get(1, 2), 7);
        assert_eq!(matrix.get(0, 5), 3);
        assert_eq!(matrix.get(1, 0), 9);
        assert_eq!(matrix.get(1, 1), 0);
        assert_eq!(matrix.get(2, 2), 0);
        assert_eq!(matrix.len(), 3);
        assert_eq!(matrix.row_count(), 2);
        matrix.check_invariants().unwrap();
    }

    #[test]
    fn test_matrix_overwrite_in_place() {
        let mut matrix = SparseMatrix::new();
        matrix.set(4, 4, 1);
        let slots = matrix.allocated_slots();

        matrix.set(4, 4, 2);
        assert_eq!(matrix.get(4, 4), 2);
        assert_eq!(matrix.len(), 1);
        assert_eq!(matrix.allocated_slots(), slots);
    }

    #[test]
    fn test_matrix_zero_removes_cell_and_row() {
        let mut matrix = SparseMatrix::new();
        matrix.set(2, 3, 5);
        assert_eq!(row_numbers(&matrix), vec![2]);

        matrix.set(2, 3, 0);
        assert_eq!(matrix.get(2, 3), 0);
        assert!(row_numbers(&matrix).is_empty());
        assert!(matrix.is_empty());
        assert_eq!(matrix, SparseMatrix::new());
        matrix.check_invariants().unwrap();
    }

    #[test]
    fn test_matrix_scenario_corners() {
        let mut matrix = SparseMatrix::new();
        matrix.set(2, 3, 5);
        matrix.set(2, 3, 0);
        assert_eq!(matrix.get(2, 3), 0);
        assert!(!matrix.rows().any(|r| r == 2));

        matrix.set(0, 0, 1);
        matrix.set(499, 499, 1);
        assert_eq!(matrix.get(0, 0), 1);
        assert_eq!(matrix.get(499, 499), 1);
        assert_eq!(matrix.get(1, 1), 0);
        assert_eq!(row_numbers(&matrix), vec![0, 499]);
    }

    #[test]
    fn test_matrix_head_insertion() {
        let mut matrix = SparseMatrix::new();
        matrix.set(5, 5, 1);
        matrix.set(3, 5, 1);
        matrix.set(0, 5, 1);
        matrix.set(5, 2, 1);
        matrix.set(5, 0, 1);

        assert_eq!(row_numbers(&matrix), vec![0, 3, 5]);
        let columns: Vec<usize> = matrix.row(5).map(|(c, _)| c).collect();
        assert_eq!(columns, vec![0, 2, 5]);
        matrix.check_invariants().unwrap();
    }

    #[test]
    fn test_matrix_delete_missing_is_noop() {
        let mut matrix = SparseMatrix::new();
        matrix.set(1, 1, 4);
        matrix.set(3, 2, 6);
        let before = matrix.clone();

        assert!(!matrix.delete(0, 0));
        assert!(!matrix.delete(1, 0));
        assert!(!matrix.delete(1, 2));
        assert!(!matrix.delete(2, 1));
        assert!(!matrix.delete(9, 9));
        matrix.set(7, 7, 0);

        assert_eq!(matrix, before);
        assert_eq!(matrix.allocated_slots(), before.allocated_slots());
    }

    #[test]
    fn test_matrix_delete_middle_keeps_row() {
        let mut matrix = SparseMatrix::new();
        for column in 0..5 {
            matrix.set(1, column, column as i32 + 1);
        }

        assert!(matrix.delete(1, 2));
        assert_eq!(matrix.get(1, 2), 0);
        assert_eq!(matrix.get(1, 3), 4);
        assert_eq!(row_numbers(&matrix), vec![1]);
        assert_eq!(matrix.len(), 4);
        matrix.check_invariants().unwrap();
    }

    #[test]
    fn test_matrix_row_cleanup_between_rows() {
        let mut matrix = SparseMatrix::new();
        matrix.set(0, 0, 1);
        matrix.set(1, 0, 1);
        matrix.set(1, 4, 1);
        matrix.set(2, 0, 1);

        matrix.delete(1, 4);
        matrix.delete(1, 0);
        assert_eq!(row_numbers(&matrix), vec![0, 2]);
        assert_eq!(matrix.row_count(), 2);
        assert_eq!(matrix.row(1).count(), 0);
        matrix.check_invariants().unwrap();
    }

    #[test]
    fn test_matrix_take() {
        let mut matrix = SparseMatrix::new();
        matrix.set(3, 3, 8);
        assert_eq!(matrix.take(3, 3), Some(8));
        assert_eq!(matrix.take(3, 3), None);
        assert!(matrix.is_empty());
    }

    #[test]
    fn test_matrix_slot_reuse() {
        let mut matrix = SparseMatrix::new();
        matrix.set(0, 0, 1);
        matrix.set(0, 0, 0);
        let slots = matrix.allocated_slots();

        matrix.set(6, 6, 1);
        assert_eq!(matrix.allocated_slots(), slots);
        assert_eq!(matrix.get(6, 6), 1);
    }

    #[test]
    fn test_matrix_iter_order() {
        let matrix: SparseMatrix<i32> =
            [(2, 1, 6), (0, 3, 2), (2, 0, 5), (0, 1, 1), (1, 2, 4)]
                .into_iter()
                .collect();

        let cells: Vec<_> = matrix.iter().map(|(r, c, &v)| (r, c, v)).collect();
        assert_eq!(
            cells,
            vec![(0, 1, 1), (0, 3, 2), (1, 2, 4), (2, 0, 5), (2, 1, 6)]
        );
        assert_eq!(matrix.iter().len(), 5);
        assert_eq!((&matrix).into_iter().count(), 5);
    }

    #[test]
    fn test_matrix_clear() {
        let mut matrix = SparseMatrix::new();
        matrix.extend([(1, 1, 1.5), (2, 2, 2.5)]);
        matrix.clear();
        assert!(matrix.is_empty());
        assert_eq!(matrix.len(), 0);
        assert_eq!(matrix.stats().peak_entries(), 0);
        assert_eq!(matrix.allocated_slots(), (1, 0));

        matrix.set(1, 1, 3.0);
        assert_eq!(matrix.get(1, 1), 3.0);
        matrix.check_invariants().unwrap();
    }

    #[test]
    fn test_matrix_stats() {
        let mut matrix = SparseMatrix::new();
        matrix.set(0, 0, 1u8);
        matrix.set(0, 1, 1);
        matrix.set(5, 1, 1);
        assert_eq!(matrix.stats().rows(), 2);
        assert_eq!(matrix.stats().entries(), 3);

        matrix.set(0, 0, 0);
        assert_eq!(matrix.stats().entries(), 2);
        assert_eq!(matrix.stats().peak_entries(), 3);
    }

    #[test]
    fn test_matrix_debug() {
        let mut matrix = SparseMatrix::new();
        matrix.set(1, 2, 3);
        assert_eq!(format!("{:?}", matrix), "{(1, 2): 3}");
    }

    #[test]
    fn test_matrix_grid_trait() {
        let mut matrix = SparseMatrix::new();
        matrix.write(10, 20, 4i64).unwrap();
        assert_eq!(matrix.read(10, 20), Some(4));
        assert_eq!(matrix.read(20, 10), Some(0));
    }

    #[test]
    fn test_matrix_max_coordinates() {
        let mut matrix = SparseMatrix::new();
        matrix.set(usize::MAX, usize::MAX, 1);
        matrix.set(0, usize::MAX, 2);
        matrix.set(usize::MAX, 0, 3);

        assert_eq!(matrix.get(usize::MAX, usize::MAX), 1);
        assert_eq!(matrix.get(0, usize::MAX), 2);
        assert_eq!(matrix.get(usize::MAX, 0), 3);
        assert_eq!(matrix.get(0, 0), 0);
        assert_eq!(row_numbers(&matrix), vec![0, usize::MAX]);
        let columns: Vec<usize> = matrix.row(usize::MAX).map(|(c, _)| c).collect();
        assert_eq!(columns, vec![0, usize::MAX]);
        matrix.check_invariants().unwrap();

        assert!(matrix.delete(usize::MAX, usize::MAX));
        matrix.set(0, usize::MAX, 0);
        assert_eq!(matrix.get(usize::MAX, usize::MAX), 0);
        assert_eq!(matrix.get(0, usize::MAX), 0);
        assert_eq!(matrix.get(usize::MAX, 0), 3);
        assert_eq!(row_numbers(&matrix), vec![usize::MAX]);
        assert_eq!(matrix.len(), 1);
        matrix.check_invariants().unwrap();

        assert!(!matrix.delete(usize::MAX, usize::MAX));
        assert_eq!(matrix.take(usize::MAX, 0), Some(3));
        assert!(matrix.is_empty());
        matrix.check_invariants().unwrap();
    }

    #[test]
    fn test_matrix_bool_cells() {
        let mut matrix = SparseMatrix::new();
        matrix.set(3, 1, true);
        matrix.set(3, 4, false);
        matrix.set(0, 2, true);

        assert!(matrix.get(3, 1));
        assert!(!matrix.get(3, 4));
        assert!(!matrix.contains(3, 4));
        assert_eq!(matrix.len(), 2);

        matrix.set(3, 1, false);
        assert_eq!(row_numbers(&matrix), vec![0]);
        matrix.check_invariants().unwrap();
    }

    #[test]
    fn test_matrix_check_invariants_detects_empty_row() {
        let mut matrix: SparseMatrix<i32> = SparseMatrix::new();
        let head = matrix.entries.alloc(EntryNode::sentinel());
        let id = matrix.rows.alloc(RowNode::new(4, head, None));
        matrix.rows[ROW_SENTINEL].next = Some(id);
        matrix.stats.add_row();

        let err = matrix.check_invariants().unwrap_err();
        assert!(matches!(err, Error::InvariantViolation { .. }));
    }

    #[test]
    fn test_matrix_density_500() {
        const N: usize = 500;
        let mut rng = StdRng::seed_from_u64(7);
        let mut expected = vec![0i32; N * N];
        let mut matrix = SparseMatrix::new();

        for i in 0..N {
            for j in 0..N {
                let value = rng.gen_range(0..2);
                expected[i * N + j] = value;
                matrix.set(i, j, value);
            }
        }

        // Overwrite a band so some cells end at zero after being non-zero
        for i in 0..N {
            matrix.set(i, i, 0);
            expected[i * N + i] = 0;
        }

        for i in 0..N {
            for j in 0..N {
                assert_eq!(matrix.get(i, j), expected[i * N + j], "cell ({}, {})", i, j);
            }
        }
        let stored = expected.iter().filter(|&&v| v != 0).count();
        assert_eq!(matrix.len(), stored);
        assert_eq!(matrix.iter().count(), stored);
        matrix.check_invariants().unwrap();
    }
}
