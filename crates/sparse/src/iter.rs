//! Ordered traversal of the row index and entry lists.

use crate::arena::Arena;
use crate::node::{EntryId, EntryNode, RowId, RowNode};
use core::iter::FusedIterator;

/// Iterator over every stored cell as `(row, column, &value)`, rows ascending,
/// then columns ascending.
pub struct Iter<'a, T> {
    rows: &'a Arena<RowNode>,
    entries: &'a Arena<EntryNode<T>>,
    /// Row whose entries are being walked.
    current_row: Option<RowId>,
    /// Next entry to yield within the current row.
    current_entry: Option<EntryId>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    /// Creates an iterator starting at the first row after `sentinel`.
    pub(crate) fn new(
        rows: &'a Arena<RowNode>,
        entries: &'a Arena<EntryNode<T>>,
        sentinel: RowId,
        len: usize,
    ) -> Self {
        let current_row = rows[sentinel].next;
        let current_entry = current_row.and_then(|id| entries[rows[id].head].next);
        Self {
            rows,
            entries,
            current_row,
            current_entry,
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (usize, usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let row_id = self.current_row?;

            if let Some(entry_id) = self.current_entry {
                let entry = &self.entries[entry_id];
                self.current_entry = entry.next;
                if let Some(value) = entry.value.as_ref() {
                    self.remaining = self.remaining.saturating_sub(1);
                    return Some((self.rows[row_id].key, entry.key, value));
                }
                continue;
            }

            // Row exhausted, move to the next header
            self.current_row = self.rows[row_id].next;
            self.current_entry = self
                .current_row
                .and_then(|id| self.entries[self.rows[id].head].next);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Iterator over the row numbers present in the row index, ascending.
pub struct Rows<'a> {
    rows: &'a Arena<RowNode>,
    current: Option<RowId>,
}

impl<'a> Rows<'a> {
    pub(crate) fn new(rows: &'a Arena<RowNode>, sentinel: RowId) -> Self {
        Self {
            rows,
            current: rows[sentinel].next,
        }
    }
}

impl Iterator for Rows<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let id = self.current?;
        let node = &self.rows[id];
        self.current = node.next;
        Some(node.key)
    }
}

impl FusedIterator for Rows<'_> {}

/// Iterator over one row's cells as `(column, &value)`, columns ascending.
pub struct RowEntries<'a, T> {
    entries: &'a Arena<EntryNode<T>>,
    current: Option<EntryId>,
}

impl<'a, T> RowEntries<'a, T> {
    /// Creates an iterator over the entries after `head`, or an empty one.
    pub(crate) fn new(entries: &'a Arena<EntryNode<T>>, head: Option<EntryId>) -> Self {
        Self {
            entries,
            current: head.and_then(|id| entries[id].next),
        }
    }
}

impl<'a, T> Iterator for RowEntries<'a, T> {
    type Item = (usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let id = self.current?;
            let entry = &self.entries[id];
            self.current = entry.next;
            if let Some(value) = entry.value.as_ref() {
                return Some((entry.key, value));
            }
        }
    }
}

impl<T> FusedIterator for RowEntries<'_, T> {}
