//! Row index and entry list node definitions.

/// Row node identifier in the row arena.
pub type RowId = usize;

/// Entry node identifier in the entry arena.
pub type EntryId = usize;

/// Key carried by sentinel nodes. Never compared against real keys.
pub const SENTINEL_KEY: usize = usize::MAX;

/// The row index sentinel always occupies the first row slot.
pub(crate) const ROW_SENTINEL: RowId = 0;

/// Entry list head of the row index sentinel, which owns no entries.
pub(crate) const NULL_ENTRY: EntryId = usize::MAX;

/// A header in the row index.
#[derive(Clone, Debug)]
pub(crate) struct RowNode {
    /// Row number.
    pub key: usize,
    /// Next row header, in ascending row order.
    pub next: Option<RowId>,
    /// Sentinel head of this row's entry list.
    pub head: EntryId,
}

impl RowNode {
    /// Creates the row index sentinel.
    pub fn sentinel() -> Self {
        Self {
            key: SENTINEL_KEY,
            next: None,
            head: NULL_ENTRY,
        }
    }

    /// Creates a row header linked in front of `next`.
    pub fn new(key: usize, head: EntryId, next: Option<RowId>) -> Self {
        Self { key, next, head }
    }
}

/// A stored cell, or the sentinel head of an entry list.
#[derive(Clone, Debug)]
pub(crate) struct EntryNode<T> {
    /// Column number.
    pub key: usize,
    /// Cell value. None for sentinels and released slots.
    pub value: Option<T>,
    /// Next entry, in ascending column order.
    pub next: Option<EntryId>,
}

impl<T> EntryNode<T> {
    /// Creates an entry list sentinel.
    pub fn sentinel() -> Self {
        Self {
            key: SENTINEL_KEY,
            value: None,
            next: None,
        }
    }

    /// Creates an entry linked in front of `next`.
    pub fn new(key: usize, value: T, next: Option<EntryId>) -> Self {
        Self {
            key,
            value: Some(value),
            next,
        }
    }
}
