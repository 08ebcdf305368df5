//! Slot arena backing the linked lists.

use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

/// Contiguous node storage with a free list for recycling released slots.
#[derive(Clone, Debug)]
pub(crate) struct Arena<N> {
    nodes: Vec<N>,
    free_list: Vec<usize>,
}

impl<N> Arena<N> {
    /// Creates an empty arena.
    #[cfg(test)]
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free_list: Vec::new(),
        }
    }

    /// Creates an empty arena with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            free_list: Vec::new(),
        }
    }

    /// Stores a node and returns its slot, reusing a released slot if any.
    pub fn alloc(&mut self, node: N) -> usize {
        if let Some(id) = self.free_list.pop() {
            self.nodes[id] = node;
            id
        } else {
            let id = self.nodes.len();
            self.nodes.push(node);
            id
        }
    }

    /// Returns a slot to the free list.
    ///
    /// The node stays in place until the slot is reused, so callers move out
    /// anything they need (or that must be dropped) first.
    pub fn release(&mut self, id: usize) {
        debug_assert!(id < self.nodes.len());
        self.free_list.push(id);
    }

    /// Returns the number of live nodes.
    pub fn len(&self) -> usize {
        self.nodes.len() - self.free_list.len()
    }

    /// Returns the number of slots ever allocated, live or free.
    pub fn slots(&self) -> usize {
        self.nodes.len()
    }

    /// Drops every node.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free_list.clear();
    }
}

impl<N> Index<usize> for Arena<N> {
    type Output = N;

    #[inline]
    fn index(&self, id: usize) -> &N {
        &self.nodes[id]
    }
}

impl<N> IndexMut<usize> for Arena<N> {
    #[inline]
    fn index_mut(&mut self, id: usize) -> &mut N {
        &mut self.nodes[id]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_and_index() {
        let mut arena = Arena::new();
        let a = arena.alloc(10);
        let b = arena.alloc(20);
        assert_eq!(arena[a], 10);
        assert_eq!(arena[b], 20);
        arena[a] = 11;
        assert_eq!(arena[a], 11);
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn test_release_reuses_slot() {
        let mut arena = Arena::with_capacity(4);
        let a = arena.alloc('a');
        let _b = arena.alloc('b');
        arena.release(a);
        assert_eq!(arena.len(), 1);
        assert_eq!(arena.slots(), 2);

        let c = arena.alloc('c');
        assert_eq!(c, a);
        assert_eq!(arena[c], 'c');
        assert_eq!(arena.slots(), 2);
    }

    #[test]
    fn test_release_many_reuses_in_lifo_order() {
        let mut arena = Arena::with_capacity(10_000);
        let ids: Vec<usize> = (0..10_000u32).map(|v| arena.alloc(v)).collect();
        for &id in &ids {
            arena.release(id);
        }
        assert_eq!(arena.len(), 0);
        assert_eq!(arena.slots(), 10_000);

        assert_eq!(arena.alloc(7), 9_999);
        assert_eq!(arena.alloc(8), 9_998);
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.slots(), 10_000);
    }

    #[test]
    fn test_clear() {
        let mut arena = Arena::new();
        arena.alloc(1u8);
        let id = arena.alloc(2u8);
        arena.release(id);
        arena.clear();
        assert_eq!(arena.len(), 0);
        assert_eq!(arena.slots(), 0);
        assert_eq!(arena.alloc(3u8), 0);
    }
}
