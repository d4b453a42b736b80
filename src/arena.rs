//! Chunked slab allocator that stores the nodes of a tree.

use std::mem;
use std::ops::{Index, IndexMut};
use std::vec::Vec;

/// A copyable reference to a value stored in an `Arena<T>`.
///
/// Handles never own the value they point to, so they can be freely stored in parent and child
/// links without creating ownership cycles.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Handle {
    chunk: usize,
    slot: usize,
}

enum Slot<T> {
    Occupied(T),
    Vacant(Option<Handle>),
}

/// A slab allocator for a single type of value.
///
/// Values are stored in fixed-size chunks that are never reallocated once created, so growing the
/// arena never moves existing values. Freed slots are threaded onto a free list and reused by
/// later allocations. The arena uses no unsafe code.
///
/// # Examples
///
/// ```
/// use red_black_set::arena::Arena;
///
/// let mut arena = Arena::new(1024);
///
/// let x = arena.allocate(1);
/// assert_eq!(arena[x], 1);
///
/// arena[x] += 1;
/// assert_eq!(arena[x], 2);
///
/// assert_eq!(arena.free(x), 2);
/// assert!(arena.is_empty());
/// ```
pub struct Arena<T> {
    free_head: Option<Handle>,
    chunks: Vec<Vec<Slot<T>>>,
    chunk_size: usize,
    len: usize,
}

impl<T> Arena<T> {
    /// Constructs a new, empty `Arena<T>` that allocates `chunk_size` slots at a time.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_set::arena::Arena;
    ///
    /// let arena: Arena<u32> = Arena::new(64);
    /// assert_eq!(arena.chunk_size(), 64);
    /// ```
    pub fn new(chunk_size: usize) -> Self {
        assert!(chunk_size > 0, "Error: arena chunk size must be positive.");
        Arena {
            free_head: None,
            chunks: Vec::new(),
            chunk_size,
            len: 0,
        }
    }

    fn slot(&self, handle: Handle) -> Option<&Slot<T>> {
        self.chunks
            .get(handle.chunk)
            .and_then(|chunk| chunk.get(handle.slot))
    }

    fn slot_mut(&mut self, handle: Handle) -> Option<&mut Slot<T>> {
        self.chunks
            .get_mut(handle.chunk)
            .and_then(|chunk| chunk.get_mut(handle.slot))
    }

    /// Stores a value in the arena and returns its handle. Slots released by `free` are reused
    /// before a new slot is taken.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_set::arena::Arena;
    ///
    /// let mut arena = Arena::new(16);
    /// let x = arena.allocate("a");
    /// assert_eq!(arena.get(x), Some(&"a"));
    /// ```
    pub fn allocate(&mut self, value: T) -> Handle {
        self.len += 1;

        if let Some(handle) = self.free_head.take() {
            let slot = self
                .slot_mut(handle)
                .expect("Error: free list points outside the arena.");
            match mem::replace(slot, Slot::Occupied(value)) {
                Slot::Vacant(next) => self.free_head = next,
                Slot::Occupied(_) => panic!("Error: free list points at an occupied slot."),
            }
            return handle;
        }

        let needs_chunk = match self.chunks.last() {
            Some(chunk) => chunk.len() == self.chunk_size,
            None => true,
        };
        if needs_chunk {
            self.chunks.push(Vec::with_capacity(self.chunk_size));
        }

        let chunk = self.chunks.len() - 1;
        let last_chunk = &mut self.chunks[chunk];
        last_chunk.push(Slot::Occupied(value));
        Handle {
            chunk,
            slot: last_chunk.len() - 1,
        }
    }

    /// Releases the slot behind `handle` and returns the value it held.
    ///
    /// # Panics
    ///
    /// Panics if `handle` points outside the arena or at a slot that is already free.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_set::arena::Arena;
    ///
    /// let mut arena = Arena::new(16);
    /// let x = arena.allocate(0);
    /// assert_eq!(arena.free(x), 0);
    /// assert_eq!(arena.get(x), None);
    /// ```
    pub fn free(&mut self, handle: Handle) -> T {
        let next = self.free_head;
        let slot = self
            .slot_mut(handle)
            .expect("Error: attempting to free a handle outside the arena.");
        match mem::replace(slot, Slot::Vacant(next)) {
            Slot::Occupied(value) => {
                self.free_head = Some(handle);
                self.len -= 1;
                value
            },
            Slot::Vacant(next) => {
                *slot = Slot::Vacant(next);
                panic!("Error: attempting to free a vacant slot.");
            },
        }
    }

    /// Returns an immutable reference to the value behind `handle`, or `None` if the handle does
    /// not refer to a live value.
    pub fn get(&self, handle: Handle) -> Option<&T> {
        match self.slot(handle) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns a mutable reference to the value behind `handle`, or `None` if the handle does not
    /// refer to a live value.
    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        match self.slot_mut(handle) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns the number of live values in the arena.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the arena holds no live values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots in the chunks allocated so far.
    pub fn capacity(&self) -> usize {
        self.chunks.len() * self.chunk_size
    }

    /// Returns the number of slots allocated per chunk.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Drops every value and releases all chunks. Handles issued before the call are
    /// invalidated.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_set::arena::Arena;
    ///
    /// let mut arena = Arena::new(16);
    /// arena.allocate(1);
    /// arena.allocate(2);
    /// arena.clear();
    /// assert!(arena.is_empty());
    /// assert_eq!(arena.capacity(), 0);
    /// ```
    pub fn clear(&mut self) {
        self.chunks.clear();
        self.free_head = None;
        self.len = 0;
    }
}

impl<T> Index<Handle> for Arena<T> {
    type Output = T;

    fn index(&self, handle: Handle) -> &Self::Output {
        self.get(handle).expect("Error: handle does not refer to a live value.")
    }
}

impl<T> IndexMut<Handle> for Arena<T> {
    fn index_mut(&mut self, handle: Handle) -> &mut Self::Output {
        self.get_mut(handle)
            .expect("Error: handle does not refer to a live value.")
    }
}

#[cfg(test)]
mod tests {
    use super::{Arena, Handle};

    #[test]
    #[should_panic]
    fn test_zero_chunk_size() {
        let _: Arena<u32> = Arena::new(0);
    }

    #[test]
    #[should_panic]
    fn test_free_outside_arena() {
        let mut arena: Arena<u32> = Arena::new(4);
        arena.free(Handle { chunk: 0, slot: 0 });
    }

    #[test]
    #[should_panic]
    fn test_free_twice() {
        let mut arena = Arena::new(4);
        let x = arena.allocate(0);
        arena.free(x);
        arena.free(x);
    }

    #[test]
    fn test_allocate() {
        let mut arena = Arena::new(4);
        assert_eq!(arena.allocate(0), Handle { chunk: 0, slot: 0 });
        assert_eq!(arena.allocate(0), Handle { chunk: 0, slot: 1 });
        assert_eq!(arena.allocate(0), Handle { chunk: 0, slot: 2 });
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn test_allocate_multiple_chunks() {
        let mut arena = Arena::new(2);
        assert_eq!(arena.allocate(0), Handle { chunk: 0, slot: 0 });
        assert_eq!(arena.allocate(0), Handle { chunk: 0, slot: 1 });
        assert_eq!(arena.allocate(0), Handle { chunk: 1, slot: 0 });
        assert_eq!(arena.capacity(), 4);
    }

    #[test]
    fn test_free_reuses_slots() {
        let mut arena = Arena::new(4);
        let x = arena.allocate(0);
        let y = arena.allocate(1);
        assert_eq!(arena.free(x), 0);
        assert_eq!(arena.free(y), 1);
        assert!(arena.is_empty());

        // most recently freed slot first
        assert_eq!(arena.allocate(2), y);
        assert_eq!(arena.allocate(3), x);
        assert_eq!(arena.allocate(4), Handle { chunk: 0, slot: 2 });
        assert_eq!(arena[x], 3);
        assert_eq!(arena[y], 2);
    }

    #[test]
    fn test_get_vacant_slot() {
        let mut arena = Arena::new(4);
        arena.allocate(0);
        assert_eq!(arena.get(Handle { chunk: 0, slot: 1 }), None);
        assert_eq!(arena.get(Handle { chunk: 3, slot: 0 }), None);
    }

    #[test]
    fn test_get_mut() {
        let mut arena = Arena::new(4);
        let x = arena.allocate(0);
        *arena.get_mut(x).unwrap() = 1;
        assert_eq!(arena.get(x), Some(&1));
    }

    #[test]
    fn test_clear() {
        let mut arena = Arena::new(2);
        let x = arena.allocate(0);
        arena.allocate(1);
        arena.allocate(2);
        arena.clear();
        assert_eq!(arena.len(), 0);
        assert_eq!(arena.get(x), None);
        assert_eq!(arena.allocate(5), Handle { chunk: 0, slot: 0 });
    }
}
