//! Fixed-size blocks of value slots.
//!
//! A [`Chunk`] is a boxed slice of `chunk_size` default-initialized values.
//! It is allocated once at full size and never grows, shrinks, or moves its
//! slots. [`CountedChunk`] adds the occupancy count the shrinking array uses
//! to decide when a chunk can be released.

use twolevel_core::Vacant;

/// A fixed-size block of value slots.
pub struct Chunk<T> {
    /// Backing storage. Allocated to full size at creation.
    values: Box<[T]>,
}

impl<T: Default> Chunk<T> {
    /// Allocate a chunk of `len` default values.
    pub fn new(len: usize) -> Self {
        Self {
            values: std::iter::repeat_with(T::default).take(len).collect(),
        }
    }
}

impl<T> Chunk<T> {
    /// Shared reference to the slot at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below the chunk length.
    #[inline]
    pub fn get(&self, index: usize) -> &T {
        &self.values[index]
    }

    /// Mutable reference to the slot at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below the chunk length.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        &mut self.values[index]
    }

    /// Memory usage of the backing storage in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.values.len() * std::mem::size_of::<T>()
    }
}

/// A [`Chunk`] that tracks how many of its slots are occupied.
///
/// Invariant: `count` equals the number of slots whose value is not
/// [vacant](Vacant::is_vacant). All writes go through
/// [`replace`](Self::replace) so the count cannot drift.
pub struct CountedChunk<T> {
    chunk: Chunk<T>,
    count: usize,
}

impl<T: Vacant> CountedChunk<T> {
    /// Allocate a chunk of `len` vacant values.
    pub fn new(len: usize) -> Self {
        Self {
            chunk: Chunk::new(len),
            count: 0,
        }
    }

    /// Store `value` at `index`, returning the previous value.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below the chunk length.
    pub fn replace(&mut self, index: usize, value: T) -> T {
        let slot = self.chunk.get_mut(index);
        if !slot.is_vacant() {
            self.count -= 1;
        }
        if !value.is_vacant() {
            self.count += 1;
        }
        std::mem::replace(slot, value)
    }

    /// Shared reference to the slot at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> &T {
        self.chunk.get(index)
    }

    /// Number of occupied slots.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Whether every slot is vacant, i.e. the chunk can be released.
    pub fn is_all_vacant(&self) -> bool {
        self.count == 0
    }

    /// Memory usage of the backing storage in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.chunk.memory_bytes()
    }
}
