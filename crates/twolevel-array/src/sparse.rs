//! Shrinking sparse array.
//!
//! [`SparseArray`] stores values of a [`Vacant`] type. A chunk is
//! materialized by the first write of an occupied value into its range and
//! released the moment its last occupied slot is cleared, so an absent
//! chunk and an all-vacant chunk are never both observable for the same
//! range.

use std::ops::Index;

use log::debug;
use twolevel_core::{ArrayError, ChunkLayout, Slot, Vacant, DEFAULT_CHUNK_SIZE, DEFAULT_MAX_SIZE};

use crate::chunk::CountedChunk;
use crate::stats::ChunkStats;
use crate::table::ChunkTable;

/// Sparse array that frees chunks once they are entirely vacant.
///
/// `MAX_SIZE` bounds the key domain and `CHUNK_SIZE` sets the number of
/// slots allocated at once. Writing one occupied value into an untouched
/// range allocates a whole chunk; `CHUNK_SIZE` is the knob trading fewer,
/// larger allocations against memory held for isolated keys.
///
/// Reads of keys in absent chunks return [`T::default()`](Default::default)
/// and allocate nothing.
///
/// # Panics
///
/// Every keyed operation without a `try_` prefix panics if the key's chunk
/// lies beyond the outer table.
pub struct SparseArray<
    T,
    const MAX_SIZE: usize = DEFAULT_MAX_SIZE,
    const CHUNK_SIZE: usize = DEFAULT_CHUNK_SIZE,
> {
    chunks: ChunkTable<CountedChunk<T>>,
    /// Returned by reference for keys whose chunk is absent.
    vacant: T,
}

impl<T: Vacant, const MAX_SIZE: usize, const CHUNK_SIZE: usize>
    SparseArray<T, MAX_SIZE, CHUNK_SIZE>
{
    /// Key-space geometry of this array type.
    pub const LAYOUT: ChunkLayout = ChunkLayout::new(MAX_SIZE, CHUNK_SIZE);

    /// Create an array with every chunk absent.
    pub fn new() -> Self {
        let layout = Self::LAYOUT;
        debug!(
            "sparse array: {} chunks of {} slots",
            layout.num_chunks(),
            layout.chunk_size
        );
        Self {
            chunks: ChunkTable::new(layout.num_chunks()),
            vacant: T::default(),
        }
    }

    /// The value stored at `key`, or the default if none was set.
    #[track_caller]
    pub fn get(&self, key: usize) -> T
    where
        T: Clone,
    {
        self.get_ref(key).clone()
    }

    /// Reference to the value stored at `key`.
    ///
    /// For keys in an absent chunk this is a reference to a shared default
    /// value owned by the array.
    #[track_caller]
    pub fn get_ref(&self, key: usize) -> &T {
        self.read(Self::LAYOUT.locate(key))
    }

    /// Like [`get`](Self::get), but reports out-of-capacity keys as an error.
    pub fn try_get(&self, key: usize) -> Result<T, ArrayError>
    where
        T: Clone,
    {
        let slot = Self::LAYOUT.try_locate(key)?;
        Ok(self.read(slot).clone())
    }

    /// Store `value` at `key`.
    ///
    /// Writing a vacant value into an absent chunk does nothing and
    /// allocates nothing. Clearing the last occupied slot of a chunk
    /// releases it.
    #[track_caller]
    pub fn set(&mut self, key: usize, value: T) {
        self.replace(key, value);
    }

    /// Like [`set`](Self::set), but reports out-of-capacity keys as an error.
    ///
    /// On error the array is unchanged and `value` is dropped.
    pub fn try_set(&mut self, key: usize, value: T) -> Result<(), ArrayError> {
        let slot = Self::LAYOUT.try_locate(key)?;
        self.write(slot, value);
        Ok(())
    }

    /// Store `value` at `key`, returning the previous value.
    #[track_caller]
    pub fn replace(&mut self, key: usize, value: T) -> T {
        self.write(Self::LAYOUT.locate(key), value)
    }

    /// Clear `key`, returning the value it held.
    #[track_caller]
    pub fn take(&mut self, key: usize) -> T {
        self.replace(key, T::default())
    }

    /// Whether chunk `chunk_id` currently holds backing storage.
    pub fn is_chunk_live(&self, chunk_id: usize) -> bool {
        self.chunks.is_live(chunk_id)
    }

    /// Number of chunks currently holding backing storage.
    pub fn live_chunks(&self) -> usize {
        self.chunks.live_chunks()
    }

    /// Number of occupied keys. Walks the outer table.
    pub fn occupied(&self) -> usize {
        self.chunks.live().map(CountedChunk::count).sum()
    }

    /// Allocation counters.
    pub fn stats(&self) -> &ChunkStats {
        self.chunks.stats()
    }

    /// Heap bytes held by the outer table and all live chunks.
    pub fn memory_bytes(&self) -> usize {
        self.chunks.table_bytes()
            + self
                .chunks
                .live()
                .map(CountedChunk::memory_bytes)
                .sum::<usize>()
    }

    fn read(&self, slot: Slot) -> &T {
        match self.chunks.get(slot.chunk) {
            Some(chunk) => chunk.get(slot.index),
            None => &self.vacant,
        }
    }

    fn write(&mut self, slot: Slot, value: T) -> T {
        if value.is_vacant() && !self.chunks.is_live(slot.chunk) {
            // Clearing a key in an absent chunk; it already reads as vacant.
            return T::default();
        }

        let chunk = self
            .chunks
            .get_or_insert_with(slot.chunk, || CountedChunk::new(CHUNK_SIZE));
        let previous = chunk.replace(slot.index, value);
        if chunk.is_all_vacant() {
            self.chunks.release(slot.chunk);
        }
        previous
    }
}

impl<T: Vacant, const MAX_SIZE: usize, const CHUNK_SIZE: usize> Default
    for SparseArray<T, MAX_SIZE, CHUNK_SIZE>
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Vacant, const MAX_SIZE: usize, const CHUNK_SIZE: usize> Index<usize>
    for SparseArray<T, MAX_SIZE, CHUNK_SIZE>
{
    type Output = T;

    #[track_caller]
    fn index(&self, key: usize) -> &T {
        self.get_ref(key)
    }
}
