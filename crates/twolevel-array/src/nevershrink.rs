//! Never-shrinking chunked array.
//!
//! [`NeverShrinkArray`] hands out `&mut T` to its slots. The caller may
//! write through that reference at any time, so the array cannot know when
//! a chunk becomes all-default. Chunks are therefore kept until the array
//! itself is dropped.

use std::ops::{Index, IndexMut};

use log::debug;
use twolevel_core::{ArrayError, ChunkLayout, Slot, DEFAULT_CHUNK_SIZE, DEFAULT_MAX_SIZE};

use crate::chunk::Chunk;
use crate::stats::ChunkStats;
use crate::table::ChunkTable;

/// Chunked array whose chunks, once allocated, live as long as the array.
///
/// Mutable access ([`slot_mut`](Self::slot_mut) or `IndexMut`) materializes
/// the key's chunk with default values on first use. Shared reads never
/// allocate. Because chunks are never freed or moved, a slot keeps the
/// same address for the array's whole lifetime.
///
/// # Panics
///
/// Every keyed operation without a `try_` prefix panics if the key's chunk
/// lies beyond the outer table.
pub struct NeverShrinkArray<
    T,
    const MAX_SIZE: usize = DEFAULT_MAX_SIZE,
    const CHUNK_SIZE: usize = DEFAULT_CHUNK_SIZE,
> {
    chunks: ChunkTable<Chunk<T>>,
    /// Returned by shared indexing for keys whose chunk is absent.
    vacant: T,
}

impl<T: Default, const MAX_SIZE: usize, const CHUNK_SIZE: usize>
    NeverShrinkArray<T, MAX_SIZE, CHUNK_SIZE>
{
    /// Key-space geometry of this array type.
    pub const LAYOUT: ChunkLayout = ChunkLayout::new(MAX_SIZE, CHUNK_SIZE);

    /// Create an array with every chunk absent.
    pub fn new() -> Self {
        let layout = Self::LAYOUT;
        debug!(
            "never-shrink array: {} chunks of {} slots",
            layout.num_chunks(),
            layout.chunk_size
        );
        Self {
            chunks: ChunkTable::new(layout.num_chunks()),
            vacant: T::default(),
        }
    }

    /// Mutable reference to the slot for `key`, allocating its chunk if
    /// needed.
    #[track_caller]
    pub fn slot_mut(&mut self, key: usize) -> &mut T {
        self.materialize(Self::LAYOUT.locate(key))
    }

    /// Like [`slot_mut`](Self::slot_mut), but reports out-of-capacity keys
    /// as an error.
    pub fn try_slot_mut(&mut self, key: usize) -> Result<&mut T, ArrayError> {
        let slot = Self::LAYOUT.try_locate(key)?;
        Ok(self.materialize(slot))
    }

    /// The slot for `key`, or `None` if its chunk was never allocated.
    ///
    /// Unlike `Index`, which reads an unallocated key as `T::default()` the
    /// way [`SparseArray::get_ref`](crate::SparseArray::get_ref) does, this
    /// tells an absent chunk apart from a slot that holds the default.
    #[track_caller]
    pub fn get(&self, key: usize) -> Option<&T> {
        let slot = Self::LAYOUT.locate(key);
        self.chunks
            .get(slot.chunk)
            .map(|chunk| chunk.get(slot.index))
    }

    /// Whether chunk `chunk_id` holds backing storage.
    pub fn is_chunk_live(&self, chunk_id: usize) -> bool {
        self.chunks.is_live(chunk_id)
    }

    /// Number of chunks holding backing storage.
    pub fn live_chunks(&self) -> usize {
        self.chunks.live_chunks()
    }

    /// Allocation counters. `chunks_released` is always zero.
    pub fn stats(&self) -> &ChunkStats {
        self.chunks.stats()
    }

    /// Heap bytes held by the outer table and all live chunks.
    pub fn memory_bytes(&self) -> usize {
        self.chunks.table_bytes() + self.chunks.live().map(Chunk::memory_bytes).sum::<usize>()
    }

    fn materialize(&mut self, slot: Slot) -> &mut T {
        self.chunks
            .get_or_insert_with(slot.chunk, || Chunk::new(CHUNK_SIZE))
            .get_mut(slot.index)
    }
}

impl<T: Default, const MAX_SIZE: usize, const CHUNK_SIZE: usize> Default
    for NeverShrinkArray<T, MAX_SIZE, CHUNK_SIZE>
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Default, const MAX_SIZE: usize, const CHUNK_SIZE: usize> Index<usize>
    for NeverShrinkArray<T, MAX_SIZE, CHUNK_SIZE>
{
    type Output = T;

    #[track_caller]
    fn index(&self, key: usize) -> &T {
        self.get(key).unwrap_or(&self.vacant)
    }
}

impl<T: Default, const MAX_SIZE: usize, const CHUNK_SIZE: usize> IndexMut<usize>
    for NeverShrinkArray<T, MAX_SIZE, CHUNK_SIZE>
{
    #[track_caller]
    fn index_mut(&mut self, key: usize) -> &mut T {
        self.slot_mut(key)
    }
}
