//! The outer table of chunk handles.
//!
//! [`ChunkTable`] is the first level of a two-level array: a fixed-length
//! boxed slice of `Option<C>` handles, all `None` at creation. A `Some`
//! handle exclusively owns one chunk. The table never resizes, so the
//! chunk type's own heap storage never moves.

use log::trace;

use crate::stats::ChunkStats;

/// Fixed-length table of lazily materialized chunks.
pub struct ChunkTable<C> {
    /// One handle per chunk of the key space.
    slots: Box<[Option<C>]>,
    stats: ChunkStats,
}

impl<C> ChunkTable<C> {
    /// Create a table of `num_chunks` absent handles.
    pub fn new(num_chunks: usize) -> Self {
        Self {
            slots: std::iter::repeat_with(|| None).take(num_chunks).collect(),
            stats: ChunkStats::default(),
        }
    }

    /// The chunk at `chunk_id`, if materialized.
    #[inline]
    pub fn get(&self, chunk_id: usize) -> Option<&C> {
        self.slots.get(chunk_id).and_then(Option::as_ref)
    }

    /// The chunk at `chunk_id`, materializing it with `make` if absent.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_id >= num_chunks()`.
    pub fn get_or_insert_with(&mut self, chunk_id: usize, make: impl FnOnce() -> C) -> &mut C {
        let slot = &mut self.slots[chunk_id];
        let was_absent = slot.is_none();
        // `make` runs before anything is recorded; a panic there leaves the stats intact.
        let chunk = slot.get_or_insert_with(make);
        if was_absent {
            self.stats.record_alloc();
            trace!(
                "chunk {chunk_id} allocated ({} live)",
                self.stats.live_chunks
            );
        }
        chunk
    }

    /// Drop the handle at `chunk_id`, returning the chunk if it was live.
    pub fn release(&mut self, chunk_id: usize) -> Option<C> {
        let chunk = self.slots.get_mut(chunk_id)?.take()?;
        self.stats.record_release();
        trace!(
            "chunk {chunk_id} released ({} live)",
            self.stats.live_chunks
        );
        Some(chunk)
    }

    /// Whether the chunk at `chunk_id` holds backing storage.
    pub fn is_live(&self, chunk_id: usize) -> bool {
        self.get(chunk_id).is_some()
    }

    /// Number of handles in the table.
    pub fn num_chunks(&self) -> usize {
        self.slots.len()
    }

    /// Number of materialized chunks.
    pub fn live_chunks(&self) -> usize {
        self.stats.live_chunks
    }

    /// Allocation counters.
    pub fn stats(&self) -> &ChunkStats {
        &self.stats
    }

    /// Iterate over the materialized chunks.
    pub fn live(&self) -> impl Iterator<Item = &C> {
        self.slots.iter().filter_map(Option::as_ref)
    }

    /// Memory usage of the handle table itself in bytes.
    pub fn table_bytes(&self) -> usize {
        self.slots.len() * std::mem::size_of::<Option<C>>()
    }
}
