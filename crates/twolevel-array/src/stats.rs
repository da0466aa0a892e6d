//! Chunk allocation counters.
//!
//! [`ChunkStats`] is the instrumentation hook for the allocation behavior
//! of a chunk table: how many chunks are live now, how many have ever been
//! materialized, and how many have been released.

/// Allocation counters for a chunk table.
///
/// Updated by [`ChunkTable`](crate::table::ChunkTable) on every chunk
/// materialization and release. Cumulative counters never decrease.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChunkStats {
    /// Chunks currently holding backing storage.
    pub live_chunks: usize,
    /// Highest value `live_chunks` has reached.
    pub peak_live_chunks: usize,
    /// Cumulative number of chunk allocations.
    pub chunks_allocated: u64,
    /// Cumulative number of chunk releases.
    pub chunks_released: u64,
}

impl ChunkStats {
    pub(crate) fn record_alloc(&mut self) {
        self.live_chunks += 1;
        self.peak_live_chunks = self.peak_live_chunks.max(self.live_chunks);
        self.chunks_allocated += 1;
    }

    pub(crate) fn record_release(&mut self) {
        self.live_chunks -= 1;
        self.chunks_released += 1;
    }
}
