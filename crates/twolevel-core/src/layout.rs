//! Key-space partitioning for two-level arrays.
//!
//! A [`ChunkLayout`] splits a key space of `max_size` keys into chunks of
//! `chunk_size` slots. The outer table holds `max_size / chunk_size + 1`
//! chunk handles, which covers the remainder without a ceiling division.

use crate::error::ArrayError;

/// Default number of slots per chunk.
///
/// Large enough to amortize one allocation over many writes while keeping
/// the outer table small at the default key-space size.
pub const DEFAULT_CHUNK_SIZE: usize = 1 << 16;

/// Default upper bound on the key domain.
pub const DEFAULT_MAX_SIZE: usize = i32::MAX as usize;

/// Position of a key inside a two-level array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Slot {
    /// Index into the outer chunk table.
    pub chunk: usize,
    /// Index within the chunk.
    pub index: usize,
}

/// Geometry of a two-level array.
///
/// Fixed at compile time by the containers' const generic parameters;
/// immutable after creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChunkLayout {
    /// Upper bound on the key domain.
    pub max_size: usize,
    /// Number of value slots per chunk. Never zero.
    pub chunk_size: usize,
}

impl ChunkLayout {
    /// Layout using [`DEFAULT_MAX_SIZE`] and [`DEFAULT_CHUNK_SIZE`].
    pub const DEFAULT: Self = Self::new(DEFAULT_MAX_SIZE, DEFAULT_CHUNK_SIZE);

    /// Create a layout.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero. In a const context this is a
    /// compile-time error.
    pub const fn new(max_size: usize, chunk_size: usize) -> Self {
        assert!(chunk_size > 0, "chunk_size must be non-zero");
        Self {
            max_size,
            chunk_size,
        }
    }

    /// Number of handles in the outer table.
    #[inline]
    pub const fn num_chunks(&self) -> usize {
        self.max_size / self.chunk_size + 1
    }

    /// Number of keys accepted by the capacity check.
    ///
    /// This is at least `max_size`, and exceeds it by the slack in the last
    /// chunk because the check is chunk-granular.
    pub const fn addressable(&self) -> usize {
        self.num_chunks().saturating_mul(self.chunk_size)
    }

    /// Map `key` to its chunk and in-chunk index.
    ///
    /// Returns [`ArrayError::CapacityExceeded`] if the derived chunk index is
    /// not below [`num_chunks`](Self::num_chunks).
    #[inline]
    pub const fn try_locate(&self, key: usize) -> Result<Slot, ArrayError> {
        let chunk = key / self.chunk_size;
        let num_chunks = self.num_chunks();
        if chunk >= num_chunks {
            return Err(ArrayError::CapacityExceeded {
                key,
                chunk_id: chunk,
                num_chunks,
            });
        }
        Ok(Slot {
            chunk,
            index: key % self.chunk_size,
        })
    }

    /// Map `key` to its chunk and in-chunk index.
    ///
    /// # Panics
    ///
    /// Panics if `key` lies beyond the configured capacity. Out-of-capacity
    /// access is a caller bug, not a runtime condition.
    #[inline]
    #[track_caller]
    pub fn locate(&self, key: usize) -> Slot {
        match self.try_locate(key) {
            Ok(slot) => slot,
            Err(err) => panic!("{err}"),
        }
    }

    /// Heap bytes occupied by the values of one chunk of `T`.
    pub const fn chunk_bytes<T>(&self) -> usize {
        self.chunk_size * std::mem::size_of::<T>()
    }
}

impl Default for ChunkLayout {
    fn default() -> Self {
        Self::DEFAULT
    }
}
