//! Twolevel: sparse fixed-capacity arrays with lazily allocated chunks.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the twolevel sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use twolevel::prelude::*;
//!
//! // 16 keys, 4 slots per chunk.
//! let mut arr: SparseArray<u32, 16, 4> = SparseArray::new();
//!
//! arr.set(5, 1); // allocates chunk 1 (keys 4..8)
//! assert_eq!(arr.get(5), 1);
//! assert_eq!(arr.get(4), 0);
//! assert!(arr.is_chunk_live(1));
//!
//! arr.set(5, 0); // last occupied slot cleared: chunk 1 is released
//! assert!(!arr.is_chunk_live(1));
//!
//! arr.set(4, 0); // clearing an absent chunk allocates nothing
//! assert_eq!(arr.stats().chunks_allocated, 1);
//!
//! // Mutable indexing; chunks are kept for the array's lifetime.
//! let mut slots: NeverShrinkArray<u64, 1024, 64> = NeverShrinkArray::new();
//! slots[700] += 3;
//! slots[700] = 0;
//! assert!(slots.is_chunk_live(700 / 64));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `twolevel-core` | `Vacant`, `ChunkLayout`, `ArrayError` |
//! | [`array`] | `twolevel-array` | `SparseArray`, `NeverShrinkArray`, chunk table, stats |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and traits (`twolevel-core`).
///
/// The [`types::Vacant`] value contract, [`types::ChunkLayout`] key
/// derivation, and the [`types::ArrayError`] capacity error.
pub use twolevel_core as types;

/// Chunked containers (`twolevel-array`).
///
/// [`array::SparseArray`] releases chunks once they are entirely vacant;
/// [`array::NeverShrinkArray`] keeps them so slot references stay valid.
pub use twolevel_array as array;

/// Common imports for typical twolevel usage.
///
/// ```rust
/// use twolevel::prelude::*;
/// ```
pub mod prelude {
    pub use twolevel_array::{ChunkStats, NeverShrinkArray, SparseArray};
    pub use twolevel_core::{ArrayError, ChunkLayout, Vacant};
}
