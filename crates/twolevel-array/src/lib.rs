//! Chunked sparse arrays with lazy chunk allocation.
//!
//! Both containers give array-like O(1) access over a key space far larger
//! than what is ever populated. Memory is neither allocated up front nor
//! reallocated as the array fills: the key space is split into fixed-size
//! chunks that are created on demand.
//!
//! # Architecture
//!
//! ```text
//! SparseArray / NeverShrinkArray
//! ├── ChunkLayout (key → chunk, index; capacity check)
//! └── ChunkTable (num_chunks handles, all None at creation)
//!     ├── Option<CountedChunk>  (SparseArray: released when count hits 0)
//!     └── Option<Chunk>         (NeverShrinkArray: kept until drop)
//!         └── Box<[T]> × chunk_size
//! ```
//!
//! # Variants
//!
//! - **[`SparseArray`]:** get/set over a [`Vacant`] value type. A chunk is
//!   freed the moment every slot in it is vacant again.
//! - **[`NeverShrinkArray`]:** mutable indexing. Chunks persist for the
//!   container's lifetime, so slot addresses stay stable.
//!
//! Out-of-capacity keys panic; `try_*` methods report them as
//! [`ArrayError`] instead.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod chunk;
pub mod nevershrink;
pub mod sparse;
pub mod stats;
pub mod table;

// Public re-exports for the primary API surface.
pub use nevershrink::NeverShrinkArray;
pub use sparse::SparseArray;
pub use stats::ChunkStats;
pub use twolevel_core::{ArrayError, ChunkLayout, Slot, Vacant};
