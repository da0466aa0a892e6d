//! Core types and traits for two-level chunked sparse arrays.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the abstractions shared by both container variants in
//! `twolevel-array`: the [`Vacant`] value contract, the [`ChunkLayout`]
//! key derivation, and the [`ArrayError`] capacity error.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod layout;
pub mod vacant;

pub use error::ArrayError;
pub use layout::{ChunkLayout, Slot, DEFAULT_CHUNK_SIZE, DEFAULT_MAX_SIZE};
pub use vacant::Vacant;
