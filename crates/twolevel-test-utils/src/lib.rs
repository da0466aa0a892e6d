//! Test utilities and reference models for twolevel development.
//!
//! - [`ModelArray`]: map-backed reference model to check containers against.
//! - [`Token`]: a handle-like value type with a custom [`Vacant`] impl.
//! - [`keys`]: deterministic sparse key patterns.
//! - [`init_logging`]: route `log` output through the test harness.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod keys;

use indexmap::IndexMap;
use twolevel_core::Vacant;

/// Install `env_logger` for tests. Safe to call from every test.
///
/// Honors `RUST_LOG`; e.g. `RUST_LOG=twolevel_array=trace` shows every
/// chunk allocation and release.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A non-zero handle; `Token(0)` is the vacant state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Token(pub u32);

impl Vacant for Token {
    fn is_vacant(&self) -> bool {
        self.0 == 0
    }
}

/// Reference model of a sparse array.
///
/// Backed by an `IndexMap<usize, T>` holding only occupied keys, so
/// absent-means-vacant is true by construction.
pub struct ModelArray<T> {
    entries: IndexMap<usize, T>,
}

impl<T: Vacant + Clone> ModelArray<T> {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    pub fn set(&mut self, key: usize, value: T) {
        if value.is_vacant() {
            self.entries.swap_remove(&key);
        } else {
            self.entries.insert(key, value);
        }
    }

    pub fn get(&self, key: usize) -> T {
        self.entries.get(&key).cloned().unwrap_or_default()
    }

    /// Number of occupied keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sorted chunk indices that hold at least one occupied key.
    pub fn occupied_chunks(&self, chunk_size: usize) -> Vec<usize> {
        let mut chunks: Vec<usize> = self.entries.keys().map(|k| k / chunk_size).collect();
        chunks.sort_unstable();
        chunks.dedup();
        chunks
    }
}

impl<T: Vacant + Clone> Default for ModelArray<T> {
    fn default() -> Self {
        Self::new()
    }
}
