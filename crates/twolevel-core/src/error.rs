//! Error types for chunked array access.

use std::error::Error;
use std::fmt;

/// Errors that can occur when addressing a chunked array.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// The key maps to a chunk beyond the end of the outer table.
    CapacityExceeded {
        /// The offending key.
        key: usize,
        /// Chunk index derived from the key.
        chunk_id: usize,
        /// Number of chunks in the outer table.
        num_chunks: usize,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded {
                key,
                chunk_id,
                num_chunks,
            } => {
                write!(
                    f,
                    "key {key} out of capacity: chunk_id < num_chunks: {chunk_id} < {num_chunks}"
                )
            }
        }
    }
}

impl Error for ArrayError {}
