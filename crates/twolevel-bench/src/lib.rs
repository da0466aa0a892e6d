//! Benchmark profiles for twolevel chunked arrays.
//!
//! Provides pre-built key workloads shared by the criterion benches:
//!
//! - [`scattered_profile`]: isolated keys across the default `i32::MAX`
//!   key space, one chunk per key in the worst case
//! - [`hot_region_profile`]: a few dense clusters, many keys per chunk
//! - [`populate`]: fill a default-layout [`SparseArray`] from a profile

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use twolevel_array::SparseArray;
use twolevel_test_utils::keys;

/// Key space of the default layout.
pub const KEY_SPACE: usize = i32::MAX as usize;

/// `count` uniformly scattered keys over [`KEY_SPACE`].
pub fn scattered_profile(seed: u64, count: usize) -> Vec<usize> {
    keys::uniform(seed, count, KEY_SPACE)
}

/// 16 clusters of `count / 16` consecutive keys over [`KEY_SPACE`].
pub fn hot_region_profile(seed: u64, count: usize) -> Vec<usize> {
    keys::clustered(seed, 16, (count / 16).max(1), KEY_SPACE)
}

/// Build a default-layout array with every key in `keys` set to a
/// non-zero value.
pub fn populate(keys: &[usize]) -> SparseArray<u64> {
    let mut arr = SparseArray::new();
    for (i, &key) in keys.iter().enumerate() {
        arr.set(key, i as u64 + 1);
    }
    arr
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn populate_sets_every_key() {
        let keys = hot_region_profile(1, 64);
        let arr = populate(&keys);
        assert!(keys.iter().all(|&k| arr.get(k) != 0));
    }

    #[test]
    fn profiles_are_deterministic() {
        assert_eq!(scattered_profile(9, 10), scattered_profile(9, 10));
        assert_eq!(hot_region_profile(9, 64), hot_region_profile(9, 64));
    }
}
