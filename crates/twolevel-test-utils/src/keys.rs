//! Deterministic sparse key patterns.
//!
//! All generators use a seeded ChaCha8 RNG, so the same seed yields the
//! same keys on every platform.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// `count` keys drawn uniformly from `0..max_key`.
pub fn uniform(seed: u64, count: usize, max_key: usize) -> Vec<usize> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count).map(|_| rng.random_range(0..max_key)).collect()
}

/// `clusters` runs of `per_cluster` consecutive keys, each run starting at
/// a uniform position in `0..max_key - per_cluster`.
///
/// Models the common case of a few hot regions in a huge key space.
pub fn clustered(seed: u64, clusters: usize, per_cluster: usize, max_key: usize) -> Vec<usize> {
    assert!(per_cluster < max_key, "cluster wider than key space");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut keys = Vec::with_capacity(clusters * per_cluster);
    for _ in 0..clusters {
        let start = rng.random_range(0..max_key - per_cluster);
        keys.extend(start..start + per_cluster);
    }
    keys
}
