//! Property tests: both containers against a map-backed reference model.
//!
//! Random operation sequences are applied to a container and to
//! [`ModelArray`]; after every step each key must read the same, and the
//! set of live chunks must be exactly the set of chunks with an occupied
//! key (shrinking) or a superset of it (never-shrink).

use proptest::prelude::*;
use twolevel_array::{NeverShrinkArray, SparseArray};
use twolevel_test_utils::{ModelArray, Token};

const MAX: usize = 256;
const CHUNK: usize = 16;

#[derive(Clone, Debug)]
enum Op {
    Set(usize, u32),
    Clear(usize),
    Take(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..MAX, 1u32..1000).prop_map(|(k, v)| Op::Set(k, v)),
        (0..MAX).prop_map(Op::Clear),
        (0..MAX).prop_map(Op::Take),
    ]
}

proptest! {
    #[test]
    fn sparse_array_matches_model(ops in proptest::collection::vec(op_strategy(), 1..200)) {
        let mut arr: SparseArray<Token, MAX, CHUNK> = SparseArray::new();
        let mut model = ModelArray::new();

        for op in &ops {
            match *op {
                Op::Set(k, v) => {
                    arr.set(k, Token(v));
                    model.set(k, Token(v));
                }
                Op::Clear(k) => {
                    arr.set(k, Token::default());
                    model.set(k, Token::default());
                }
                Op::Take(k) => {
                    let expected = model.get(k);
                    prop_assert_eq!(arr.take(k), expected);
                    model.set(k, Token::default());
                }
            }
        }

        for k in 0..MAX {
            prop_assert_eq!(arr.get(k), model.get(k));
        }
        prop_assert_eq!(arr.occupied(), model.len());

        let live: Vec<usize> = (0..SparseArray::<Token, MAX, CHUNK>::LAYOUT.num_chunks())
            .filter(|&c| arr.is_chunk_live(c))
            .collect();
        prop_assert_eq!(live, model.occupied_chunks(CHUNK));
    }

    #[test]
    fn never_shrink_array_matches_model(ops in proptest::collection::vec(op_strategy(), 1..200)) {
        let mut arr: NeverShrinkArray<Token, MAX, CHUNK> = NeverShrinkArray::new();
        let mut model = ModelArray::new();
        let mut touched = std::collections::BTreeSet::new();

        for op in &ops {
            let (k, v) = match *op {
                Op::Set(k, v) => (k, Token(v)),
                Op::Clear(k) | Op::Take(k) => (k, Token::default()),
            };
            arr[k] = v;
            model.set(k, v);
            touched.insert(k / CHUNK);
        }

        for k in 0..MAX {
            prop_assert_eq!(arr[k], model.get(k));
        }
        for chunk in model.occupied_chunks(CHUNK) {
            prop_assert!(arr.is_chunk_live(chunk));
        }
        prop_assert_eq!(arr.live_chunks(), touched.len());
        prop_assert_eq!(arr.stats().chunks_released, 0);
    }

    #[test]
    fn vacant_only_traffic_never_allocates(keys in proptest::collection::vec(0..MAX, 0..100)) {
        let mut arr: SparseArray<Token, MAX, CHUNK> = SparseArray::new();
        for k in keys {
            arr.set(k, Token::default());
            prop_assert_eq!(arr.get(k), Token::default());
        }
        prop_assert_eq!(arr.stats().chunks_allocated, 0);
    }
}
