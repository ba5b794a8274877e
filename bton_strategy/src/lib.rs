//! `proptest` strategies for generating arbitrary BTON trees.

use bton::{pairs::PairMap, prelude::*};
use bytes::Bytes;
use num_bigint::BigInt;
use proptest::prelude::*;

/// Arbitrary integers spanning the full encodable range, both signs.
pub fn arb_inum() -> impl Strategy<Value = Inum> {
    (any::<bool>(), any::<u64>()).prop_map(|(neg, mag)| {
        if neg {
            Inum::from(-BigInt::from(mag))
        } else {
            Inum::from(mag)
        }
    })
}

/// Arbitrary bytestrings for use with proptest.
pub fn arb_bytes() -> impl Strategy<Value = Bytes> {
    proptest::collection::vec(any::<u8>(), 0..64).prop_map(Bytes::from)
}

/// Arbitrary BTON for use with proptest.
pub fn arb_bton() -> impl Strategy<Value = Bton> {
    let leaf = prop_oneof![
        Just(Bton::Null),
        any::<bool>().prop_map(Bton::from),
        arb_inum().prop_map(Bton::from),
        any::<f64>().prop_map(Bton::from),
        any::<f32>().prop_map(Bton::from),
        arb_bytes().prop_map(Bton::from),
    ];
    leaf.prop_recursive(
        8,  // max depth
        64, // max nodes
        8,  // max items per collection
        |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..8).prop_map(Bton::from),
                prop::collection::vec((inner.clone(), inner), 0..8)
                    .prop_map(|pairs| Bton::from(PairMap::from(pairs))),
            ]
        },
    )
}
