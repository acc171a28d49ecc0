//! Property-based tests for the `ascon-hash` crate.

use ascon_hash::{AsconHash, AsconHasha, AsconXof, AsconXofa, Digest, ExtendableOutput, XofReader};
use proptest::{collection, prelude::*};

macro_rules! digest_proptests {
    ($name:ident, $hasher:ident) => {
        mod $name {
            use super::*;

            proptest! {
                #[test]
                fn split_updates(
                    msg in collection::vec(any::<u8>(), 0..256),
                    split in any::<prop::sample::Index>(),
                ) {
                    let (head, tail) = msg.split_at(split.index(msg.len() + 1));
                    let mut hasher = $hasher::new();
                    hasher.update(head);
                    hasher.update(tail);
                    prop_assert_eq!(hasher.finalize(), $hasher::digest(&msg));
                }

                #[test]
                fn digest_is_32_bytes(msg in collection::vec(any::<u8>(), 0..64)) {
                    prop_assert_eq!($hasher::digest(&msg).len(), 32);
                }
            }
        }
    };
}

macro_rules! xof_proptests {
    ($name:ident, $xof:ident) => {
        mod $name {
            use super::*;

            proptest! {
                #[test]
                fn split_reads(
                    msg in collection::vec(any::<u8>(), 0..64),
                    first in 0usize..40,
                    second in 0usize..40,
                ) {
                    let mut whole = vec![0u8; first + second];
                    $xof::digest_xof(&msg, &mut whole);

                    let mut reader = {
                        let mut xof = $xof::default();
                        ascon_hash::Update::update(&mut xof, &msg);
                        xof.finalize_xof()
                    };
                    let mut parts = vec![0u8; first + second];
                    let (a, b) = parts.split_at_mut(first);
                    reader.read(a);
                    reader.read(b);
                    prop_assert_eq!(parts, whole);
                }

                #[test]
                fn shorter_output_is_prefix(
                    msg in collection::vec(any::<u8>(), 0..64),
                    len in 0usize..64,
                ) {
                    let mut long = [0u8; 64];
                    $xof::digest_xof(&msg, &mut long);
                    let mut short = vec![0u8; len];
                    $xof::digest_xof(&msg, &mut short);
                    prop_assert_eq!(&short[..], &long[..len]);
                }
            }
        }
    };
}

digest_proptests!(hash, AsconHash);
digest_proptests!(hasha, AsconHasha);
xof_proptests!(xof, AsconXof);
xof_proptests!(xofa, AsconXofa);

proptest! {
    #[test]
    fn variants_disagree(msg in collection::vec(any::<u8>(), 0..64)) {
        let digest = AsconHash::digest(&msg);
        prop_assert_ne!(digest, AsconHasha::digest(&msg));

        let mut xof = [0u8; 32];
        AsconXof::digest_xof(&msg, &mut xof);
        prop_assert_ne!(digest.as_slice(), &xof[..]);
    }
}
