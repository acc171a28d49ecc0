//! Implementations of the round function
//!
//! The modes built on top of [`State`](crate::State) only ever call
//! [`Permutation::permute`], so an accelerated implementation can replace the
//! portable one without touching them.

use core::fmt::Debug;

use crate::{MAX_ROUNDS, WORDS};

/// Round constants of Ascon-p[12]. A permutation with `r` rounds uses the
/// last `r` of them.
pub(crate) const ROUND_CONSTANTS: [u64; MAX_ROUNDS] = [
    0xf0, 0xe1, 0xd2, 0xc3, 0xb4, 0xa5, 0x96, 0x87, 0x78, 0x69, 0x5a, 0x4b,
];

/// A backend computing the Ascon permutation
pub trait Permutation: Clone + Copy + Debug + Default {
    /// Apply the last `rounds` rounds of Ascon-p[12] to the five words in place.
    ///
    /// Callers guarantee `rounds <= 12`.
    fn permute(x: &mut [u64; WORDS], rounds: usize);
}

/// Portable implementation of the permutation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Software;

impl Permutation for Software {
    #[inline]
    fn permute(x: &mut [u64; WORDS], rounds: usize) {
        for &c in &ROUND_CONSTANTS[MAX_ROUNDS - rounds..] {
            round(x, c);
        }
    }
}

/// One round: constant addition, 5-bit S-box layer, linear diffusion layer
#[inline(always)]
fn round(x: &mut [u64; WORDS], c: u64) {
    let [mut x0, mut x1, mut x2, mut x3, mut x4] = *x;

    x2 ^= c;

    // bitsliced S-box
    let t0 = x1 ^ x2;
    let mut t1 = x0 ^ x4;
    let t2 = x3 ^ x4;
    x4 = !x4 | x3;
    let r2 = x4 ^ t0;
    x3 = (x3 ^ x1) | t0;
    let r1 = x3 ^ t1;
    x2 = (x2 ^ t1) | x1;
    let r0 = x2 ^ t2;
    t1 = !t1;
    x1 &= t1;
    let r4 = x1 ^ t2;
    x0 |= t2;
    let r3 = x0 ^ t0;

    *x = [
        r0 ^ r0.rotate_right(19) ^ r0.rotate_right(28),
        r1 ^ r1.rotate_right(61) ^ r1.rotate_right(39),
        r2 ^ r2.rotate_right(1) ^ r2.rotate_right(6),
        r3 ^ r3.rotate_right(10) ^ r3.rotate_right(17),
        r4 ^ r4.rotate_right(7) ^ r4.rotate_right(41),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Straightforward transcription of the S-box as printed in the Ascon
    /// submission, used to cross-check the optimized form above.
    fn reference_round(x: &mut [u64; WORDS], c: u64) {
        x[2] ^= c;

        x[0] ^= x[4];
        x[4] ^= x[3];
        x[2] ^= x[1];
        let t: [u64; WORDS] = core::array::from_fn(|i| !x[i] & x[(i + 1) % WORDS]);
        for i in 0..WORDS {
            x[i] ^= t[(i + 1) % WORDS];
        }
        x[1] ^= x[0];
        x[0] ^= x[4];
        x[3] ^= x[2];
        x[2] = !x[2];

        x[0] ^= x[0].rotate_right(19) ^ x[0].rotate_right(28);
        x[1] ^= x[1].rotate_right(61) ^ x[1].rotate_right(39);
        x[2] ^= x[2].rotate_right(1) ^ x[2].rotate_right(6);
        x[3] ^= x[3].rotate_right(10) ^ x[3].rotate_right(17);
        x[4] ^= x[4].rotate_right(7) ^ x[4].rotate_right(41);
    }

    #[test]
    fn round_constants_schedule() {
        for (i, &c) in ROUND_CONSTANTS.iter().enumerate() {
            let i = i as u64;
            assert_eq!(c, ((0xf - i) << 4) | i);
        }
    }

    #[test]
    fn zero_rounds_is_identity() {
        let mut x = [1, 2, 3, 4, 5];
        Software::permute(&mut x, 0);
        assert_eq!(x, [1, 2, 3, 4, 5]);
    }

    proptest::proptest! {
        #[test]
        fn round_matches_reference(x in proptest::prelude::any::<[u64; WORDS]>(), c in 0u64..256) {
            let mut fast = x;
            let mut slow = x;
            round(&mut fast, c);
            reference_round(&mut slow, c);
            proptest::prop_assert_eq!(fast, slow);
        }
    }
}
