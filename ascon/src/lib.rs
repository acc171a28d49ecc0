#![no_std]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(clippy::pedantic)] // Be pedantic by default

//! ## Usage
//!
//! ```
//! use ascon::State;
//!
//! // Ascon-128 initialization with an all-zero key and nonce
//! let mut state: State = State::new(0x80400c0600000000, 0, 0, 0, 0);
//! state.permute_12();
//! assert_eq!(state[0], 0xb8df_f46b_0db4_21f8);
//! ```

mod backend;

pub use backend::{Permutation, Software};

use core::marker::PhantomData;
use core::ops::{Index, IndexMut};

#[cfg(feature = "zeroize")]
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Number of 64-bit words in the state
pub const WORDS: usize = 5;

/// Size of the state in bytes
pub const STATE_BYTES: usize = WORDS * 8;

/// Number of rounds of the full permutation
pub const MAX_ROUNDS: usize = 12;

/// The 320-bit Ascon state
///
/// The state is a plain value: every mode of operation creates its own and
/// discards it once the tag or digest has been extracted. Bytes map onto the
/// words in big-endian order, so byte `i` of the state is byte `i % 8` of
/// word `i / 8` counting from the most significant end.
#[derive(Clone, Debug, Default)]
pub struct State<B: Permutation = Software> {
    x: [u64; WORDS],
    backend: PhantomData<B>,
}

impl<B: Permutation> State<B> {
    /// Create a state from its five words
    #[must_use]
    pub const fn new(x0: u64, x1: u64, x2: u64, x3: u64, x4: u64) -> Self {
        Self {
            x: [x0, x1, x2, x3, x4],
            backend: PhantomData,
        }
    }

    /// Ascon-p[12]
    #[inline]
    pub fn permute_12(&mut self) {
        B::permute(&mut self.x, 12);
    }

    /// Ascon-p[8]
    #[inline]
    pub fn permute_8(&mut self) {
        B::permute(&mut self.x, 8);
    }

    /// Ascon-p[6]
    #[inline]
    pub fn permute_6(&mut self) {
        B::permute(&mut self.x, 6);
    }

    /// Apply the last `rounds` rounds of Ascon-p[12]
    ///
    /// # Panics
    /// If `rounds` exceeds 12.
    #[inline]
    pub fn permute_n(&mut self, rounds: usize) {
        assert!(rounds <= MAX_ROUNDS, "Ascon has at most 12 rounds");
        B::permute(&mut self.x, rounds);
    }

    /// Serialize the state as 40 big-endian bytes
    #[must_use]
    pub fn as_bytes(&self) -> [u8; STATE_BYTES] {
        let mut out = [0u8; STATE_BYTES];
        self.extract_bytes(&mut out);
        out
    }

    /// XOR `bytes` into the leading bytes of the state
    ///
    /// # Panics
    /// If `bytes` is longer than the state.
    pub fn xor_bytes(&mut self, bytes: &[u8]) {
        assert!(bytes.len() <= STATE_BYTES);
        for (x, chunk) in self.x.iter_mut().zip(bytes.chunks(8)) {
            *x ^= load_be(chunk);
        }
    }

    /// Replace the leading bytes of the state with `bytes`
    ///
    /// # Panics
    /// If `bytes` is longer than the state.
    pub fn overwrite_bytes(&mut self, bytes: &[u8]) {
        assert!(bytes.len() <= STATE_BYTES);
        for (x, chunk) in self.x.iter_mut().zip(bytes.chunks(8)) {
            let keep = if chunk.len() == 8 {
                0
            } else {
                u64::MAX >> (8 * chunk.len())
            };
            *x = (*x & keep) | load_be(chunk);
        }
    }

    /// Copy the leading `out.len()` bytes of the state into `out`
    ///
    /// # Panics
    /// If `out` is longer than the state.
    pub fn extract_bytes(&self, out: &mut [u8]) {
        assert!(out.len() <= STATE_BYTES);
        for (x, chunk) in self.x.iter().zip(out.chunks_mut(8)) {
            let len = chunk.len();
            chunk.copy_from_slice(&x.to_be_bytes()[..len]);
        }
    }

    /// XOR the `0x80` delimiter into the byte at `offset`
    ///
    /// # Panics
    /// If `offset` is outside the state.
    #[inline]
    pub fn pad(&mut self, offset: usize) {
        self.x[offset / 8] ^= 0x80 << (56 - 8 * (offset % 8));
    }
}

/// Pack up to eight bytes into a word, most significant byte first
#[inline]
fn load_be(bytes: &[u8]) -> u64 {
    let mut buf = [0u8; 8];
    buf[..bytes.len()].copy_from_slice(bytes);
    u64::from_be_bytes(buf)
}

impl<B: Permutation> From<[u64; WORDS]> for State<B> {
    fn from(x: [u64; WORDS]) -> Self {
        Self {
            x,
            backend: PhantomData,
        }
    }
}

impl<B: Permutation> From<&[u8; STATE_BYTES]> for State<B> {
    fn from(bytes: &[u8; STATE_BYTES]) -> Self {
        let mut state = Self::default();
        state.xor_bytes(bytes);
        state
    }
}

impl<B: Permutation> Index<usize> for State<B> {
    type Output = u64;

    #[inline]
    fn index(&self, i: usize) -> &u64 {
        &self.x[i]
    }
}

impl<B: Permutation> IndexMut<usize> for State<B> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut u64 {
        &mut self.x[i]
    }
}

#[cfg(feature = "zeroize")]
impl<B: Permutation> Zeroize for State<B> {
    fn zeroize(&mut self) {
        self.x.zeroize();
    }
}

#[cfg(feature = "zeroize")]
impl<B: Permutation> Drop for State<B> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

#[cfg(feature = "zeroize")]
impl<B: Permutation> ZeroizeOnDrop for State<B> {}
