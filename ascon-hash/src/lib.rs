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
//! Fixed-length hashing with [`AsconHash`] (or [`AsconHasha`]):
//!
//! ```
//! use ascon_hash::{AsconHash, Digest};
//! use hex_literal::hex;
//!
//! let mut hasher = AsconHash::new();
//! hasher.update(b"some bytes");
//! let digest = hasher.finalize();
//!
//! let empty = AsconHash::digest(b"");
//! assert_eq!(
//!     empty[..],
//!     hex!("7346bc14f036e87ae03d0997913088f5f68411434b3cf8b54fa796a80d251f91")
//! );
//! # let _ = digest;
//! ```
//!
//! Arbitrary-length output with [`AsconXof`] (or [`AsconXofa`]):
//!
//! ```
//! use ascon_hash::{AsconXof, ExtendableOutput, Update, XofReader};
//!
//! let mut xof = AsconXof::default();
//! xof.update(b"some bytes");
//! let mut reader = xof.finalize_xof();
//!
//! let mut first = [0u8; 10];
//! reader.read(&mut first);
//! let mut next = [0u8; 100];
//! reader.read(&mut next);
//! ```

mod sponge;

pub use ascon::{Permutation, Software};
pub use digest::{self, Digest, ExtendableOutput, Update, XofReader};

use core::fmt::{self, Debug};
use core::marker::PhantomData;
use digest::{
    ExtendableOutputReset, FixedOutput, FixedOutputReset, HashMarker, Output, OutputSizeUser,
    Reset, consts::U32,
};
use sponge::{Absorber, Squeezer};

/// Round count between blocks, distinguishing Ascon-Hash from Ascon-Hasha
pub trait Parameters: Clone + Copy + Debug + Default {
    /// Name of the fixed-length hash using these parameters
    const HASH_NAME: &'static str;

    /// Name of the XOF using these parameters
    const XOF_NAME: &'static str;

    /// Rounds of the permutation between data blocks
    const ROUNDS_B: usize;

    /// Initial state word for a digest of `output_bits` bits, zero for a XOF
    #[must_use]
    fn iv(output_bits: u64) -> u64 {
        let rounds_a = ascon::MAX_ROUNDS as u64;
        (64 << 48) | (rounds_a << 40) | ((rounds_a - Self::ROUNDS_B as u64) << 32) | output_bits
    }
}

/// Parameters of Ascon-Hash and Ascon-Xof: 12 rounds between blocks
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AsconParams;

impl Parameters for AsconParams {
    const HASH_NAME: &'static str = "AsconHash";
    const XOF_NAME: &'static str = "AsconXof";
    const ROUNDS_B: usize = 12;
}

/// Parameters of Ascon-Hasha and Ascon-Xofa: 8 rounds between blocks
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AsconAParams;

impl Parameters for AsconAParams {
    const HASH_NAME: &'static str = "AsconHasha";
    const XOF_NAME: &'static str = "AsconXofa";
    const ROUNDS_B: usize = 8;
}

/// Ascon-Hash: 256-bit digest
pub type AsconHash = Hasher<AsconParams>;

/// Ascon-Hasha: 256-bit digest with fewer rounds between blocks
pub type AsconHasha = Hasher<AsconAParams>;

/// Ascon-Xof: arbitrary-length output
pub type AsconXof = Xof<AsconParams>;

/// Ascon-Xofa: arbitrary-length output with fewer rounds between blocks
pub type AsconXofa = Xof<AsconAParams>;

/// Fixed-output hasher with a 256-bit digest
#[derive(Clone)]
pub struct Hasher<P: Parameters, B: Permutation = Software> {
    absorber: Absorber<B>,
    params: PhantomData<P>,
}

impl<P: Parameters, B: Permutation> Default for Hasher<P, B> {
    fn default() -> Self {
        Self {
            absorber: Absorber::new(P::iv(256)),
            params: PhantomData,
        }
    }
}

impl<P: Parameters, B: Permutation> Debug for Hasher<P, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(P::HASH_NAME)?;
        f.write_str(" { ... }")
    }
}

impl<P: Parameters, B: Permutation> HashMarker for Hasher<P, B> {}

impl<P: Parameters, B: Permutation> OutputSizeUser for Hasher<P, B> {
    type OutputSize = U32;
}

impl<P: Parameters, B: Permutation> Update for Hasher<P, B> {
    fn update(&mut self, data: &[u8]) {
        self.absorber.absorb(data, P::ROUNDS_B);
    }
}

impl<P: Parameters, B: Permutation> FixedOutput for Hasher<P, B> {
    fn finalize_into(self, out: &mut Output<Self>) {
        self.absorber.squeezer().squeeze(out, P::ROUNDS_B);
    }
}

impl<P: Parameters, B: Permutation> FixedOutputReset for Hasher<P, B> {
    fn finalize_into_reset(&mut self, out: &mut Output<Self>) {
        self.absorber.squeezer().squeeze(out, P::ROUNDS_B);
        Reset::reset(self);
    }
}

impl<P: Parameters, B: Permutation> Reset for Hasher<P, B> {
    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Extendable-output function
#[derive(Clone)]
pub struct Xof<P: Parameters, B: Permutation = Software> {
    absorber: Absorber<B>,
    params: PhantomData<P>,
}

impl<P: Parameters, B: Permutation> Default for Xof<P, B> {
    fn default() -> Self {
        Self {
            absorber: Absorber::new(P::iv(0)),
            params: PhantomData,
        }
    }
}

impl<P: Parameters, B: Permutation> Debug for Xof<P, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(P::XOF_NAME)?;
        f.write_str(" { ... }")
    }
}

impl<P: Parameters, B: Permutation> HashMarker for Xof<P, B> {}

impl<P: Parameters, B: Permutation> Update for Xof<P, B> {
    fn update(&mut self, data: &[u8]) {
        self.absorber.absorb(data, P::ROUNDS_B);
    }
}

impl<P: Parameters, B: Permutation> ExtendableOutput for Xof<P, B> {
    type Reader = AsconXofReader<P, B>;

    fn finalize_xof(self) -> Self::Reader {
        AsconXofReader {
            squeezer: self.absorber.squeezer(),
            params: PhantomData,
        }
    }
}

impl<P: Parameters, B: Permutation> ExtendableOutputReset for Xof<P, B> {
    fn finalize_xof_reset(&mut self) -> Self::Reader {
        let reader = AsconXofReader {
            squeezer: self.absorber.squeezer(),
            params: PhantomData,
        };
        Reset::reset(self);
        reader
    }
}

impl<P: Parameters, B: Permutation> Reset for Xof<P, B> {
    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Output stream of an [`Xof`]
///
/// Consecutive reads continue where the previous one stopped, so reading
/// 10 then 20 bytes yields the same 30 bytes as a single read.
#[derive(Clone)]
pub struct AsconXofReader<P: Parameters, B: Permutation = Software> {
    squeezer: Squeezer<B>,
    params: PhantomData<P>,
}

impl<P: Parameters, B: Permutation> Debug for AsconXofReader<P, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(P::XOF_NAME)?;
        f.write_str("Reader { ... }")
    }
}

impl<P: Parameters, B: Permutation> XofReader for AsconXofReader<P, B> {
    fn read(&mut self, buffer: &mut [u8]) {
        self.squeezer.squeeze(buffer, P::ROUNDS_B);
    }
}
