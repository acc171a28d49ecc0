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
//! Simple usage (allocating, no associated data):
//!
//! ```
//! # #[cfg(feature = "alloc")] {
//! use ascon_aead::Ascon128; // Or `Ascon128a`
//! use ascon_aead::aead::{Aead, KeyInit};
//!
//! let key = b"very secret key.";
//! let cipher = Ascon128::new(key.into());
//! let nonce = b"unique nonce 012"; // 128-bits; unique per message
//!
//! let ciphertext = cipher.encrypt(nonce.into(), b"plaintext message".as_ref())
//!     .expect("encryption failure!"); // NOTE: handle this error to avoid panics!
//!
//! let plaintext = cipher.decrypt(nonce.into(), ciphertext.as_ref())
//!     .expect("decryption failure!"); // NOTE: handle this error to avoid panics!
//!
//! assert_eq!(&plaintext, b"plaintext message");
//! # }
//! ```
//!
//! ## In-place Usage (eliminates `alloc` requirement)
//!
//! The detached API encrypts a mutable slice and hands back the tag
//! separately, so no heap is needed:
//!
//! ```
//! use ascon_aead::Ascon128a;
//! use ascon_aead::aead::{AeadInOut, KeyInit};
//!
//! let cipher = Ascon128a::new(b"very secret key.".into());
//! let nonce = b"unique nonce 012".into();
//!
//! let mut buffer = *b"plaintext message";
//! let tag = cipher
//!     .encrypt_inout_detached(nonce, b"header", buffer.as_mut_slice().into())
//!     .expect("encryption failure!");
//! assert_ne!(&buffer, b"plaintext message");
//!
//! cipher
//!     .decrypt_inout_detached(nonce, b"header", buffer.as_mut_slice().into(), &tag)
//!     .expect("decryption failure!");
//! assert_eq!(&buffer, b"plaintext message");
//! ```

mod params;
mod sponge;

pub use aead::{self, AeadCore, AeadInOut, Error, Key, KeyInit, Nonce, Result, Tag};
pub use ascon::{Permutation, Software};
pub use params::{Ascon128Params, Ascon128aParams, Parameters};

use aead::{KeySizeUser, TagPosition, inout::InOutBuf};
use core::fmt;
use core::marker::PhantomData;
use hybrid_array::{Array, typenum::U16};
use sponge::{Sponge, words_from_bytes};

#[cfg(feature = "zeroize")]
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Ascon-128 authenticated encryption
pub type Ascon128 = Ascon<Ascon128Params>;

/// Ascon-128a authenticated encryption
pub type Ascon128a = Ascon<Ascon128aParams>;

/// Ascon v1.2 AEAD with a 128-bit key, nonce and tag
///
/// The cipher only stores the key. Every call builds a fresh permutation
/// state, so a single instance may be shared between threads.
#[derive(Clone)]
pub struct Ascon<P: Parameters, B: Permutation = Software> {
    key: [u64; 2],
    params: PhantomData<(P, B)>,
}

impl<P: Parameters, B: Permutation> fmt::Debug for Ascon<P, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(P::NAME).finish_non_exhaustive()
    }
}

impl<P: Parameters, B: Permutation> KeySizeUser for Ascon<P, B> {
    type KeySize = U16;
}

impl<P: Parameters, B: Permutation> KeyInit for Ascon<P, B> {
    fn new(key: &Key<Self>) -> Self {
        Self {
            key: words_from_bytes(key),
            params: PhantomData,
        }
    }
}

impl<P: Parameters, B: Permutation> AeadCore for Ascon<P, B> {
    type NonceSize = U16;
    type TagSize = U16;
    const TAG_POSITION: TagPosition = TagPosition::Postfix;
}

impl<P: Parameters, B: Permutation> AeadInOut for Ascon<P, B> {
    fn encrypt_inout_detached(
        &self,
        nonce: &Nonce<Self>,
        associated_data: &[u8],
        buffer: InOutBuf<'_, '_, u8>,
    ) -> Result<Tag<Self>> {
        let tag = Sponge::<P, B>::encrypt_detached(&self.key, nonce, associated_data, buffer);
        Ok(Array(tag))
    }

    fn decrypt_inout_detached(
        &self,
        nonce: &Nonce<Self>,
        associated_data: &[u8],
        buffer: InOutBuf<'_, '_, u8>,
        tag: &Tag<Self>,
    ) -> Result<()> {
        Sponge::<P, B>::decrypt_detached(&self.key, nonce, associated_data, buffer, tag)
    }
}

#[cfg(feature = "zeroize")]
impl<P: Parameters, B: Permutation> Drop for Ascon<P, B> {
    fn drop(&mut self) {
        self.key.zeroize();
    }
}

#[cfg(feature = "zeroize")]
impl<P: Parameters, B: Permutation> ZeroizeOnDrop for Ascon<P, B> {}
