//! Duplex construction shared by both parameter sets

use aead::{Error, inout::InOutBuf};
use ascon::{Permutation, State};
use core::marker::PhantomData;
use subtle::ConstantTimeEq;

use crate::params::Parameters;

/// Largest rate among the supported parameter sets
const MAX_RATE: usize = 16;

/// Rates the duplex handles: one or two whole state words
pub(crate) const fn rate_is_supported(rate: usize) -> bool {
    rate == 8 || rate == MAX_RATE
}

/// Key, nonce and tag size in bytes
pub(crate) const BLOCK_BYTES: usize = 16;

/// Pack sixteen bytes into two words, most significant byte first
pub(crate) fn words_from_bytes(bytes: &[u8]) -> [u64; 2] {
    let mut words = [0u64; 2];
    for (word, chunk) in words.iter_mut().zip(bytes.chunks(8)) {
        *word = chunk.iter().fold(0, |acc, &b| (acc << 8) | u64::from(b));
    }
    words
}

/// State of one encryption or decryption call
///
/// Lifecycle: [`Sponge::new`] initializes with key and nonce, associated data
/// is absorbed once, the message is processed once, then [`Sponge::finalize`]
/// consumes the state and yields the tag.
pub(crate) struct Sponge<'k, P: Parameters, B: Permutation> {
    state: State<B>,
    key: &'k [u64; 2],
    params: PhantomData<P>,
}

impl<'k, P: Parameters, B: Permutation> Sponge<'k, P, B> {
    pub(crate) fn new(key: &'k [u64; 2], nonce: &[u8]) -> Self {
        const { assert!(rate_is_supported(P::RATE), "unsupported rate") };

        let [n0, n1] = words_from_bytes(nonce);
        let mut state = State::new(P::IV, key[0], key[1], n0, n1);
        state.permute_n(P::ROUNDS_A);
        state[3] ^= key[0];
        state[4] ^= key[1];

        Self {
            state,
            key,
            params: PhantomData,
        }
    }

    fn permute_b(&mut self) {
        self.state.permute_n(P::ROUNDS_B);
    }

    /// Absorb the associated data, then flip the domain separation bit.
    pub(crate) fn absorb_associated_data(&mut self, associated_data: &[u8]) {
        if !associated_data.is_empty() {
            let mut blocks = associated_data.chunks_exact(P::RATE);
            for block in &mut blocks {
                self.state.xor_bytes(block);
                self.permute_b();
            }
            let rest = blocks.remainder();
            self.state.xor_bytes(rest);
            self.state.pad(rest.len());
            self.permute_b();
        }

        self.state[4] ^= 1;
    }

    /// Encrypt the buffer, leaving the ciphertext in the state's rate part.
    pub(crate) fn encrypt(&mut self, mut buffer: InOutBuf<'_, '_, u8>) {
        let mut block = [0u8; MAX_RATE];
        let len = buffer.len();
        let mut offset = 0;

        while len - offset >= P::RATE {
            let range = offset..offset + P::RATE;
            block[..P::RATE].copy_from_slice(&buffer.get_in()[range.clone()]);
            self.state.xor_bytes(&block[..P::RATE]);
            self.state.extract_bytes(&mut buffer.get_out()[range]);
            self.permute_b();
            offset += P::RATE;
        }

        let rest = len - offset;
        block[..rest].copy_from_slice(&buffer.get_in()[offset..]);
        self.state.xor_bytes(&block[..rest]);
        self.state.extract_bytes(&mut buffer.get_out()[offset..]);
        self.state.pad(rest);
    }

    /// Decrypt the buffer. The rate part of the state is replaced by the
    /// ciphertext so that both directions end in the same state.
    pub(crate) fn decrypt(&mut self, mut buffer: InOutBuf<'_, '_, u8>) {
        let mut block = [0u8; MAX_RATE];
        let len = buffer.len();
        let mut offset = 0;

        while len - offset >= P::RATE {
            let range = offset..offset + P::RATE;
            block[..P::RATE].copy_from_slice(&buffer.get_in()[range.clone()]);
            self.state.xor_bytes(&block[..P::RATE]);
            self.state.extract_bytes(&mut buffer.get_out()[range]);
            self.state.overwrite_bytes(&block[..P::RATE]);
            self.permute_b();
            offset += P::RATE;
        }

        let rest = len - offset;
        block[..rest].copy_from_slice(&buffer.get_in()[offset..]);
        self.state.xor_bytes(&block[..rest]);
        self.state.extract_bytes(&mut buffer.get_out()[offset..]);
        self.state.overwrite_bytes(&block[..rest]);
        self.state.pad(rest);
    }

    /// Compute the authentication tag.
    pub(crate) fn finalize(mut self) -> [u8; BLOCK_BYTES] {
        let k = P::RATE / 8;
        self.state[k] ^= self.key[0];
        self.state[k + 1] ^= self.key[1];
        self.state.permute_n(P::ROUNDS_A);
        self.state[3] ^= self.key[0];
        self.state[4] ^= self.key[1];

        let mut tag = [0u8; BLOCK_BYTES];
        tag[..8].copy_from_slice(&self.state[3].to_be_bytes());
        tag[8..].copy_from_slice(&self.state[4].to_be_bytes());
        tag
    }

    /// Encrypt `buffer` and return the tag.
    pub(crate) fn encrypt_detached(
        key: &'k [u64; 2],
        nonce: &[u8],
        associated_data: &[u8],
        buffer: InOutBuf<'_, '_, u8>,
    ) -> [u8; BLOCK_BYTES] {
        let mut sponge = Self::new(key, nonce);
        sponge.absorb_associated_data(associated_data);
        sponge.encrypt(buffer);
        sponge.finalize()
    }

    /// Decrypt `buffer` and check `expected_tag`.
    ///
    /// On mismatch the output is zeroed so that no unauthenticated plaintext
    /// is released.
    pub(crate) fn decrypt_detached(
        key: &'k [u64; 2],
        nonce: &[u8],
        associated_data: &[u8],
        mut buffer: InOutBuf<'_, '_, u8>,
        expected_tag: &[u8],
    ) -> Result<(), Error> {
        let mut sponge = Self::new(key, nonce);
        sponge.absorb_associated_data(associated_data);
        sponge.decrypt(buffer.reborrow());
        let tag = sponge.finalize();

        if bool::from(tag[..].ct_eq(expected_tag)) {
            Ok(())
        } else {
            buffer.get_out().fill(0);
            Err(Error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{Ascon128Params, Ascon128aParams};
    use ascon::Software;
    use hex_literal::hex;

    type Sponge128<'k> = Sponge<'k, Ascon128Params, Software>;
    type Sponge128a<'k> = Sponge<'k, Ascon128aParams, Software>;

    const KEY: [u8; 16] = hex!("000102030405060708090a0b0c0d0e0f");

    #[test]
    fn words_are_big_endian() {
        assert_eq!(
            words_from_bytes(&KEY),
            [0x0001_0203_0405_0607, 0x0809_0a0b_0c0d_0e0f]
        );
    }

    #[test]
    fn empty_message_tag() {
        let key = words_from_bytes(&KEY);
        let tag = Sponge128::encrypt_detached(&key, &KEY, b"", (&mut [0u8; 0][..]).into());
        assert_eq!(tag, hex!("e355159f292911f794cb1432a0103a8a"));

        let tag = Sponge128a::encrypt_detached(&key, &KEY, b"", (&mut [0u8; 0][..]).into());
        assert_eq!(tag, hex!("7a834e6f09210957067b10fd831f0078"));
    }

    #[test]
    fn associated_data_changes_tag() {
        let key = words_from_bytes(&KEY);
        let tag = Sponge128::encrypt_detached(&key, &KEY, &[0], (&mut [0u8; 0][..]).into());
        assert_eq!(tag, hex!("944df887cd4901614c5dedbc42fc0da0"));

        let tag = Sponge128a::encrypt_detached(&key, &KEY, &[0], (&mut [0u8; 0][..]).into());
        assert_eq!(tag, hex!("af3031b07b129ec84153373ddcaba528"));
    }

    #[test]
    fn single_byte_message() {
        let key = words_from_bytes(&KEY);
        let mut buffer = [0u8];
        let tag = Sponge128::encrypt_detached(&key, &KEY, b"", (&mut buffer[..]).into());
        assert_eq!(buffer, hex!("bc"));
        assert_eq!(tag, hex!("18c3f4e39eca7222490d967c79bffc92"));
    }

    #[test]
    fn decrypt_failure_zeroes_output() {
        let key = words_from_bytes(&KEY);
        let mut buffer = *b"attack at dawn";
        let mut tag = Sponge128::encrypt_detached(&key, &KEY, b"", (&mut buffer[..]).into());
        tag[15] ^= 1;

        let result =
            Sponge128::decrypt_detached(&key, &KEY, b"", (&mut buffer[..]).into(), &tag);
        assert!(result.is_err());
        assert_eq!(buffer, [0; 14]);
    }
}
