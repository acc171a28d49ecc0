//! Absorb and squeeze halves of the hashing sponge

use ascon::{Permutation, State};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// Bytes absorbed or squeezed per permutation call
pub(crate) const RATE: usize = 8;

/// Absorbing half of the sponge
///
/// Input is buffered until a full block is available; full blocks are never
/// the last one, since the final block always carries the padding byte.
#[derive(Clone, Debug)]
pub(crate) struct Absorber<B: Permutation> {
    state: State<B>,
    buffer: [u8; RATE],
    pos: usize,
}

impl<B: Permutation> Absorber<B> {
    pub(crate) fn new(iv: u64) -> Self {
        let mut state = State::new(iv, 0, 0, 0, 0);
        state.permute_12();
        Self {
            state,
            buffer: [0; RATE],
            pos: 0,
        }
    }

    pub(crate) fn absorb(&mut self, mut data: &[u8], rounds_b: usize) {
        if self.pos > 0 {
            let n = (RATE - self.pos).min(data.len());
            self.buffer[self.pos..self.pos + n].copy_from_slice(&data[..n]);
            self.pos += n;
            data = &data[n..];

            if self.pos < RATE {
                return;
            }
            self.state.xor_bytes(&self.buffer);
            self.state.permute_n(rounds_b);
            self.pos = 0;
        }

        let mut blocks = data.chunks_exact(RATE);
        for block in &mut blocks {
            self.state.xor_bytes(block);
            self.state.permute_n(rounds_b);
        }

        let rest = blocks.remainder();
        self.buffer[..rest.len()].copy_from_slice(rest);
        self.pos = rest.len();
    }

    /// Pad the buffered tail and switch to squeezing. `self` is left intact.
    pub(crate) fn squeezer(&self) -> Squeezer<B> {
        let mut state = self.state.clone();
        state.xor_bytes(&self.buffer[..self.pos]);
        state.pad(self.pos);
        state.permute_12();
        Squeezer::new(state)
    }
}

#[cfg(feature = "zeroize")]
impl<B: Permutation> Drop for Absorber<B> {
    fn drop(&mut self) {
        self.buffer.zeroize();
        self.pos.zeroize();
    }
}

/// Squeezing half of the sponge
///
/// Output blocks are the first state word in big-endian order; the
/// permutation only runs when another block is actually requested.
#[derive(Clone, Debug)]
pub(crate) struct Squeezer<B: Permutation> {
    state: State<B>,
    block: [u8; RATE],
    pos: usize,
}

impl<B: Permutation> Squeezer<B> {
    fn new(state: State<B>) -> Self {
        let block = state[0].to_be_bytes();
        Self {
            state,
            block,
            pos: 0,
        }
    }

    pub(crate) fn squeeze(&mut self, mut out: &mut [u8], rounds_b: usize) {
        while !out.is_empty() {
            if self.pos == RATE {
                self.state.permute_n(rounds_b);
                self.block = self.state[0].to_be_bytes();
                self.pos = 0;
            }

            let n = (RATE - self.pos).min(out.len());
            out[..n].copy_from_slice(&self.block[self.pos..self.pos + n]);
            self.pos += n;
            out = &mut out[n..];
        }
    }
}

#[cfg(feature = "zeroize")]
impl<B: Permutation> Drop for Squeezer<B> {
    fn drop(&mut self) {
        self.block.zeroize();
        self.pos.zeroize();
    }
}
