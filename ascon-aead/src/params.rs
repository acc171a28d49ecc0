//! Parameter sets of the Ascon v1.2 AEAD family

use core::fmt::Debug;

mod sealed {
    pub trait Sealed {}
}

/// Rate and round counts distinguishing Ascon-128 from Ascon-128a
///
/// Sealed: the duplex only supports rates of one or two state words.
pub trait Parameters: sealed::Sealed + Clone + Copy + Debug + Default + PartialEq + Eq {
    /// Human-readable name of the parameter set
    const NAME: &'static str;

    /// Bytes absorbed per permutation call (8 or 16)
    const RATE: usize;

    /// Rounds of the initialization and finalization permutation
    const ROUNDS_A: usize = 12;

    /// Rounds of the permutation between data blocks
    const ROUNDS_B: usize;

    /// First word of the initial state: key size, rate and both round counts
    const IV: u64 = (128 << 56)
        | (((Self::RATE * 8) as u64) << 48)
        | ((Self::ROUNDS_A as u64) << 40)
        | ((Self::ROUNDS_B as u64) << 32);
}

/// Ascon-128: 64-bit rate, 6 intermediate rounds
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ascon128Params;

impl sealed::Sealed for Ascon128Params {}

impl Parameters for Ascon128Params {
    const NAME: &'static str = "Ascon-128";
    const RATE: usize = 8;
    const ROUNDS_B: usize = 6;
}

/// Ascon-128a: 128-bit rate, 8 intermediate rounds
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ascon128aParams;

impl sealed::Sealed for Ascon128aParams {}

impl Parameters for Ascon128aParams {
    const NAME: &'static str = "Ascon-128a";
    const RATE: usize = 16;
    const ROUNDS_B: usize = 8;
}
