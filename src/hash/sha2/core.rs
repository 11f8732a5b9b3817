//! SHA-2 core hashing functions
//!
//! This module implements the SHA-2 family as defined in FIPS 180-4 on top
//! of the shared streaming engine.
//!
//! It provides:
//! - the compression function, generic over 32-bit and 64-bit words
//! - one `Algorithm` type per output variant
//! - one-shot convenience functions for each variant
//!
//! Variants of the same state width share the compression function and
//! the round constants; they differ only in their initial state and in
//! how much of the final state is returned.

use zeroize::Zeroizing;

use crate::hash::algorithm::Algorithm;
use crate::hash::hash;
use crate::hash::sha2::computations::{Sha2Word, all_rounds};
use crate::hash::sha2::constants::{H224, H256, H384, H512, H512_224, H512_256};
use crate::primitives::ops::ByteOrder;
use crate::primitives::{Number, U224, U256, U384, U512, Word};

/// Compresses a single block into `state`.
///
/// # Parameters
/// - `state`: the current hash state (8 words)
/// - `block`: 16 words worth of message bytes
///
/// # Notes
/// - Input words are interpreted as big-endian, as required by SHA-2.
/// - The message schedule is expanded by `all_rounds`.
pub(crate) fn compress<W: Sha2Word>(state: &mut [W], block: &[u8]) {
    let mut w = Zeroizing::new(Number::<16, W>::ZERO);

    for (slot, chunk) in w.words_mut().iter_mut().zip(block.chunks_exact(W::BYTES)) {
        *slot = W::read_be(chunk);
    }

    all_rounds(state, &w);
}

macro_rules! sha2_variant {
    (
        $(#[$doc:meta])*
        $name:ident, $word:ty, $block:literal, $out:literal, $seed:expr, $label:literal
    ) => {
        $(#[$doc])*
        #[allow(non_camel_case_types)]
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
        pub struct $name;

        impl Algorithm for $name {
            type Word = $word;
            type State = Number<8, $word>;
            type Block = Number<$block>;
            type Output = Number<$out>;

            const NAME: &'static str = $label;
            const ORDER: ByteOrder = ByteOrder::Big;
            const LENGTH_BYTES: usize = 2 * <$word as Word>::BYTES;
            const SEED: Self::State = Number::from_words($seed);

            fn compress(state: &mut Self::State, block: &Self::Block) {
                compress(state.words_mut(), block.as_bytes());
            }
        }
    };
}

sha2_variant!(
    /// SHA-224: SHA-256 compression with its own initial state, truncated
    /// to 224 bits.
    Sha224, u32, 64, 28, H224, "SHA-224"
);

sha2_variant!(
    /// SHA-256.
    Sha256, u32, 64, 32, H256, "SHA-256"
);

sha2_variant!(
    /// SHA-512/224: SHA-512 compression with its own initial state,
    /// truncated to 224 bits.
    Sha512_224, u64, 128, 28, H512_224, "SHA-512/224"
);

sha2_variant!(
    /// SHA-512/256: SHA-512 compression with its own initial state,
    /// truncated to 256 bits.
    Sha512_256, u64, 128, 32, H512_256, "SHA-512/256"
);

sha2_variant!(
    /// SHA-384: SHA-512 compression with its own initial state, truncated
    /// to 384 bits.
    Sha384, u64, 128, 48, H384, "SHA-384"
);

sha2_variant!(
    /// SHA-512.
    Sha512, u64, 128, 64, H512, "SHA-512"
);

/// Computes the SHA-224 digest of `input`.
pub fn sha224(input: &[u8]) -> U224 {
    hash::<Sha224, _>(input)
}

/// Computes the SHA-256 digest of `input`.
///
/// The returned value holds the 32 digest bytes in wire order.
pub fn sha256(input: &[u8]) -> U256 {
    hash::<Sha256, _>(input)
}

pub fn sha384(input: &[u8]) -> U384 {
    hash::<Sha384, _>(input)
}

/// Computes the SHA-512 digest of `input`.
///
/// The message length is encoded as a 128-bit big-endian integer (in
/// bits) and the state uses 8 × 64-bit words.
pub fn sha512(input: &[u8]) -> U512 {
    hash::<Sha512, _>(input)
}

pub fn sha512_224(input: &[u8]) -> U224 {
    hash::<Sha512_224, _>(input)
}

pub fn sha512_256(input: &[u8]) -> U256 {
    hash::<Sha512_256, _>(input)
}
