//! Algorithm parameters
//!
//! Every hash function served by [`Hasher`](crate::hash::Hasher) is a
//! zero-sized type implementing [`Algorithm`]. The trait fixes, at compile
//! time, everything the shared streaming engine needs to know:
//! - the state, block and output widths (as `Number` types)
//! - the byte order of message words and of the length field
//! - the length field width
//! - the initial state (SEED)
//! - the compression function, which owns the round constants (SALT)
//!
//! Output widths narrower than the state are produced by truncating the
//! serialized state; variants sharing a state width share their
//! compression function and differ only in SEED and output type.

use crate::primitives::Words;
use crate::primitives::Word;
use crate::primitives::ops::ByteOrder;

/// A Merkle–Damgård hash function.
pub trait Algorithm {
    /// Word type of the running state.
    type Word: Word;

    /// Running state, e.g. `Number<8, u32>`.
    type State: Words<Word = Self::Word>;

    /// One input block, e.g. `Number<64>`.
    type Block: Words<Word = u8>;

    /// Digest handed to callers, e.g. `Number<28>`.
    type Output: Words<Word = u8>;

    /// Human-readable name, used in log messages.
    const NAME: &'static str;

    /// Byte order of message words, state words and the length field.
    const ORDER: ByteOrder;

    /// Width of the trailing message-length field, in bytes.
    const LENGTH_BYTES: usize;

    /// Initial state.
    const SEED: Self::State;

    /// Folds one full block into the state.
    fn compress(state: &mut Self::State, block: &Self::Block);
}
