//! Fixed-width unsigned integers
//!
//! This module defines `Number`, a bit-width-parameterized unsigned integer
//! stored as an array of machine words, along with its scalar arithmetic
//! and its arbitrary-radix text codec.
//!
//! `Number` is designed as a **simple, explicit value type**, not as a full
//! big-integer library. Its primary use cases include:
//! - running hash state
//! - digest values and their textual rendering
//! - identifiers encoded in hex, base36 or base58

mod core;
mod ops;
mod radix;

pub use self::core::{Number, Words};
pub use ops::swap;
pub use radix::{
    Alphabet, AlphabetError, BASE2, BASE10, BASE16, BASE36, BASE58, DecodeError,
};
