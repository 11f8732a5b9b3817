//! Primitive types
//!
//! This module defines the low-level building blocks shared by every hash
//! engine in the crate.
//!
//! Primitives are simple, fixed-size building blocks that provide
//! well-defined semantics and predictable behavior. They are intentionally
//! minimal and do not attempt to replicate a full-featured big-integer
//! library.
//!
//! Current primitives include:
//! - `Word`: the machine word types a `Number` is made of
//! - `Number`: a fixed-width unsigned integer with radix conversion
//! - byte-order and bit-mixing helpers in `ops`

mod number;
pub mod ops;
mod word;

pub use number::{
    Alphabet, AlphabetError, BASE2, BASE10, BASE16, BASE36, BASE58, DecodeError, Number, Words,
    swap,
};
pub use word::Word;

/// Fixed-width integers of the sizes produced by the hash functions.
///
/// These use byte words, so their byte representation is the digest in
/// wire order.
pub type U160 = Number<20>;
pub type U224 = Number<28>;
pub type U256 = Number<32>;
pub type U384 = Number<48>;
pub type U512 = Number<64>;
