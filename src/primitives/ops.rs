//! Endianness conversion and bit-mixing primitives
//!
//! Stateless helpers shared by the hash engines:
//! - rotations (`rotr`, `rotl`)
//! - byte-order conversion between host and wire order (`swap`, `h2be`,
//!   `be2h`, `h2le`, `le2h`)
//! - the nonlinear selection functions `cho3` and `maj3`
//!
//! Everything here is generic over `Word`, so the same code serves the
//! 32-bit and 64-bit hash families.

use crate::primitives::word::Word;

/// Byte order of words and length fields on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ByteOrder {
    /// Most significant byte first (SHA-2).
    Big,
    /// Least significant byte first (RIPEMD).
    Little,
}

impl ByteOrder {
    /// Reads one word from `bytes` (exactly `W::BYTES` long).
    #[inline(always)]
    pub fn read<W: Word>(self, bytes: &[u8]) -> W {
        match self {
            ByteOrder::Big => W::read_be(bytes),
            ByteOrder::Little => W::read_le(bytes),
        }
    }

    /// Writes one word into `out` (exactly `W::BYTES` long).
    #[inline(always)]
    pub fn write<W: Word>(self, word: W, out: &mut [u8]) {
        match self {
            ByteOrder::Big => word.write_be(out),
            ByteOrder::Little => word.write_le(out),
        }
    }

    /// Encodes the low `out.len()` bytes of `value` into `out`.
    pub fn write_length(self, value: u128, out: &mut [u8]) {
        let len = out.len();

        match self {
            ByteOrder::Big => out.copy_from_slice(&value.to_be_bytes()[16 - len..]),
            ByteOrder::Little => out.copy_from_slice(&value.to_le_bytes()[..len]),
        }
    }
}

#[inline(always)]
pub fn rotr<W: Word>(x: W, n: u32) -> W {
    x.rotate_right(n)
}

#[inline(always)]
pub fn rotl<W: Word>(x: W, n: u32) -> W {
    x.rotate_left(n)
}

/// Reverses the byte order of a word.
#[inline(always)]
pub fn swap<W: Word>(x: W) -> W {
    x.swap_bytes()
}

/// Host order to big-endian.
#[inline(always)]
pub fn h2be<W: Word>(x: W) -> W {
    if cfg!(target_endian = "little") { swap(x) } else { x }
}

/// Big-endian to host order.
#[inline(always)]
pub fn be2h<W: Word>(x: W) -> W {
    h2be(x)
}

/// Host order to little-endian.
#[inline(always)]
pub fn h2le<W: Word>(x: W) -> W {
    if cfg!(target_endian = "big") { swap(x) } else { x }
}

/// Little-endian to host order.
#[inline(always)]
pub fn le2h<W: Word>(x: W) -> W {
    h2le(x)
}

/// Choose: for each bit, `y` where `x` is set, `z` otherwise.
#[inline(always)]
pub fn cho3<W: Word>(x: W, y: W, z: W) -> W {
    (x & (y ^ z)) ^ z
}

/// Majority: for each bit, the value held by at least two inputs.
#[inline(always)]
pub fn maj3<W: Word>(x: W, y: W, z: W) -> W {
    (x & y) | ((x ^ y) & z)
}
