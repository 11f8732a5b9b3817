//! Machine words
//!
//! The `Word` trait abstracts over the unsigned machine integers that a
//! `Number` can be built from. It exposes only what the fixed-width
//! arithmetic and the hash engines need: widths, wrapping arithmetic,
//! rotations, byte swaps and explicit-endian serialization.

use std::fmt::{Debug, LowerHex};
use std::hash::Hash;
use std::ops::{BitAnd, BitOr, BitXor, Not, Shl, Shr};

use zeroize::Zeroize;

/// An unsigned machine word usable as a `Number` limb.
///
/// Implemented for `u8`, `u16`, `u32` and `u64`. Carries and products are
/// computed in `u128`, which is wide enough for any word times a `usize`
/// scalar plus a carry.
pub trait Word:
    Copy
    + Default
    + Eq
    + Hash
    + Debug
    + LowerHex
    + Zeroize
    + Send
    + Sync
    + 'static
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
{
    /// Width in bits.
    const BITS: u32;

    /// Width in bytes.
    const BYTES: usize;

    /// The all-zero word.
    const ZERO: Self;

    fn wrapping_add(self, rhs: Self) -> Self;

    fn rotate_right(self, n: u32) -> Self;

    fn rotate_left(self, n: u32) -> Self;

    /// Reverses the byte order of the word.
    fn swap_bytes(self) -> Self;

    /// Zero-extends the word to 128 bits.
    fn widen(self) -> u128;

    /// Keeps the low `BITS` bits of `value`.
    fn narrow(value: u128) -> Self;

    /// Reads a word from exactly `BYTES` big-endian bytes.
    fn read_be(bytes: &[u8]) -> Self;

    /// Reads a word from exactly `BYTES` little-endian bytes.
    fn read_le(bytes: &[u8]) -> Self;

    /// Writes the word as `BYTES` big-endian bytes.
    fn write_be(self, out: &mut [u8]);

    /// Writes the word as `BYTES` little-endian bytes.
    fn write_le(self, out: &mut [u8]);
}

macro_rules! impl_word {
    ($($t:ty),* $(,)?) => {
        $(
            impl Word for $t {
                const BITS: u32 = <$t>::BITS;
                const BYTES: usize = std::mem::size_of::<$t>();
                const ZERO: Self = 0;

                #[inline(always)]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$t>::wrapping_add(self, rhs)
                }

                #[inline(always)]
                fn rotate_right(self, n: u32) -> Self {
                    <$t>::rotate_right(self, n)
                }

                #[inline(always)]
                fn rotate_left(self, n: u32) -> Self {
                    <$t>::rotate_left(self, n)
                }

                #[inline(always)]
                fn swap_bytes(self) -> Self {
                    <$t>::swap_bytes(self)
                }

                #[inline(always)]
                fn widen(self) -> u128 {
                    self as u128
                }

                #[inline(always)]
                fn narrow(value: u128) -> Self {
                    value as $t
                }

                #[inline(always)]
                fn read_be(bytes: &[u8]) -> Self {
                    let mut raw = [0u8; std::mem::size_of::<$t>()];
                    raw.copy_from_slice(bytes);

                    <$t>::from_be_bytes(raw)
                }

                #[inline(always)]
                fn read_le(bytes: &[u8]) -> Self {
                    let mut raw = [0u8; std::mem::size_of::<$t>()];
                    raw.copy_from_slice(bytes);

                    <$t>::from_le_bytes(raw)
                }

                #[inline(always)]
                fn write_be(self, out: &mut [u8]) {
                    out.copy_from_slice(&self.to_be_bytes());
                }

                #[inline(always)]
                fn write_le(self, out: &mut [u8]) {
                    out.copy_from_slice(&self.to_le_bytes());
                }
            }
        )*
    };
}

impl_word!(u8, u16, u32, u64);
