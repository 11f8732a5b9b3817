//! Fixed-width unsigned integer
//!
//! `Number<N, W>` is an unsigned integer made of `N` machine words of type
//! `W`, stored **least-significant word first**. Its width is fixed at
//! compile time and every operation preserves it: arithmetic wraps modulo
//! 2^bits and never grows the value.
//!
//! The byte representation of a `Number` serializes each word in
//! little-endian order, one after the other. It is therefore the
//! little-endian encoding of the numeric value, whatever the word width,
//! and converting between widths is a plain truncating or zero-extending
//! byte copy.
//!
//! The type is used both as hash state (`Number<8, u32>`, `Number<8, u64>`)
//! and as the digest value handed back to callers (`Number<32>` for a
//! 256-bit digest, where each word is one byte of the digest in wire
//! order).

use std::fmt::{self, Display, Formatter, LowerHex, UpperHex};
use std::ops::{Index, IndexMut};

use zeroize::Zeroize;

use crate::primitives::word::Word;

/// Fixed-width unsigned integer of `N` words of type `W`.
///
/// Values are plain data: copies are whole-array copies and nothing is
/// shared. Instances holding sensitive material should be kept inside
/// `zeroize::Zeroizing`, which wipes the words when the value goes out of
/// scope.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Number<const N: usize, W: Word = u8> {
    words: [W; N],
}

impl<const N: usize, W: Word> Number<N, W> {
    /// Width in bits.
    pub const BITS: usize = N * W::BITS as usize;

    /// Width in bytes.
    pub const BYTES: usize = N * W::BYTES;

    /// The value zero.
    pub const ZERO: Self = Self { words: [W::ZERO; N] };

    /// Builds a value from its words, least significant first.
    pub const fn from_words(words: [W; N]) -> Self {
        Self { words }
    }

    /// Builds a value from a word list, least significant first.
    ///
    /// Missing high words are zero.
    ///
    /// # Panics
    /// If `words` holds more than `N` words.
    pub fn from_slice(words: &[W]) -> Self {
        assert!(
            words.len() <= N,
            "{} words do not fit in a {}-word number",
            words.len(),
            N
        );

        let mut out = Self::ZERO;
        out.words[..words.len()].copy_from_slice(words);

        out
    }

    /// Builds a value from its little-endian byte representation.
    ///
    /// Extra bytes are dropped and missing bytes are zero, so this
    /// truncates or zero-extends the numeric value.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut out = Self::ZERO;

        for (i, &byte) in bytes.iter().take(Self::BYTES).enumerate() {
            out.set_byte(i, byte);
        }

        out
    }

    /// Copies a value of any width and word type into this one.
    ///
    /// The numeric value is truncated to the low `bits()` bits, or
    /// zero-extended when the source is narrower.
    pub fn from_number<const M: usize, V: Word>(other: &Number<M, V>) -> Self {
        let mut out = Self::ZERO;

        for i in 0..Self::BYTES.min(Number::<M, V>::BYTES) {
            out.set_byte(i, other.byte(i));
        }

        out
    }

    /// Reinterprets a fixed-size record as the low bytes of a value.
    ///
    /// A record larger than the number does not compile.
    pub fn from_record<const M: usize>(record: &[u8; M]) -> Self {
        const {
            assert!(M <= N * W::BYTES, "record does not fit in the number");
        }

        Self::from_bytes(record)
    }

    /// Width in bits.
    pub const fn bits(&self) -> usize {
        Self::BITS
    }

    /// Width in bytes.
    pub const fn size(&self) -> usize {
        Self::BYTES
    }

    /// Number of words.
    pub const fn word_count(&self) -> usize {
        N
    }

    pub fn words(&self) -> &[W] {
        &self.words
    }

    pub fn words_mut(&mut self) -> &mut [W] {
        &mut self.words
    }

    /// Returns byte `i` of the little-endian representation.
    pub fn byte(&self, i: usize) -> u8 {
        let word = self.words[i / W::BYTES];
        let shift = 8 * (i % W::BYTES);

        (word.widen() >> shift) as u8
    }

    /// Overwrites byte `i` of the little-endian representation.
    pub fn set_byte(&mut self, i: usize, byte: u8) {
        let slot = &mut self.words[i / W::BYTES];
        let shift = 8 * (i % W::BYTES);

        let cleared = slot.widen() & !(0xFFu128 << shift);
        *slot = W::narrow(cleared | ((byte as u128) << shift));
    }

    /// Writes the little-endian representation into `out`.
    ///
    /// Writes `min(out.len(), size())` bytes and returns that count.
    pub fn write_bytes(&self, out: &mut [u8]) -> usize {
        let len = out.len().min(Self::BYTES);

        for (i, slot) in out.iter_mut().take(len).enumerate() {
            *slot = self.byte(i);
        }

        len
    }

    /// Returns the little-endian representation as a vector.
    pub fn to_bytes(&self) -> Vec<u8> {
        (0..Self::BYTES).map(|i| self.byte(i)).collect()
    }

    /// Returns `true` if every bit is zero.
    pub fn is_zero(&self) -> bool {
        self.words.iter().all(|&w| w == W::ZERO)
    }
}

impl<const N: usize> Number<N, u8> {
    /// The byte representation, borrowed.
    ///
    /// For a digest this is the digest in wire order.
    pub fn as_bytes(&self) -> &[u8] {
        &self.words
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.words
    }
}

/// Manual `Default` for `Number`.
///
/// `Default` is only derived for arrays of up to 32 elements, so
/// `#[derive(Default)]` cannot be used for arbitrary `N`. The default value
/// is zero, matching `Number::ZERO`.
impl<const N: usize, W: Word> Default for Number<N, W> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const N: usize, W: Word> From<[W; N]> for Number<N, W> {
    fn from(words: [W; N]) -> Self {
        Self::from_words(words)
    }
}

impl<const N: usize, W: Word> From<Number<N, W>> for [W; N] {
    fn from(value: Number<N, W>) -> Self {
        value.words
    }
}

impl<const N: usize> AsRef<[u8]> for Number<N, u8> {
    fn as_ref(&self) -> &[u8] {
        &self.words
    }
}

impl<const N: usize> AsMut<[u8]> for Number<N, u8> {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.words
    }
}

/// Word access. Indices run from the least significant word.
impl<const N: usize, W: Word> Index<usize> for Number<N, W> {
    type Output = W;

    #[inline(always)]
    fn index(&self, index: usize) -> &W {
        &self.words[index]
    }
}

impl<const N: usize, W: Word> IndexMut<usize> for Number<N, W> {
    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut W {
        &mut self.words[index]
    }
}

impl<const N: usize, W: Word> Zeroize for Number<N, W> {
    fn zeroize(&mut self) {
        self.words.iter_mut().for_each(Zeroize::zeroize);
    }
}

impl<const N: usize, W: Word> LowerHex for Number<N, W> {
    /// Formats the byte representation, in storage order, as lowercase hex.
    ///
    /// For digests this prints the usual hex digest.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for i in 0..Self::BYTES {
            write!(f, "{:02x}", self.byte(i))?;
        }

        Ok(())
    }
}

impl<const N: usize, W: Word> UpperHex for Number<N, W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for i in 0..Self::BYTES {
            write!(f, "{:02X}", self.byte(i))?;
        }

        Ok(())
    }
}

impl<const N: usize, W: Word> Display for Number<N, W> {
    /// Formats the byte representation as colon-separated uppercase hex.
    ///
    /// Example:
    /// `BA:78:16:BF:...`
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for i in 0..Self::BYTES {
            if i > 0 {
                f.write_str(":")?;
            }

            write!(f, "{:02X}", self.byte(i))?;
        }

        Ok(())
    }
}

/// Uniform access to a `Number` of any width.
///
/// The hash engine is written against this trait so that an algorithm can
/// name its state, block and output types once.
pub trait Words: Copy + Default + Eq + Zeroize + Send + Sync {
    type Word: Word;

    /// Number of words.
    const LEN: usize;

    fn words(&self) -> &[Self::Word];

    fn words_mut(&mut self) -> &mut [Self::Word];

    /// See [`Number::from_bytes`].
    fn from_bytes(bytes: &[u8]) -> Self;
}

impl<const N: usize, W: Word> Words for Number<N, W> {
    type Word = W;

    const LEN: usize = N;

    fn words(&self) -> &[W] {
        &self.words
    }

    fn words_mut(&mut self) -> &mut [W] {
        &mut self.words
    }

    fn from_bytes(bytes: &[u8]) -> Self {
        Number::from_bytes(bytes)
    }
}
