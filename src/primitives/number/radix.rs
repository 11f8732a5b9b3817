//! Arbitrary-radix text encoding for `Number`
//!
//! A `Number` can be rendered in, and parsed from, any positional numeral
//! system described by an [`Alphabet`]: the digit for value `i` is the
//! `i`-th character of the alphabet, and the radix is the alphabet length.
//!
//! Encoding is variable-length (no leading zero digits, zero renders as the
//! single zero digit). Decoding rejects characters outside the alphabet
//! with an explicit [`DecodeError`]; values too large for the target width
//! wrap, like every other `Number` arithmetic.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::primitives::number::core::Number;
use crate::primitives::word::Word;

/// A validated set of digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Alphabet<'a> {
    digits: &'a str,
    radix: usize,
}

/// Counts the characters of `digits` by skipping UTF-8 continuation bytes.
const fn char_count(digits: &str) -> usize {
    let bytes = digits.as_bytes();
    let mut count = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] & 0xC0 != 0x80 {
            count += 1;
        }

        i += 1;
    }

    count
}

/// Binary digits.
pub const BASE2: Alphabet<'static> = Alphabet::builtin("01");

/// Decimal digits.
pub const BASE10: Alphabet<'static> = Alphabet::builtin("0123456789");

/// Lowercase hexadecimal digits. The default alphabet.
pub const BASE16: Alphabet<'static> = Alphabet::builtin("0123456789abcdef");

/// Digits followed by the lowercase latin alphabet.
pub const BASE36: Alphabet<'static> =
    Alphabet::builtin("0123456789abcdefghijklmnopqrstuvwxyz");

/// Bitcoin base58 alphabet (no `0`, `O`, `I`, `l`).
pub const BASE58: Alphabet<'static> =
    Alphabet::builtin("123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz");

/// Errors raised when building an [`Alphabet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlphabetError {
    /// An alphabet needs at least two digits.
    TooShort,
    /// The same character appears twice.
    DuplicateDigit(char),
}

/// Errors raised when decoding text into a `Number`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// A character is not part of the alphabet.
    InvalidDigit {
        /// The offending character.
        digit: char,
        /// Its character index in the input.
        position: usize,
    },
}

impl Display for AlphabetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AlphabetError::TooShort => f.write_str("alphabet must have at least two digits"),
            AlphabetError::DuplicateDigit(c) => write!(f, "duplicate digit {c:?} in alphabet"),
        }
    }
}

impl std::error::Error for AlphabetError {}

impl Display for DecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::InvalidDigit { digit, position } => {
                write!(f, "invalid digit {digit:?} at position {position}")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

impl<'a> Alphabet<'a> {
    const fn builtin(digits: &'a str) -> Self {
        Self {
            digits,
            radix: char_count(digits),
        }
    }

    /// Validates `digits` as an alphabet.
    ///
    /// # Errors
    /// - [`AlphabetError::TooShort`] for fewer than two characters.
    /// - [`AlphabetError::DuplicateDigit`] if a character repeats, since
    ///   decoding would then be ambiguous.
    pub fn new(digits: &'a str) -> Result<Self, AlphabetError> {
        let mut seen = Vec::new();

        for c in digits.chars() {
            if seen.contains(&c) {
                return Err(AlphabetError::DuplicateDigit(c));
            }

            seen.push(c);
        }

        if seen.len() < 2 {
            return Err(AlphabetError::TooShort);
        }

        Ok(Self {
            digits,
            radix: seen.len(),
        })
    }

    /// Number of digits, i.e. the radix.
    pub fn radix(&self) -> usize {
        self.radix
    }

    pub fn digits(&self) -> &'a str {
        self.digits
    }

    /// Value of `digit`, if it belongs to the alphabet.
    ///
    /// Scans the alphabet; [`Number::decode`] builds a lookup table
    /// instead.
    pub fn position(&self, digit: char) -> Option<usize> {
        self.digits.chars().position(|c| c == digit)
    }
}

impl Default for Alphabet<'static> {
    fn default() -> Self {
        BASE16
    }
}

impl<const N: usize, W: Word> Number<N, W> {
    /// Renders the numeric value in the radix of `alphabet`.
    ///
    /// Digits come out most significant first, without leading zeros.
    /// Zero renders as the alphabet's first digit.
    pub fn encode(&self, alphabet: &Alphabet<'_>) -> String {
        let digits: Vec<char> = alphabet.digits.chars().collect();
        let radix = digits.len();

        let capacity = (Self::BITS as f64 / (radix as f64).log2()).ceil() as usize;
        let mut out = Vec::with_capacity(capacity.max(1));

        let mut number = *self;

        while !number.is_zero() {
            out.push(digits[number.divide(radix)]);
        }

        if out.is_empty() {
            out.push(digits[0]);
        }

        out.iter().rev().collect()
    }

    /// Parses text written in the radix of `alphabet`.
    ///
    /// Empty input is zero. Values wider than the number wrap.
    ///
    /// # Errors
    /// [`DecodeError::InvalidDigit`] for the first character that is not
    /// part of the alphabet.
    pub fn decode(text: &str, alphabet: &Alphabet<'_>) -> Result<Self, DecodeError> {
        let radix = alphabet.radix();

        let mut table: Vec<(char, usize)> = alphabet.digits.chars().zip(0..).collect();
        table.sort_unstable();

        let mut number = Self::ZERO;

        for (position, digit) in text.chars().enumerate() {
            let Ok(slot) = table.binary_search_by_key(&digit, |&(c, _)| c) else {
                log::debug!("rejecting digit {digit:?} at position {position}");
                return Err(DecodeError::InvalidDigit { digit, position });
            };

            number.mul_scalar(radix).add_scalar(table[slot].1);
        }

        Ok(number)
    }
}

/// Parses lowercase hexadecimal, see [`Number::decode`].
impl<const N: usize, W: Word> FromStr for Number<N, W> {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s, &BASE16)
    }
}
