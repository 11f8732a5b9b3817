//! Scalar arithmetic for `Number`
//!
//! `Number` only supports arithmetic with a machine-sized scalar: this is
//! all the radix conversion and the hash engines need. Carries are kept in
//! a `u128`, wide enough for a full word times a `usize` plus a carry.
//!
//! All operations wrap modulo 2^bits. Overflow is never an error.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Rem};

use crate::primitives::number::core::Number;
use crate::primitives::ops::swap as swap_word;
use crate::primitives::word::Word;

impl<const N: usize, W: Word> Number<N, W> {
    /// Adds `rhs` in place, rippling the carry upwards.
    pub fn add_scalar(&mut self, rhs: usize) -> &mut Self {
        let mut carry = rhs as u128;

        for word in self.words_mut() {
            if carry == 0 {
                break;
            }

            carry += word.widen();
            *word = W::narrow(carry);
            carry >>= W::BITS;
        }

        self
    }

    /// Multiplies by `rhs` in place.
    pub fn mul_scalar(&mut self, rhs: usize) -> &mut Self {
        let rhs = rhs as u128;
        let mut carry = 0u128;

        for word in self.words_mut() {
            carry += rhs * word.widen();
            *word = W::narrow(carry);
            carry >>= W::BITS;
        }

        self
    }

    /// Divides by `rhs` in place and returns the remainder.
    ///
    /// Long division from the most significant word down.
    ///
    /// # Panics
    /// If `rhs` is zero.
    pub fn divide(&mut self, rhs: usize) -> usize {
        assert!(rhs != 0, "division by zero");

        let rhs = rhs as u128;
        let mut remain = 0u128;

        for word in self.words_mut().iter_mut().rev() {
            remain = (remain << W::BITS) | word.widen();
            *word = W::narrow(remain / rhs);
            remain %= rhs;
        }

        remain as usize
    }

    /// Reverses the byte order of the whole value.
    ///
    /// Bytes are swapped inside each word and the word order is reversed.
    /// Converts between the little-endian representation and network
    /// (big-endian) order.
    pub fn swapped(&self) -> Self {
        let mut out = Self::ZERO;

        for (o, &w) in out.words_mut().iter_mut().zip(self.words().iter().rev()) {
            *o = swap_word(w);
        }

        out
    }

    /// Shifts every word one slot up and stores `word` at index 0.
    ///
    /// The most significant word is dropped.
    pub fn unshift(&mut self, word: W) {
        let words = self.words_mut();

        if words.is_empty() {
            return;
        }

        words.copy_within(..words.len() - 1, 1);
        words[0] = word;
    }
}

/// Byte-order swap of a whole `Number`, see [`Number::swapped`].
pub fn swap<const N: usize, W: Word>(number: &Number<N, W>) -> Number<N, W> {
    number.swapped()
}

impl<const N: usize, W: Word> AddAssign<usize> for Number<N, W> {
    fn add_assign(&mut self, rhs: usize) {
        self.add_scalar(rhs);
    }
}

impl<const N: usize, W: Word> Add<usize> for Number<N, W> {
    type Output = Self;

    fn add(mut self, rhs: usize) -> Self {
        self.add_scalar(rhs);
        self
    }
}

impl<const N: usize, W: Word> Add<Number<N, W>> for usize {
    type Output = Number<N, W>;

    fn add(self, rhs: Number<N, W>) -> Number<N, W> {
        rhs + self
    }
}

impl<const N: usize, W: Word> MulAssign<usize> for Number<N, W> {
    fn mul_assign(&mut self, rhs: usize) {
        self.mul_scalar(rhs);
    }
}

impl<const N: usize, W: Word> Mul<usize> for Number<N, W> {
    type Output = Self;

    fn mul(mut self, rhs: usize) -> Self {
        self.mul_scalar(rhs);
        self
    }
}

impl<const N: usize, W: Word> Mul<Number<N, W>> for usize {
    type Output = Number<N, W>;

    fn mul(self, rhs: Number<N, W>) -> Number<N, W> {
        rhs * self
    }
}

impl<const N: usize, W: Word> DivAssign<usize> for Number<N, W> {
    fn div_assign(&mut self, rhs: usize) {
        self.divide(rhs);
    }
}

impl<const N: usize, W: Word> Div<usize> for Number<N, W> {
    type Output = Self;

    fn div(mut self, rhs: usize) -> Self {
        self.divide(rhs);
        self
    }
}

/// Remainder of the division by a scalar.
impl<const N: usize, W: Word> Rem<usize> for Number<N, W> {
    type Output = usize;

    fn rem(mut self, rhs: usize) -> usize {
        self.divide(rhs)
    }
}
