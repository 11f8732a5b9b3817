//! SHA-2 round computations
//!
//! The SHA-2 message schedule and round function are identical for the
//! 32-bit (SHA-224/256) and 64-bit (SHA-384/512 and truncations) families,
//! up to the rotation amounts, the round count and the round constants.
//! `Sha2Word` carries those differences so `all_rounds` is written once.

use zeroize::Zeroizing;

use crate::hash::sha2::constants::{K256, K512};
use crate::primitives::Number;
use crate::primitives::Word;
use crate::primitives::ops::{cho3, maj3, rotr};

/// Word-width-specific parameters of SHA-2.
pub trait Sha2Word: Word {
    /// Number of rounds, and length of the expanded message schedule.
    const ROUNDS: usize;

    /// Round constants (SALT), one per round.
    const SALT: &'static [Self];

    /// Message schedule mixing of `W[t-15]`.
    fn sigma0(x: Self) -> Self;

    /// Message schedule mixing of `W[t-2]`.
    fn sigma1(x: Self) -> Self;

    /// Round mixing of register `a`.
    fn delta0(x: Self) -> Self;

    /// Round mixing of register `e`.
    fn delta1(x: Self) -> Self;
}

impl Sha2Word for u32 {
    const ROUNDS: usize = 64;
    const SALT: &'static [u32] = &K256;

    #[inline(always)]
    fn sigma0(x: u32) -> u32 {
        rotr(x, 7) ^ rotr(x, 18) ^ (x >> 3)
    }

    #[inline(always)]
    fn sigma1(x: u32) -> u32 {
        rotr(x, 17) ^ rotr(x, 19) ^ (x >> 10)
    }

    #[inline(always)]
    fn delta0(x: u32) -> u32 {
        rotr(x, 2) ^ rotr(x, 13) ^ rotr(x, 22)
    }

    #[inline(always)]
    fn delta1(x: u32) -> u32 {
        rotr(x, 6) ^ rotr(x, 11) ^ rotr(x, 25)
    }
}

impl Sha2Word for u64 {
    const ROUNDS: usize = 80;
    const SALT: &'static [u64] = &K512;

    #[inline(always)]
    fn sigma0(x: u64) -> u64 {
        rotr(x, 1) ^ rotr(x, 8) ^ (x >> 7)
    }

    #[inline(always)]
    fn sigma1(x: u64) -> u64 {
        rotr(x, 19) ^ rotr(x, 61) ^ (x >> 6)
    }

    #[inline(always)]
    fn delta0(x: u64) -> u64 {
        rotr(x, 28) ^ rotr(x, 34) ^ rotr(x, 39)
    }

    #[inline(always)]
    fn delta1(x: u64) -> u64 {
        rotr(x, 14) ^ rotr(x, 18) ^ rotr(x, 41)
    }
}

/// `W[t] = W[t-16] + sigma0(W[t-15]) + W[t-7] + sigma1(W[t-2])`
#[inline(always)]
fn schedule<W: Sha2Word>(w16: W, w15: W, w7: W, w2: W) -> W {
    w16.wrapping_add(W::sigma0(w15))
        .wrapping_add(w7)
        .wrapping_add(W::sigma1(w2))
}

/// Runs every round over the 16 message words `w` and folds the result
/// into `state` (8 words).
///
/// The full message schedule is expanded up front.
#[cfg(not(feature = "speed"))]
pub fn all_rounds<W: Sha2Word>(state: &mut [W], w: &Number<16, W>) {
    let mut pseudo = Zeroizing::new(Number::<80, W>::from_slice(w.words()));

    for i in 16..W::ROUNDS {
        pseudo[i] = schedule(pseudo[i - 16], pseudo[i - 15], pseudo[i - 7], pseudo[i - 2]);
    }

    rounds(state, |i| pseudo[i]);
}

/// Runs every round over the 16 message words `w` and folds the result
/// into `state` (8 words).
///
/// The schedule is kept in a rolling window of 16 words, expanded one word
/// per round.
#[cfg(feature = "speed")]
pub fn all_rounds<W: Sha2Word>(state: &mut [W], w: &Number<16, W>) {
    let mut window = Zeroizing::new(*w);

    rounds(state, |i| {
        if i >= 16 {
            window[i & 15] = schedule(
                window[(i - 16) & 15],
                window[(i - 15) & 15],
                window[(i - 7) & 15],
                window[(i - 2) & 15],
            );
        }

        window[i & 15]
    });
}

#[inline(always)]
fn rounds<W: Sha2Word>(state: &mut [W], mut word: impl FnMut(usize) -> W) {
    let mut a = state[0];
    let mut b = state[1];
    let mut c = state[2];
    let mut d = state[3];
    let mut e = state[4];
    let mut f = state[5];
    let mut g = state[6];
    let mut h = state[7];

    for (i, &ki) in W::SALT.iter().enumerate().take(W::ROUNDS) {
        let wi = word(i);

        let t1 = h
            .wrapping_add(W::delta1(e))
            .wrapping_add(cho3(e, f, g))
            .wrapping_add(ki)
            .wrapping_add(wi);

        let t2 = W::delta0(a).wrapping_add(maj3(a, b, c));

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
    state[5] = state[5].wrapping_add(f);
    state[6] = state[6].wrapping_add(g);
    state[7] = state[7].wrapping_add(h);
}
