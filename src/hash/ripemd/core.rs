//! RIPEMD-160 core hashing functions
//!
//! RIPEMD-160 shares the Merkle–Damgård skeleton with SHA-2 but uses a
//! different compression function: two independent lines of 80 steps run
//! over the same block, each with its own message word order, rotation
//! amounts, boolean function order and constants, and are combined into
//! the state at the end.
//!
//! Message words, the length field and the digest are little-endian.

use zeroize::Zeroizing;

use crate::hash::algorithm::Algorithm;
use crate::hash::hash;
use crate::hash::ripemd::constants::{H160, K_LEFT, K_RIGHT, R_LEFT, R_RIGHT, S_LEFT, S_RIGHT};
use crate::primitives::ops::{ByteOrder, cho3, rotl};
use crate::primitives::{Number, U160};

/// Boolean function of `round` (0..5).
#[inline(always)]
fn f(round: usize, x: u32, y: u32, z: u32) -> u32 {
    match round {
        0 => x ^ y ^ z,
        1 => cho3(x, y, z),
        2 => (x | !y) ^ z,
        3 => cho3(z, x, y),
        _ => x ^ (y | !z),
    }
}

/// Compresses a single 512-bit block into the 5-word `state`.
pub(crate) fn compress(state: &mut [u32], block: &[u8]) {
    let mut x = Zeroizing::new(Number::<16, u32>::ZERO);

    for (slot, chunk) in x.words_mut().iter_mut().zip(block.chunks_exact(4)) {
        *slot = ByteOrder::Little.read(chunk);
    }

    let (mut al, mut bl, mut cl, mut dl, mut el) = (state[0], state[1], state[2], state[3], state[4]);
    let (mut ar, mut br, mut cr, mut dr, mut er) = (al, bl, cl, dl, el);

    for j in 0..80 {
        let round = j / 16;

        let t = rotl(
            al.wrapping_add(f(round, bl, cl, dl))
                .wrapping_add(x[R_LEFT[j]])
                .wrapping_add(K_LEFT[round]),
            S_LEFT[j],
        )
        .wrapping_add(el);

        al = el;
        el = dl;
        dl = rotl(cl, 10);
        cl = bl;
        bl = t;

        let t = rotl(
            ar.wrapping_add(f(4 - round, br, cr, dr))
                .wrapping_add(x[R_RIGHT[j]])
                .wrapping_add(K_RIGHT[round]),
            S_RIGHT[j],
        )
        .wrapping_add(er);

        ar = er;
        er = dr;
        dr = rotl(cr, 10);
        cr = br;
        br = t;
    }

    let t = state[1].wrapping_add(cl).wrapping_add(dr);
    state[1] = state[2].wrapping_add(dl).wrapping_add(er);
    state[2] = state[3].wrapping_add(el).wrapping_add(ar);
    state[3] = state[4].wrapping_add(al).wrapping_add(br);
    state[4] = state[0].wrapping_add(bl).wrapping_add(cr);
    state[0] = t;
}

/// RIPEMD-160.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ripemd160;

impl Algorithm for Ripemd160 {
    type Word = u32;
    type State = Number<5, u32>;
    type Block = Number<64>;
    type Output = Number<20>;

    const NAME: &'static str = "RIPEMD-160";
    const ORDER: ByteOrder = ByteOrder::Little;
    const LENGTH_BYTES: usize = 8;
    const SEED: Self::State = Number::from_words(H160);

    fn compress(state: &mut Self::State, block: &Self::Block) {
        compress(state.words_mut(), block.as_bytes());
    }
}

/// Computes the RIPEMD-160 digest of `input`.
pub fn ripemd160(input: &[u8]) -> U160 {
    hash::<Ripemd160, _>(input)
}
