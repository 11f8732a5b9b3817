//! Hash algorithms exposed by the crate.
//!
//! Every algorithm runs on the same streaming engine, [`Hasher`], and is
//! selected by a zero-sized type implementing [`Algorithm`]:
//! - SHA-224, SHA-256 (32-bit words, 512-bit blocks)
//! - SHA-384, SHA-512, SHA-512/224, SHA-512/256 (64-bit words, 1024-bit
//!   blocks)
//! - RIPEMD-160
//!
//! Digests are returned as byte-word `Number`s whose bytes are the digest
//! in wire order.

mod algorithm;
mod engine;
mod hashable;
pub mod ripemd;
pub mod sha2;

pub use algorithm::Algorithm;
pub use engine::{HashError, Hasher};
pub use hashable::Hashable;

pub use self::ripemd::{Ripemd160, ripemd160};
pub use self::sha2::{
    Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256, sha224, sha256, sha384, sha512,
    sha512_224, sha512_256,
};

/// Hashes a single value with algorithm `A`.
///
/// Equivalent to creating a [`Hasher`], feeding `value` once and taking
/// the digest.
pub fn hash<A: Algorithm, T: Hashable + ?Sized>(value: &T) -> A::Output {
    Hasher::<A>::new().feed(value).digest()
}
