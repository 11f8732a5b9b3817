//! SHA-2 family
//!
//! SHA-224, SHA-256, SHA-384, SHA-512, SHA-512/224 and SHA-512/256 on the
//! shared streaming engine, with a pure-Rust compression function.

mod computations;
mod constants;
pub mod core;

pub use self::core::{
    Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256, sha224, sha256, sha384, sha512,
    sha512_224, sha512_256,
};
