//! Streaming message digests over fixed-width integers
//!
//! This crate provides incremental hashing for the SHA-2 family and
//! RIPEMD-160, built on a reusable fixed-width unsigned integer type.
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on peak throughput. Every algorithm is a portable pure-Rust
//! implementation; there are no hardware-acceleration paths and no
//! constant-time guarantees.
//!
//! # Module overview
//!
//! - `primitives`
//!   The fixed-width integer `Number<N, W>` (an array of `N` machine words
//!   of type `W`, least significant first), its scalar arithmetic, and its
//!   arbitrary-radix text codec (`encode` / `decode` with hex, base58,
//!   ... alphabets). Also the byte-order and bit-mixing helpers shared by
//!   the hash engines.
//!
//! - `hash`
//!   The streaming engine `Hasher<A>` and the algorithms it runs:
//!   SHA-224, SHA-256, SHA-384, SHA-512, SHA-512/224, SHA-512/256 and
//!   RIPEMD-160. Input is fed with `update` in chunks of any size; `digest`
//!   pads, finalizes and returns the digest as a `Number`.
//!
//! # Example
//!
//! ```
//! use mdhash::hash::{Hasher, Sha256};
//!
//! let mut hasher = Hasher::<Sha256>::new();
//! hasher.update(b"a").update(b"bc");
//!
//! let digest = hasher.digest();
//! assert_eq!(
//!     format!("{digest:x}"),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
//! );
//! ```
//!
//! # Design goals
//!
//! - No heap allocations in the hash engines
//! - Hash state and pending input wiped from memory on drop
//! - Minimal and explicit APIs
//! - Stable, well-defined semantics

pub mod hash;
pub mod primitives;
