//! Values with a stable byte representation
//!
//! [`Hashable`] feeds a value into a [`Hasher`] as an unambiguous byte
//! stream, so that records, integers and numbers can be hashed without
//! reinterpreting their in-memory layout.
//!
//! - Byte containers (`[u8]`, arrays, `Vec<u8>`) and strings are fed as-is.
//! - Integers are fed big-endian, independent of the host.
//! - A `Number` is fed as its little-endian byte representation; for a
//!   digest this is the digest bytes in wire order.
//!
//! User-defined records implement the trait by feeding their fields in a
//! fixed order.

use crate::hash::algorithm::Algorithm;
use crate::hash::engine::Hasher;
use crate::primitives::{Number, Word};

/// A type with a stable byte representation for hashing.
pub trait Hashable {
    /// Feeds this value into `hasher`.
    ///
    /// # Panics
    /// If `hasher` was already finalized.
    fn hash_into<A: Algorithm>(&self, hasher: &mut Hasher<A>);
}

impl Hashable for [u8] {
    fn hash_into<A: Algorithm>(&self, hasher: &mut Hasher<A>) {
        hasher.update(self);
    }
}

impl<const M: usize> Hashable for [u8; M] {
    fn hash_into<A: Algorithm>(&self, hasher: &mut Hasher<A>) {
        hasher.update(self);
    }
}

impl Hashable for Vec<u8> {
    fn hash_into<A: Algorithm>(&self, hasher: &mut Hasher<A>) {
        hasher.update(self);
    }
}

impl Hashable for str {
    fn hash_into<A: Algorithm>(&self, hasher: &mut Hasher<A>) {
        hasher.update(self.as_bytes());
    }
}

impl Hashable for String {
    fn hash_into<A: Algorithm>(&self, hasher: &mut Hasher<A>) {
        hasher.update(self.as_bytes());
    }
}

impl<const N: usize, W: Word> Hashable for Number<N, W> {
    fn hash_into<A: Algorithm>(&self, hasher: &mut Hasher<A>) {
        let mut buf = [0u8; 8];

        for &word in self.words() {
            let bytes = &mut buf[..W::BYTES];
            word.write_le(bytes);
            hasher.update(bytes);
        }
    }
}

impl<T: Hashable + ?Sized> Hashable for &T {
    fn hash_into<A: Algorithm>(&self, hasher: &mut Hasher<A>) {
        (**self).hash_into(hasher);
    }
}

impl<T: Hashable + ?Sized> Hashable for Box<T> {
    fn hash_into<A: Algorithm>(&self, hasher: &mut Hasher<A>) {
        (**self).hash_into(hasher);
    }
}

macro_rules! impl_hashable_for_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl Hashable for $t {
                fn hash_into<A: Algorithm>(&self, hasher: &mut Hasher<A>) {
                    hasher.update(&self.to_be_bytes());
                }
            }
        )*
    };
}

impl_hashable_for_int!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);
