//! Streaming hash engine
//!
//! `Hasher<A>` implements the Merkle–Damgård skeleton shared by every
//! algorithm in the crate: it buffers input into fixed-size blocks, hands
//! full blocks to `A::compress`, and on finalization appends the `0x80`
//! marker, zero padding and the message length in bits.
//!
//! Feeding the same bytes in one call or in any number of smaller calls
//! produces the same digest.
//!
//! A hasher is either accumulating input or finalized. Once `digest` has
//! run, the state is frozen: `digest` keeps returning the same value and
//! further input is rejected (`try_update`) or panics (`update`).

use std::fmt::{self, Debug, Display, Formatter};

use zeroize::{Zeroize, Zeroizing};

use crate::hash::algorithm::Algorithm;
use crate::hash::hashable::Hashable;
use crate::primitives::{Word, Words};

/// Widest length field, and widest word, `Hasher` can serialize.
const MAX_FIELD_BYTES: usize = 16;

/// Errors returned by the checked hasher operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashError {
    /// Input was submitted after `digest` finalized the hasher.
    Finalized,
}

impl Display for HashError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            HashError::Finalized => f.write_str("hasher already finalized"),
        }
    }
}

impl std::error::Error for HashError {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Status {
    Accumulating,
    Finalized,
}

/// Incremental hasher for algorithm `A`.
///
/// The running state and the pending block are wiped when the hasher is
/// dropped.
pub struct Hasher<A: Algorithm> {
    state: Zeroizing<A::State>,
    block: Zeroizing<A::Block>,
    offset: usize,
    total: u128,
    status: Status,
}

impl<A: Algorithm> Hasher<A> {
    /// Creates a hasher seeded with the algorithm's initial state.
    ///
    /// Parameter sets the engine cannot pad do not compile: the length
    /// field must fit in 16 bytes and leave room for the `0x80` marker in a
    /// block.
    ///
    /// ```compile_fail
    /// use mdhash::hash::{Algorithm, Hasher};
    /// use mdhash::primitives::{Number, ops::ByteOrder};
    ///
    /// struct Cramped;
    ///
    /// impl Algorithm for Cramped {
    ///     type Word = u32;
    ///     type State = Number<1, u32>;
    ///     type Block = Number<8>;
    ///     type Output = Number<4>;
    ///
    ///     const NAME: &'static str = "cramped";
    ///     const ORDER: ByteOrder = ByteOrder::Big;
    ///     const LENGTH_BYTES: usize = 8;
    ///     const SEED: Self::State = Number::ZERO;
    ///
    ///     fn compress(_: &mut Self::State, _: &Self::Block) {}
    /// }
    ///
    /// let _ = Hasher::<Cramped>::new();
    /// ```
    pub fn new() -> Self {
        const {
            assert!(
                A::LENGTH_BYTES <= MAX_FIELD_BYTES,
                "length field wider than 128 bits"
            );
            assert!(
                A::LENGTH_BYTES < <A::Block as Words>::LEN,
                "block has no room for the padding marker"
            );
            assert!(
                <A::Word as Word>::BYTES <= MAX_FIELD_BYTES,
                "state word wider than 128 bits"
            );
        }

        Self {
            state: Zeroizing::new(A::SEED),
            block: Zeroizing::new(A::Block::default()),
            offset: 0,
            total: 0,
            status: Status::Accumulating,
        }
    }

    /// Appends `bytes` to the message.
    ///
    /// # Panics
    /// If the hasher was already finalized by `digest`.
    pub fn update(&mut self, bytes: &[u8]) -> &mut Self {
        if let Err(err) = self.try_update(bytes) {
            panic!("{}: {err}", A::NAME);
        }

        self
    }

    /// Appends `bytes` to the message.
    ///
    /// # Errors
    /// [`HashError::Finalized`] if `digest` already ran; the hasher is left
    /// untouched.
    pub fn try_update(&mut self, bytes: &[u8]) -> Result<&mut Self, HashError> {
        if self.is_finalized() {
            log::debug!("{}: rejecting {} bytes after digest", A::NAME, bytes.len());
            return Err(HashError::Finalized);
        }

        self.absorb(bytes);
        self.total = self.total.wrapping_add(bytes.len() as u128);

        Ok(self)
    }

    /// Appends the byte representation of `value`.
    ///
    /// # Panics
    /// If the hasher was already finalized by `digest`.
    pub fn feed<T: Hashable + ?Sized>(&mut self, value: &T) -> &mut Self {
        value.hash_into(self);
        self
    }

    /// Finalizes the message on first call and returns the digest.
    ///
    /// Later calls return the same digest.
    pub fn digest(&mut self) -> A::Output {
        if !self.is_finalized() {
            self.finalize();
        }

        self.output()
    }

    pub fn is_finalized(&self) -> bool {
        self.status == Status::Finalized
    }

    /// Total bytes submitted so far.
    pub fn total_bytes(&self) -> u128 {
        self.total
    }

    fn block_len(&self) -> usize {
        self.block.words().len()
    }

    /// Copies `bytes` into the block buffer, compressing every full block.
    fn absorb(&mut self, mut bytes: &[u8]) {
        loop {
            let capacity = self.block_len() - self.offset;

            if bytes.len() < capacity {
                break;
            }

            let (head, tail) = bytes.split_at(capacity);
            self.block.words_mut()[self.offset..].copy_from_slice(head);
            self.compress();

            bytes = tail;
        }

        let end = self.offset + bytes.len();
        self.block.words_mut()[self.offset..end].copy_from_slice(bytes);
        self.offset = end;
    }

    /// Appends `count` copies of `byte` without counting them as message.
    fn pad(&mut self, mut count: usize, byte: u8) {
        loop {
            let capacity = self.block_len() - self.offset;

            if count < capacity {
                break;
            }

            self.block.words_mut()[self.offset..].fill(byte);
            self.compress();

            count -= capacity;
        }

        let end = self.offset + count;
        self.block.words_mut()[self.offset..end].fill(byte);
        self.offset = end;
    }

    fn compress(&mut self) {
        A::compress(&mut *self.state, &*self.block);
        self.offset = 0;
    }

    fn finalize(&mut self) {
        log::trace!("{}: finalizing after {} bytes", A::NAME, self.total);

        let bits = self.total.wrapping_mul(8);
        let boundary = self.block_len() - A::LENGTH_BYTES;

        self.pad(1, 0x80);

        // No room left for the length field: close this block.
        if self.offset > boundary {
            let rest = self.block_len() - self.offset;
            self.pad(rest, 0);
        }

        self.pad(boundary - self.offset, 0);

        let mut length = [0u8; MAX_FIELD_BYTES];
        A::ORDER.write_length(bits, &mut length[..A::LENGTH_BYTES]);
        self.absorb(&length[..A::LENGTH_BYTES]);

        debug_assert_eq!(self.offset, 0);

        self.status = Status::Finalized;
    }

    /// Serializes the state in wire order, truncated to the output width.
    ///
    /// An output wider than the state keeps zero high bytes.
    fn output(&self) -> A::Output {
        let width = <A::Word as Word>::BYTES;

        let mut out = A::Output::default();
        let mut scratch = Zeroizing::new([0u8; MAX_FIELD_BYTES]);

        for (&word, chunk) in self.state.words().iter().zip(out.words_mut().chunks_mut(width)) {
            let bytes = &mut scratch[..width];
            A::ORDER.write(word, bytes);
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }

        out
    }
}

impl<A: Algorithm> Default for Hasher<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Algorithm> Clone for Hasher<A> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            block: self.block.clone(),
            offset: self.offset,
            total: self.total,
            status: self.status,
        }
    }
}

/// Never prints the state or the pending block.
impl<A: Algorithm> Debug for Hasher<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hasher")
            .field("algorithm", &A::NAME)
            .field("offset", &self.offset)
            .field("total", &self.total)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

impl<A: Algorithm> Drop for Hasher<A> {
    fn drop(&mut self) {
        self.offset.zeroize();
        self.total.zeroize();
    }
}
