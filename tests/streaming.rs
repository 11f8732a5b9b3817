use std::fmt::Debug;

use mdhash::hash::{
    Algorithm, HashError, Hasher, Ripemd160, Sha224, Sha256, Sha384, Sha512, Sha512_224,
    Sha512_256, hash, sha224, sha256, sha384, sha512,
};
use mdhash::primitives::Number;
use mdhash::primitives::ops::ByteOrder;

/// Deterministic test data (xorshift).
fn data(len: usize) -> Vec<u8> {
    let mut x = 0x2545_F491_4F6C_DD1Du64;

    (0..len)
        .map(|_| {
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            x as u8
        })
        .collect()
}

fn check_every_split<A: Algorithm>()
where
    A::Output: Debug,
{
    let msg = data(300);
    let expected = hash::<A, _>(&msg[..]);

    for split in 0..=msg.len() {
        let (head, tail) = msg.split_at(split);

        let mut hasher = Hasher::<A>::new();
        hasher.update(head).update(tail);

        assert_eq!(hasher.digest(), expected, "{} split at {}", A::NAME, split);
    }
}

fn check_chunk_sizes<A: Algorithm>()
where
    A::Output: Debug,
{
    let msg = data(1000);
    let expected = hash::<A, _>(&msg[..]);

    for size in [1, 3, 7, 55, 63, 64, 65, 111, 127, 128, 129, 500] {
        let mut hasher = Hasher::<A>::new();

        for chunk in msg.chunks(size) {
            hasher.update(chunk);
        }

        assert_eq!(hasher.total_bytes(), msg.len() as u128);
        assert_eq!(hasher.digest(), expected, "{} chunks of {}", A::NAME, size);
    }
}

// -------------------------------------------------------
// 1. STREAMING EQUIVALENCE
// -------------------------------------------------------

#[test]
fn every_split_point() {
    check_every_split::<Sha224>();
    check_every_split::<Sha256>();
    check_every_split::<Sha384>();
    check_every_split::<Sha512>();
    check_every_split::<Sha512_224>();
    check_every_split::<Sha512_256>();
    check_every_split::<Ripemd160>();
}

#[test]
fn fixed_chunk_sizes() {
    check_chunk_sizes::<Sha224>();
    check_chunk_sizes::<Sha256>();
    check_chunk_sizes::<Sha384>();
    check_chunk_sizes::<Sha512>();
    check_chunk_sizes::<Sha512_224>();
    check_chunk_sizes::<Sha512_256>();
    check_chunk_sizes::<Ripemd160>();
}

#[test]
fn empty_updates_are_neutral() {
    let mut hasher = Hasher::<Sha256>::new();
    hasher.update(b"").update(b"abc").update(b"").update(&[]);

    assert_eq!(hasher.digest(), sha256(b"abc"));
}

// -------------------------------------------------------
// 2. FINALIZATION
// -------------------------------------------------------

#[test]
fn digest_is_idempotent() {
    let mut hasher = Hasher::<Sha512>::new();
    hasher.update(b"abc");

    assert!(!hasher.is_finalized());

    let first = hasher.digest();
    let second = hasher.digest();

    assert!(hasher.is_finalized());
    assert_eq!(first, second);
}

#[test]
fn try_update_after_digest_is_rejected() {
    let mut hasher = Hasher::<Sha256>::new();
    hasher.update(b"abc");

    let digest = hasher.digest();

    assert_eq!(hasher.try_update(b"more").err(), Some(HashError::Finalized));
    assert_eq!(hasher.total_bytes(), 3);
    assert_eq!(hasher.digest(), digest);
}

#[test]
#[should_panic(expected = "hasher already finalized")]
fn update_after_digest_panics() {
    let mut hasher = Hasher::<Sha256>::new();
    hasher.digest();

    hasher.update(b"too late");
}

#[test]
fn clone_forks_the_stream() {
    let mut hasher = Hasher::<Sha256>::new();
    hasher.update(b"ab");

    let mut fork = hasher.clone();
    fork.update(b"d");
    hasher.update(b"c");

    assert_eq!(hasher.digest(), sha256(b"abc"));
    assert_eq!(fork.digest(), sha256(b"abd"));
}

#[test]
fn debug_output_names_the_algorithm() {
    let mut hasher = Hasher::<Ripemd160>::new();
    hasher.update(b"abc");

    let text = format!("{hasher:?}");

    assert!(text.contains("RIPEMD-160"));
    assert!(text.contains("offset: 3"));
}

#[test]
fn error_display() {
    assert_eq!(HashError::Finalized.to_string(), "hasher already finalized");
}

// -------------------------------------------------------
// 3. SEED INDEPENDENCE
// -------------------------------------------------------

/// SHA-256 compression seeded with SHA-224's initial state, returning the
/// full 256-bit state.
struct Sha224FullState;

impl Algorithm for Sha224FullState {
    type Word = u32;
    type State = Number<8, u32>;
    type Block = Number<64>;
    type Output = Number<32>;

    const NAME: &'static str = "SHA-224 (full state)";
    const ORDER: ByteOrder = ByteOrder::Big;
    const LENGTH_BYTES: usize = 8;
    const SEED: Self::State = Number::from_words([
        0xC1059ED8, 0x367CD507, 0x3070DD17, 0xF70E5939, 0xFFC00B31, 0x68581511, 0x64F98FA7,
        0xBEFA4FA4,
    ]);

    fn compress(state: &mut Self::State, block: &Self::Block) {
        Sha256::compress(state, block);
    }
}

#[test]
fn sha224_is_a_prefix_of_its_own_state() {
    for len in [0, 3, 55, 56, 64, 200] {
        let msg = data(len);

        let full = hash::<Sha224FullState, _>(&msg[..]);
        let short = sha224(&msg);

        assert_eq!(short.as_bytes(), &full.as_bytes()[..28]);
        assert_ne!(short.as_bytes(), &sha256(&msg).as_bytes()[..28]);
    }
}

// -------------------------------------------------------
// 4. STATES WIDER THAN 512 BITS
// -------------------------------------------------------

/// Two SHA-512 lanes over the same blocks, seeded with the SHA-512 and
/// SHA-384 initial states. The full 1024-bit state is the digest.
struct DoubleLane;

impl Algorithm for DoubleLane {
    type Word = u64;
    type State = Number<16, u64>;
    type Block = Number<128>;
    type Output = Number<128>;

    const NAME: &'static str = "SHA-512 x2";
    const ORDER: ByteOrder = ByteOrder::Big;
    const LENGTH_BYTES: usize = 16;
    const SEED: Self::State = Number::from_words([
        0x6A09E667F3BCC908, 0xBB67AE8584CAA73B, 0x3C6EF372FE94F82B, 0xA54FF53A5F1D36F1,
        0x510E527FADE682D1, 0x9B05688C2B3E6C1F, 0x1F83D9ABFB41BD6B, 0x5BE0CD19137E2179,
        0xCBBB9D5DC1059ED8, 0x629A292A367CD507, 0x9159015A3070DD17, 0x152FECD8F70E5939,
        0x67332667FFC00B31, 0x8EB44A8768581511, 0xDB0C2E0D64F98FA7, 0x47B5481DBEFA4FA4,
    ]);

    fn compress(state: &mut Self::State, block: &Self::Block) {
        for lane in state.words_mut().chunks_exact_mut(8) {
            let mut half = Number::<8, u64>::from_slice(lane);
            Sha512::compress(&mut half, block);
            lane.copy_from_slice(half.words());
        }
    }
}

#[test]
fn wide_state_serializes_in_full() {
    for len in [0, 3, 111, 112, 128, 300] {
        let msg = data(len);

        let mut hasher = Hasher::<DoubleLane>::new();
        hasher.update(&msg);
        let digest = hasher.digest();

        assert_eq!(&digest.as_bytes()[..64], sha512(&msg).as_bytes());
        assert_eq!(&digest.as_bytes()[64..112], sha384(&msg).as_bytes());
    }
}

/// SHA-256 state returned through a digest wider than the state.
struct Padded;

impl Algorithm for Padded {
    type Word = u32;
    type State = Number<8, u32>;
    type Block = Number<64>;
    type Output = Number<40>;

    const NAME: &'static str = "SHA-256 padded";
    const ORDER: ByteOrder = ByteOrder::Big;
    const LENGTH_BYTES: usize = 8;
    const SEED: Self::State = Sha256::SEED;

    fn compress(state: &mut Self::State, block: &Self::Block) {
        Sha256::compress(state, block);
    }
}

#[test]
fn output_wider_than_state_is_zero_extended() {
    let digest = hash::<Padded, _>(b"abc");

    assert_eq!(&digest.as_bytes()[..32], sha256(b"abc").as_bytes());
    assert_eq!(&digest.as_bytes()[32..], &[0u8; 8]);
}
