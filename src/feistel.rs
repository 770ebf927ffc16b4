//! Feistel engine: the 32-round forward and inverse transforms.
//!
//! The diffusion network is TEA's, but the four values mixed into each
//! round come from the hash-driven schedule instead of a static key
//! expansion. All arithmetic is wrapping 32-bit; shifts are logical.
//!
//! The inverse pass performs no hashing at all. It is a pure arithmetic
//! inversion driven by the round-key segments recorded at encryption
//! time; handing it mismatched segments yields wrong plaintext with no
//! detectable error.

use crate::block_codec::{block_to_words, words_to_block, BLOCK_SIZE};
use crate::key_schedule::{BlockSchedule, RoundKeySegment};
use crate::ledger::RoundKeyLedger;

/// TEA round constant.
pub const DELTA: u32 = 0x9E37_79B9;

/// Number of Feistel rounds per block.
pub const NUM_ROUNDS: usize = 32;

/// Encrypts one 8-byte block, appending all 32 round-key segments to the
/// ledger in round order.
///
/// The schedule is derived from the original plaintext block, never from
/// the evolving `(L, R)` state.
///
/// # Parameters
/// - `block`: The padded 8-byte plaintext block.
/// - `key_words`: The four big-endian master key words.
/// - `ledger`: Ledger receiving this block's 32 segments.
///
/// # Returns
/// The 8-byte ciphertext block `L || R` in big-endian order.
pub fn encrypt_block(
    block: &[u8; BLOCK_SIZE],
    key_words: &[u32; 4],
    ledger: &mut RoundKeyLedger,
) -> [u8; BLOCK_SIZE] {
    let (mut l, mut r) = block_to_words(block);
    let schedule = BlockSchedule::derive(block, key_words);
    let mut sum: u32 = 0;

    for round in 0..NUM_ROUNDS {
        let seg = schedule.round_key(round);
        ledger.push(seg);

        sum = sum.wrapping_add(DELTA);
        l = l.wrapping_add(
            (r.wrapping_shl(4).wrapping_add(seg[0]))
                ^ r.wrapping_add(sum)
                ^ ((r >> 5).wrapping_add(seg[1])),
        );
        r = r.wrapping_add(
            (l.wrapping_shl(4).wrapping_add(seg[2]))
                ^ l.wrapping_add(sum)
                ^ ((l >> 5).wrapping_add(seg[3])),
        );
    }

    words_to_block(l, r)
}

/// Decrypts one 8-byte ciphertext block using the 32 segments recorded
/// for it, supplied in forward round order.
///
/// # Parameters
/// - `block`: The 8-byte ciphertext block.
/// - `round_keys`: Exactly [`NUM_ROUNDS`] segments from the ledger.
///
/// # Returns
/// The padded plaintext block that was encrypted.
///
/// # Panics
/// Panics if `round_keys.len() != NUM_ROUNDS`; callers validate the
/// ledger length before slicing.
pub fn decrypt_block(block: &[u8; BLOCK_SIZE], round_keys: &[RoundKeySegment]) -> [u8; BLOCK_SIZE] {
    assert_eq!(round_keys.len(), NUM_ROUNDS);

    let (mut l, mut r) = block_to_words(block);
    let mut sum: u32 = DELTA.wrapping_mul(NUM_ROUNDS as u32);

    for round in (0..NUM_ROUNDS).rev() {
        let seg = round_keys[round];

        r = r.wrapping_sub(
            (l.wrapping_shl(4).wrapping_add(seg[2]))
                ^ l.wrapping_add(sum)
                ^ ((l >> 5).wrapping_add(seg[3])),
        );
        l = l.wrapping_sub(
            (r.wrapping_shl(4).wrapping_add(seg[0]))
                ^ r.wrapping_add(sum)
                ^ ((r >> 5).wrapping_add(seg[1])),
        );
        sum = sum.wrapping_sub(DELTA);
    }

    words_to_block(l, r)
}
