//! Hash-driven key schedule.
//!
//! Round keys are not expanded from the master key alone: each plaintext
//! block is hashed with SHA-256 and the digest, XORed with the master key
//! words, supplies the per-round key material. Even rounds draw from the
//! first 128-bit half of the digest, odd rounds from the second half.
//!
//! Because the digest is computed over the *plaintext* block, decryption
//! cannot re-derive these values from the ciphertext; it must read them
//! back from the [`RoundKeyLedger`](crate::RoundKeyLedger) recorded at
//! encryption time.

use sha2::{Digest, Sha256};

use crate::block_codec::BLOCK_SIZE;

/// The four 32-bit values mixed into one Feistel round.
pub type RoundKeySegment = [u32; 4];

/// Per-block round-key material derived from one SHA-256 digest.
///
/// Holds the two XORed digest halves so the 32-round loop performs a
/// single hash per block. The same `(block, key)` pair always produces
/// the same schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSchedule {
    even: RoundKeySegment,
    odd: RoundKeySegment,
}

impl BlockSchedule {
    /// Derives the round-key material for one plaintext block.
    ///
    /// Computes `SHA-256(plaintext_block)`, splits the digest into two
    /// 128-bit halves of four big-endian 32-bit segments each, and XORs
    /// every segment with the corresponding master key word `k0..k3`.
    ///
    /// # Parameters
    /// - `plaintext_block`: The original 8-byte plaintext block (not the
    ///   evolving cipher state).
    /// - `key_words`: The four big-endian master key words.
    pub fn derive(plaintext_block: &[u8; BLOCK_SIZE], key_words: &[u32; 4]) -> Self {
        let digest = Sha256::digest(plaintext_block);
        BlockSchedule {
            even: xor_half(&digest[..16], key_words),
            odd: xor_half(&digest[16..], key_words),
        }
    }

    /// Returns the round-key segment for the given round.
    ///
    /// Even rounds use the first digest half, odd rounds the second.
    ///
    /// # Parameters
    /// - `round`: Round index (0..32).
    pub fn round_key(&self, round: usize) -> RoundKeySegment {
        if round % 2 == 0 {
            self.even
        } else {
            self.odd
        }
    }
}

/// Splits a 16-byte digest half into four big-endian 32-bit segments and
/// XORs each with the matching master key word.
fn xor_half(half: &[u8], key_words: &[u32; 4]) -> RoundKeySegment {
    let mut segment = [0u32; 4];
    for (i, seg) in segment.iter_mut().enumerate() {
        let word = u32::from_be_bytes([
            half[i * 4],
            half[i * 4 + 1],
            half[i * 4 + 2],
            half[i * 4 + 3],
        ]);
        *seg = word ^ key_words[i];
    }
    segment
}

/// Derives the round-key segment for a single `(block, key, round)` triple.
///
/// Convenience wrapper over [`BlockSchedule`]; hashing happens on every
/// call, so prefer building a `BlockSchedule` when iterating all 32 rounds.
pub fn derive_round_key(
    plaintext_block: &[u8; BLOCK_SIZE],
    key_words: &[u32; 4],
    round: usize,
) -> RoundKeySegment {
    BlockSchedule::derive(plaintext_block, key_words).round_key(round)
}
