//! Avalanche-effect measurement.
//!
//! Flips a single plaintext bit and counts how many of the 64 ciphertext
//! bits change. A strong diffusion network flips roughly half of them.

use crate::block_codec::{self, BLOCK_SIZE};
use crate::cipher::EnhancedTea;
use crate::error::EnhancedTeaError;
use crate::feistel;
use crate::ledger::RoundKeyLedger;

/// Result of a single avalanche measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AvalancheResult {
    /// Number of ciphertext bits that differ (0..=64).
    pub flipped_bits: u32,
    /// `flipped_bits / 64 * 100`.
    pub percentage: f64,
}

/// Measures the avalanche effect of flipping one plaintext bit.
///
/// The plaintext is padded with zero bytes to 8 bytes if shorter; only
/// the first 8 bytes participate. Bit `bit_position` addresses byte
/// `bit_position / 8`, bit `bit_position % 8` within that byte
/// (LSB-first). Both the original and the modified block are encrypted
/// independently — each gets its own plaintext-derived key schedule —
/// and the Hamming distance between the two ciphertext blocks is
/// counted over all 64 bits.
///
/// # Parameters
/// - `cipher`: The cipher session supplying the master key.
/// - `plaintext_block`: Block to measure; padded to 8 bytes if shorter.
/// - `bit_position`: Bit to flip, `0..=63`.
///
/// # Errors
/// Returns [`EnhancedTeaError::BitPositionOutOfRange`] if
/// `bit_position > 63`.
///
/// # Examples
///
/// ```
/// use enhanced_tea::{avalanche_test, EnhancedTea};
///
/// let cipher = EnhancedTea::new(b"0123456789abcdef").unwrap();
/// let result = avalanche_test(&cipher, b"AvalTest", 3).unwrap();
/// assert!(result.flipped_bits <= 64);
/// ```
pub fn avalanche_test(
    cipher: &EnhancedTea,
    plaintext_block: &[u8],
    bit_position: usize,
) -> Result<AvalancheResult, EnhancedTeaError> {
    if bit_position >= BLOCK_SIZE * 8 {
        return Err(EnhancedTeaError::BitPositionOutOfRange);
    }

    let mut block = [0u8; BLOCK_SIZE];
    let used = plaintext_block.len().min(BLOCK_SIZE);
    block[..used].copy_from_slice(&plaintext_block[..used]);

    let mut modified = block;
    modified[bit_position / 8] ^= 1 << (bit_position % 8);

    let key_words = cipher.key_words();
    let mut ledger = RoundKeyLedger::new();
    let original_ct = feistel::encrypt_block(&block, &key_words, &mut ledger);
    let mut modified_ledger = RoundKeyLedger::new();
    let modified_ct = feistel::encrypt_block(&modified, &key_words, &mut modified_ledger);

    let (l1, r1) = block_codec::block_to_words(&original_ct);
    let (l2, r2) = block_codec::block_to_words(&modified_ct);
    let flipped_bits = (l1 ^ l2).count_ones() + (r1 ^ r2).count_ones();

    Ok(AvalancheResult {
        flipped_bits,
        percentage: f64::from(flipped_bits) / 64.0 * 100.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cipher() -> EnhancedTea {
        EnhancedTea::new(b"0123456789abcdef").unwrap()
    }

    /// Frozen measurement: block b"AvalTest", bit 3 flips exactly 30 of
    /// 64 ciphertext bits under key b"0123456789abcdef".
    #[test]
    fn test_frozen_avalanche_count() {
        let result = avalanche_test(&cipher(), b"AvalTest", 3).unwrap();
        assert_eq!(result.flipped_bits, 30);
        assert!((result.percentage - 46.875).abs() < 1e-9);
    }

    #[test]
    fn test_diffusion_sanity_band() {
        // Diffusion target is ~50%; allow a generous band around it.
        let result = avalanche_test(&cipher(), b"abcdefgh", 3).unwrap();
        assert!(
            (24..=40).contains(&result.flipped_bits),
            "flipped {} bits",
            result.flipped_bits
        );
    }

    #[test]
    fn test_all_bit_positions_valid() {
        for bit in 0..64 {
            let result = avalanche_test(&cipher(), b"AvalTest", bit).unwrap();
            // A flipped input bit changes the schedule, so ciphertexts
            // cannot collide into zero distance in practice.
            assert!(result.flipped_bits > 0 && result.flipped_bits <= 64);
        }
    }

    #[test]
    fn test_bit_position_out_of_range() {
        assert_eq!(
            avalanche_test(&cipher(), b"AvalTest", 64).err(),
            Some(EnhancedTeaError::BitPositionOutOfRange)
        );
    }

    #[test]
    fn test_short_plaintext_padded() {
        // A 3-byte plaintext is padded with zeros; flipping a bit in the
        // padded region still measures cleanly.
        let result = avalanche_test(&cipher(), b"abc", 60).unwrap();
        assert!(result.flipped_bits <= 64);
    }

    #[test]
    fn test_percentage_matches_count() {
        let result = avalanche_test(&cipher(), b"AvalTest", 17).unwrap();
        let expected = f64::from(result.flipped_bits) / 64.0 * 100.0;
        assert!((result.percentage - expected).abs() < 1e-9);
    }
}
