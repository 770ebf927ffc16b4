//! Round-key ledger: the ordered record of every round-key segment used
//! across all blocks of one message.
//!
//! The key schedule hashes the plaintext, so the ciphertext alone is not
//! enough to invert the transform. Encryption appends all 32 segments per
//! block to a ledger; decryption reads the exact per-block sub-slice back.
//! The ledger must be transmitted or stored alongside the ciphertext, and
//! carries no provenance information: a ledger from a different message
//! decrypts to silently wrong plaintext.

use crate::feistel::NUM_ROUNDS;
use crate::key_schedule::RoundKeySegment;

/// Ordered sequence of round-key segments, 32 per encrypted block,
/// indexed `[block * 32 + round]`.
///
/// Created empty by an encrypting session and grown monotonically by 32
/// entries per block; consumed read-only during decryption.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundKeyLedger {
    segments: Vec<RoundKeySegment>,
}

impl RoundKeyLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        RoundKeyLedger {
            segments: Vec::new(),
        }
    }

    /// Creates an empty ledger with capacity for `num_blocks` blocks.
    pub(crate) fn with_block_capacity(num_blocks: usize) -> Self {
        RoundKeyLedger {
            segments: Vec::with_capacity(num_blocks * NUM_ROUNDS),
        }
    }

    /// Appends one round-key segment. Encryption-side only.
    pub(crate) fn push(&mut self, segment: RoundKeySegment) {
        self.segments.push(segment);
    }

    /// Returns the total number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if the ledger holds no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of complete 32-segment blocks recorded.
    pub fn num_blocks(&self) -> usize {
        self.segments.len() / NUM_ROUNDS
    }

    /// Returns the 32 segments recorded for block `index`, in forward
    /// round order, or `None` if the block is out of range.
    ///
    /// # Parameters
    /// - `index`: Zero-based block index.
    pub fn block(&self, index: usize) -> Option<&[RoundKeySegment]> {
        let start = index.checked_mul(NUM_ROUNDS)?;
        let end = start.checked_add(NUM_ROUNDS)?;
        self.segments.get(start..end)
    }

    /// Returns all segments as a flat slice.
    pub fn segments(&self) -> &[RoundKeySegment] {
        &self.segments
    }
}
