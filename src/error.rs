//! Error types for the Enhanced TEA library.

use std::fmt;

/// Errors produced by the Enhanced TEA library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnhancedTeaError {
    /// Key length is not exactly 16 bytes.
    InvalidKeyLength,
    /// Ciphertext length is not a multiple of the 8-byte block size.
    InvalidCiphertextLength,
    /// Ledger length does not equal 32 segments per ciphertext block.
    LedgerLengthMismatch,
    /// Bit position is outside the valid range.
    BitPositionOutOfRange,
}

impl fmt::Display for EnhancedTeaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnhancedTeaError::InvalidKeyLength => {
                write!(f, "Key must be exactly 16 bytes long")
            }
            EnhancedTeaError::InvalidCiphertextLength => {
                write!(f, "Ciphertext length is not a multiple of 8 bytes")
            }
            EnhancedTeaError::LedgerLengthMismatch => {
                write!(f, "Ledger must contain 32 round-key segments per block")
            }
            EnhancedTeaError::BitPositionOutOfRange => {
                write!(f, "Bit position is outside the valid range")
            }
        }
    }
}

impl std::error::Error for EnhancedTeaError {}
