//! Enhanced TEA block cipher with plaintext-dependent round keys.
//!
//! Enhanced TEA is a TEA-variant Feistel cipher operating on 64-bit blocks
//! (two `u32` halves) whose round keys are derived dynamically from a
//! SHA-256 hash of each plaintext block XORed with the 128-bit master key,
//! rather than from a static key schedule.
//!
//! Hashing the *plaintext* breaks the usual symmetry between encryption
//! and decryption: the ciphertext alone cannot regenerate the round keys.
//! Encryption therefore records every round-key segment in a
//! [`RoundKeyLedger`], and decryption consumes that ledger as an explicit
//! read-only input. The ledger must travel alongside the ciphertext; a
//! mismatched ledger decrypts to silently wrong plaintext, since the
//! design carries no integrity check.
//!
//! # Architecture
//!
//! ```text
//! block_codec   (8-byte blocks, zero-padded; big-endian word conversion)
//!     ↓
//! key_schedule  (SHA-256(plaintext block) ⊕ master key → round keys)
//!     ↓
//! feistel       (32-round forward/inverse transform, wrapping u32)
//!     ↓
//! EnhancedTea   (orchestrator — multi-block encrypt/decrypt + ledger)
//!     ↓
//! analysis      (avalanche effect, differential cryptanalysis)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt a message:
//!
//! ```
//! use enhanced_tea::EnhancedTea;
//!
//! let cipher = EnhancedTea::new(b"0123456789abcdef").unwrap();
//!
//! let (ciphertext, ledger) = cipher.encrypt(b"Hello, this is a test");
//! assert_eq!(ciphertext.len() % 8, 0);
//! assert_eq!(ledger.len(), ledger.num_blocks() * 32);
//!
//! let recovered = cipher.decrypt(&ciphertext, &ledger).unwrap();
//! assert_eq!(&recovered[..21], b"Hello, this is a test");
//! ```
//!
//! Measure the avalanche effect of a single-bit flip:
//!
//! ```
//! use enhanced_tea::{avalanche_test, EnhancedTea};
//!
//! let cipher = EnhancedTea::new(b"0123456789abcdef").unwrap();
//! let result = avalanche_test(&cipher, b"AvalTest", 3).unwrap();
//! assert!(result.flipped_bits <= 64);
//! ```
//!
//! This crate reproduces a research cipher bit-for-bit for analysis; it is
//! not side-channel hardened and makes no real-world security claim.

#![deny(clippy::all)]

pub mod analysis;
pub mod block_codec;
pub mod error;
pub mod feistel;
pub mod key_schedule;
pub mod ledger;

mod cipher;

pub use analysis::{
    avalanche_test, differential_test, differential_test_with_rng, AvalancheResult,
    DifferentialTable,
};
pub use cipher::{EnhancedTea, KEY_SIZE};
pub use error::EnhancedTeaError;
pub use key_schedule::RoundKeySegment;
pub use ledger::RoundKeyLedger;
