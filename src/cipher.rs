//! Cipher session: orchestrates the block codec, hash-driven key schedule,
//! and Feistel engine across a multi-block message.
//!
//! Encryption returns the ciphertext together with the full round-key
//! ledger; the ledger is the only way to invert the transform, since the
//! round keys depend on the plaintext. Decryption takes the ledger as an
//! explicit read-only input.

use crate::block_codec::{self, BLOCK_SIZE};
use crate::error::EnhancedTeaError;
use crate::feistel::{self, NUM_ROUNDS};
use crate::ledger::RoundKeyLedger;

/// Key length in bytes.
pub const KEY_SIZE: usize = 16;

/// Enhanced TEA cipher session bound to one 16-byte master key.
///
/// The key is validated once at construction and immutable afterwards.
/// Sessions hold no per-message state, so one session may encrypt and
/// decrypt any number of independent messages; each call owns its own
/// ledger and accumulators.
///
/// # Examples
///
/// ```
/// use enhanced_tea::EnhancedTea;
///
/// let cipher = EnhancedTea::new(b"0123456789abcdef").unwrap();
/// let (ciphertext, ledger) = cipher.encrypt(b"attack at dawn");
/// let recovered = cipher.decrypt(&ciphertext, &ledger).unwrap();
/// // Output keeps the zero padding of the final block.
/// assert_eq!(&recovered[..14], b"attack at dawn");
/// ```
pub struct EnhancedTea {
    key_words: [u32; 4],
}

impl EnhancedTea {
    /// Creates a session from a 16-byte master key.
    ///
    /// The key is interpreted as four big-endian 32-bit words `k0..k3`.
    ///
    /// # Parameters
    /// - `key`: Exactly 16 bytes.
    ///
    /// # Errors
    /// Returns [`EnhancedTeaError::InvalidKeyLength`] if `key.len() != 16`.
    ///
    /// # Examples
    ///
    /// ```
    /// use enhanced_tea::EnhancedTea;
    ///
    /// assert!(EnhancedTea::new(b"0123456789abcdef").is_ok());
    /// assert!(EnhancedTea::new(b"too short").is_err());
    /// ```
    pub fn new(key: &[u8]) -> Result<Self, EnhancedTeaError> {
        if key.len() != KEY_SIZE {
            return Err(EnhancedTeaError::InvalidKeyLength);
        }
        let mut key_words = [0u32; 4];
        for (i, word) in key_words.iter_mut().enumerate() {
            *word = u32::from_be_bytes([
                key[i * 4],
                key[i * 4 + 1],
                key[i * 4 + 2],
                key[i * 4 + 3],
            ]);
        }
        Ok(EnhancedTea { key_words })
    }

    /// Returns the four big-endian master key words.
    pub fn key_words(&self) -> [u32; 4] {
        self.key_words
    }

    /// Encrypts a payload of any length.
    ///
    /// The payload is split into 8-byte blocks (the final block
    /// zero-padded) and each block runs the 32-round forward pass. The
    /// returned ledger records all round-key segments in block order and
    /// is required, verbatim, to decrypt.
    ///
    /// # Parameters
    /// - `payload`: Plaintext bytes; an empty payload yields empty
    ///   ciphertext and an empty ledger.
    ///
    /// # Returns
    /// `(ciphertext, ledger)` — ciphertext length is `8 × num_blocks`,
    /// ledger length `32 × num_blocks`.
    pub fn encrypt(&self, payload: &[u8]) -> (Vec<u8>, RoundKeyLedger) {
        let blocks = block_codec::split(payload);
        let mut ledger = RoundKeyLedger::with_block_capacity(blocks.len());
        let mut ciphertext = Vec::with_capacity(blocks.len() * BLOCK_SIZE);

        for block in &blocks {
            let encrypted = feistel::encrypt_block(block, &self.key_words, &mut ledger);
            ciphertext.extend_from_slice(&encrypted);
        }

        (ciphertext, ledger)
    }

    /// Decrypts a ciphertext using the ledger recorded at encryption time.
    ///
    /// Block `i` is inverted with ledger segments `[i*32 .. (i+1)*32]`.
    /// The output includes any zero padding added to the final block; the
    /// codec records no original length, so padding cannot be stripped.
    ///
    /// A ledger of the right length but from a different `encrypt` call is
    /// not detectable: it decrypts to silently wrong plaintext.
    ///
    /// # Parameters
    /// - `ciphertext`: Length must be a multiple of 8.
    /// - `ledger`: Must hold exactly 32 segments per ciphertext block.
    ///
    /// # Errors
    /// - [`EnhancedTeaError::InvalidCiphertextLength`] if
    ///   `ciphertext.len() % 8 != 0`.
    /// - [`EnhancedTeaError::LedgerLengthMismatch`] if
    ///   `ledger.len() != 32 × num_blocks`.
    pub fn decrypt(
        &self,
        ciphertext: &[u8],
        ledger: &RoundKeyLedger,
    ) -> Result<Vec<u8>, EnhancedTeaError> {
        if !ciphertext.len().is_multiple_of(BLOCK_SIZE) {
            return Err(EnhancedTeaError::InvalidCiphertextLength);
        }
        let num_blocks = ciphertext.len() / BLOCK_SIZE;
        if ledger.len() != num_blocks * NUM_ROUNDS {
            return Err(EnhancedTeaError::LedgerLengthMismatch);
        }

        let mut plaintext = Vec::with_capacity(ciphertext.len());
        for (index, chunk) in ciphertext.chunks_exact(BLOCK_SIZE).enumerate() {
            let mut block = [0u8; BLOCK_SIZE];
            block.copy_from_slice(chunk);
            // Length was validated above, so every block slice exists.
            let round_keys = ledger
                .block(index)
                .ok_or(EnhancedTeaError::LedgerLengthMismatch)?;
            let decrypted = feistel::decrypt_block(&block, round_keys);
            plaintext.extend_from_slice(&decrypted);
        }

        Ok(plaintext)
    }
}
