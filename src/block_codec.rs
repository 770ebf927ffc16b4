//! Block codec: payload ↔ fixed 8-byte block conversion.
//!
//! Splits an arbitrary-length byte payload into consecutive 8-byte blocks,
//! zero-padding the final block on the right, and converts blocks to and
//! from their two big-endian 32-bit halves `(L, R)`.
//!
//! The zero padding is not self-describing: `join` of a padded `split`
//! cannot distinguish padding from genuine trailing zero bytes in the
//! original payload. No length prefix or padding marker is recorded.

/// Block size in bytes.
pub const BLOCK_SIZE: usize = 8;

/// Splits a payload into consecutive 8-byte blocks.
///
/// The last block, if shorter than 8 bytes, is right-padded with zero
/// bytes. An empty payload yields an empty vector.
///
/// # Parameters
/// - `payload`: Byte slice of any length.
///
/// # Returns
/// A `Vec` of `ceil(payload.len() / 8)` blocks.
pub fn split(payload: &[u8]) -> Vec<[u8; BLOCK_SIZE]> {
    let mut blocks = Vec::with_capacity(payload.len().div_ceil(BLOCK_SIZE));
    for chunk in payload.chunks(BLOCK_SIZE) {
        let mut block = [0u8; BLOCK_SIZE];
        block[..chunk.len()].copy_from_slice(chunk);
        blocks.push(block);
    }
    blocks
}

/// Concatenates blocks back into a flat byte vector.
///
/// Any zero padding added by [`split`] remains in the output; the codec
/// records no original length, so it cannot be stripped here.
///
/// # Parameters
/// - `blocks`: Slice of 8-byte blocks.
///
/// # Returns
/// A `Vec<u8>` of `blocks.len() * 8` bytes.
pub fn join(blocks: &[[u8; BLOCK_SIZE]]) -> Vec<u8> {
    let mut output = Vec::with_capacity(blocks.len() * BLOCK_SIZE);
    for block in blocks {
        output.extend_from_slice(block);
    }
    output
}

/// Converts an 8-byte block to its two big-endian 32-bit halves `(L, R)`.
///
/// # Parameters
/// - `block`: The 8-byte block.
///
/// # Returns
/// `(L, R)` where `L` is built from bytes 0..4 and `R` from bytes 4..8.
pub fn block_to_words(block: &[u8; BLOCK_SIZE]) -> (u32, u32) {
    let l = u32::from_be_bytes([block[0], block[1], block[2], block[3]]);
    let r = u32::from_be_bytes([block[4], block[5], block[6], block[7]]);
    (l, r)
}

/// Converts two 32-bit halves `(L, R)` back to an 8-byte big-endian block.
///
/// # Parameters
/// - `l`: The left half (bytes 0..4).
/// - `r`: The right half (bytes 4..8).
///
/// # Returns
/// The 8-byte block `L || R`.
pub fn words_to_block(l: u32, r: u32) -> [u8; BLOCK_SIZE] {
    let mut block = [0u8; BLOCK_SIZE];
    block[..4].copy_from_slice(&l.to_be_bytes());
    block[4..].copy_from_slice(&r.to_be_bytes());
    block
}
