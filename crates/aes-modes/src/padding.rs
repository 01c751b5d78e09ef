//! Zero-byte padding.
//!
//! The padding is not reversible: a message that already ends in zero bytes
//! cannot be told apart from its padded form. Callers that know their
//! plaintext never ends in `0x00` (text, for instance) can use
//! [`strip_zero_padding`]; anyone else must carry the length separately.

use aes_core::BLOCK_LEN;

/// Appends zero bytes up to the next multiple of the block size.
///
/// An empty message stays empty.
pub fn zero_pad(message: &[u8]) -> Vec<u8> {
    let padded_len = message.len().div_ceil(BLOCK_LEN) * BLOCK_LEN;
    let mut out = Vec::with_capacity(padded_len);
    out.extend_from_slice(message);
    out.resize(padded_len, 0);
    out
}

/// Drops every trailing zero byte.
pub fn strip_zero_padding(plaintext: &[u8]) -> &[u8] {
    let end = plaintext
        .iter()
        .rposition(|&b| b != 0)
        .map_or(0, |last| last + 1);
    &plaintext[..end]
}
