//! Error type shared by the chaining layer.

use aes_core::InvalidKeyLength;
use thiserror::Error;

/// Failures surfaced by [`Cipher`](crate::Cipher).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// Key material was not 16, 24 or 32 bytes.
    #[error(transparent)]
    InvalidKeyLength(#[from] InvalidKeyLength),
    /// Ciphertext was empty or not a whole number of blocks.
    #[error("ciphertext length {length} is not a positive multiple of {multiple}")]
    InvalidCiphertextLength {
        /// Observed length (hex characters or bytes, depending on the entry point).
        length: usize,
        /// Required granularity.
        multiple: usize,
    },
    /// A character outside `[0-9a-fA-F]` in hex ciphertext.
    #[error("invalid hex digit {character:?} at index {index}")]
    InvalidHexDigit {
        /// The offending character.
        character: char,
        /// Byte offset within the hex string.
        index: usize,
    },
}

/// Result alias for chaining operations.
pub type Result<T> = core::result::Result<T, Error>;
