//! Key types for AES-128, AES-192 and AES-256.

use thiserror::Error;

use crate::block::Block;

/// Raised when key material is not 16, 24 or 32 bytes long.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("invalid AES key length: {0} bytes (expected 16, 24 or 32)")]
pub struct InvalidKeyLength(pub usize);

/// The three supported key sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeySize {
    /// 128-bit key, 10 rounds.
    Aes128,
    /// 192-bit key, 12 rounds.
    Aes192,
    /// 256-bit key, 14 rounds.
    Aes256,
}

impl KeySize {
    /// Maps a byte length onto a key size.
    pub fn from_len(len: usize) -> Result<Self, InvalidKeyLength> {
        match len {
            16 => Ok(Self::Aes128),
            24 => Ok(Self::Aes192),
            32 => Ok(Self::Aes256),
            other => Err(InvalidKeyLength(other)),
        }
    }

    /// Key length in bytes.
    pub const fn byte_len(self) -> usize {
        match self {
            Self::Aes128 => 16,
            Self::Aes192 => 24,
            Self::Aes256 => 32,
        }
    }

    /// Key length in 32-bit words (`Nk`).
    pub const fn nk(self) -> usize {
        self.byte_len() / 4
    }

    /// Number of rounds (`Nr = Nk + 6`).
    pub const fn rounds(self) -> usize {
        self.nk() + 6
    }
}

/// AES key of any supported size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AesKey {
    bytes: [u8; 32],
    size: KeySize,
}

impl AesKey {
    /// Returns the key size.
    pub fn size(&self) -> KeySize {
        self.size
    }

    /// Returns the raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.size.byte_len()]
    }
}

impl TryFrom<&[u8]> for AesKey {
    type Error = InvalidKeyLength;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let size = KeySize::from_len(value.len())?;
        let mut bytes = [0u8; 32];
        bytes[..value.len()].copy_from_slice(value);
        Ok(Self { bytes, size })
    }
}

macro_rules! impl_from_array {
    ($len:literal, $size:expr) => {
        impl From<[u8; $len]> for AesKey {
            fn from(value: [u8; $len]) -> Self {
                let mut bytes = [0u8; 32];
                bytes[..$len].copy_from_slice(&value);
                Self { bytes, size: $size }
            }
        }
    };
}

impl_from_array!(16, KeySize::Aes128);
impl_from_array!(24, KeySize::Aes192);
impl_from_array!(32, KeySize::Aes256);

/// Largest schedule: 15 round keys for AES-256.
pub(crate) const MAX_ROUND_KEYS: usize = 15;

/// Expanded round keys, `rounds() + 1` entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKeys {
    keys: [Block; MAX_ROUND_KEYS],
    rounds: usize,
}

impl RoundKeys {
    pub(crate) fn new(keys: [Block; MAX_ROUND_KEYS], rounds: usize) -> Self {
        Self { keys, rounds }
    }

    /// Returns the round key at the requested index (`0..=rounds()`).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.keys[..=self.rounds][round]
    }

    /// Number of rounds (`Nr`).
    #[inline]
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Iterates the round keys in order.
    pub fn iter(&self) -> impl Iterator<Item = &Block> + '_ {
        self.keys[..=self.rounds].iter()
    }
}
