//! Hex serialization of ciphertext.

use aes_core::BLOCK_LEN;

use crate::error::{Error, Result};

/// Hex characters per block.
pub const HEX_BLOCK_LEN: usize = 2 * BLOCK_LEN;

/// Renders ciphertext bytes as lowercase hex.
pub fn encode(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Parses hex ciphertext, requiring a positive multiple of 32 characters.
///
/// Digits are checked before the length, so a stray non-hex character is
/// always reported as such.
pub fn decode_ciphertext(text: &str) -> Result<Vec<u8>> {
    if let Some((index, character)) = text.char_indices().find(|(_, c)| !c.is_ascii_hexdigit()) {
        return Err(Error::InvalidHexDigit { character, index });
    }
    // All ASCII from here on: byte length is character length.
    let length_error = || Error::InvalidCiphertextLength {
        length: text.len(),
        multiple: HEX_BLOCK_LEN,
    };
    if text.is_empty() || text.len() % HEX_BLOCK_LEN != 0 {
        return Err(length_error());
    }
    hex::decode(text).map_err(|_| length_error())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_is_lowercase() {
        assert_eq!(encode(&[0xab, 0xcd, 0x01]), "abcd01");
    }

    #[test]
    fn decode_accepts_mixed_case() {
        let text = "00112233445566778899AABBCCDDEEFF";
        let bytes = decode_ciphertext(text).expect("valid hex");
        assert_eq!(encode(&bytes), text.to_lowercase());
    }

    #[test]
    fn decode_rejects_bad_lengths() {
        for len in [0usize, 1, 31, 33, 48, 63] {
            let text = "0".repeat(len);
            assert_eq!(
                decode_ciphertext(&text),
                Err(Error::InvalidCiphertextLength {
                    length: len,
                    multiple: 32
                })
            );
        }
    }

    #[test]
    fn decode_reports_non_ascii_character_whole() {
        let text = format!("{}é", "0".repeat(31));
        assert_eq!(text.chars().count(), 32);
        assert_eq!(
            decode_ciphertext(&text),
            Err(Error::InvalidHexDigit {
                character: 'é',
                index: 31
            })
        );

        let text = format!("{}é", "0".repeat(30));
        assert_eq!(
            decode_ciphertext(&text),
            Err(Error::InvalidHexDigit {
                character: 'é',
                index: 30
            })
        );
    }

    #[test]
    fn bad_digit_wins_over_bad_length() {
        assert_eq!(
            decode_ciphertext("0x"),
            Err(Error::InvalidHexDigit {
                character: 'x',
                index: 1
            })
        );
    }

    #[test]
    fn decode_reports_offending_digit() {
        let mut text = "0".repeat(64);
        text.replace_range(40..41, "g");
        assert_eq!(
            decode_ciphertext(&text),
            Err(Error::InvalidHexDigit {
                character: 'g',
                index: 40
            })
        );
    }
}
