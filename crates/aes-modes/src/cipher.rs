//! Keyed cipher facade: padding, chaining and hex serialization.

use aes_core::{expand_key, AesKey, KeySize, NoTrace, RoundKeys, StateTrace, StdoutTrace, BLOCK_LEN};

use crate::chaining::{decrypt_blocks, encrypt_blocks, Chaining};
use crate::error::{Error, Result};
use crate::hexcodec;
use crate::padding::zero_pad;

/// AES with a fixed key schedule.
///
/// The schedule is derived once in [`Cipher::new`] and never changes, so a
/// `Cipher` can be shared across threads by reference.
#[derive(Clone, Debug)]
pub struct Cipher {
    round_keys: RoundKeys,
    key_size: KeySize,
    debug: bool,
}

impl Cipher {
    /// Builds a cipher from raw key bytes (16, 24 or 32 of them).
    ///
    /// With `debug` set, every transform of every block is printed to stdout.
    pub fn new(key: &[u8], debug: bool) -> Result<Self> {
        let key = AesKey::try_from(key)?;
        Ok(Self::from_key(&key, debug))
    }

    /// Builds a cipher from an already validated key.
    pub fn from_key(key: &AesKey, debug: bool) -> Self {
        Self {
            round_keys: expand_key(key),
            key_size: key.size(),
            debug,
        }
    }

    /// Key size selected at construction.
    pub fn key_size(&self) -> KeySize {
        self.key_size
    }

    /// The expanded round keys.
    pub fn round_keys(&self) -> &RoundKeys {
        &self.round_keys
    }

    /// Zero-pads and encrypts `message`, returning lowercase hex.
    pub fn encrypt(&self, message: &[u8], chaining: Chaining) -> String {
        hexcodec::encode(&self.encrypt_to_bytes(message, chaining))
    }

    /// Decrypts hex ciphertext. Zero padding is left in place.
    pub fn decrypt(&self, ciphertext: &str, chaining: Chaining) -> Result<Vec<u8>> {
        let bytes = hexcodec::decode_ciphertext(ciphertext)?;
        self.decrypt_bytes(&bytes, chaining)
    }

    /// Zero-pads and encrypts `message`, returning raw ciphertext.
    pub fn encrypt_to_bytes(&self, message: &[u8], chaining: Chaining) -> Vec<u8> {
        if self.debug {
            self.encrypt_traced(message, chaining, &mut StdoutTrace)
        } else {
            self.encrypt_traced(message, chaining, &mut NoTrace)
        }
    }

    /// Decrypts raw ciphertext, which must be a positive multiple of 16 bytes.
    pub fn decrypt_bytes(&self, ciphertext: &[u8], chaining: Chaining) -> Result<Vec<u8>> {
        if self.debug {
            self.decrypt_traced(ciphertext, chaining, &mut StdoutTrace)
        } else {
            self.decrypt_traced(ciphertext, chaining, &mut NoTrace)
        }
    }

    /// Like [`Cipher::encrypt_to_bytes`], reporting every state to `trace`.
    pub fn encrypt_traced<T: StateTrace + ?Sized>(
        &self,
        message: &[u8],
        chaining: Chaining,
        trace: &mut T,
    ) -> Vec<u8> {
        let padded = zero_pad(message);
        encrypt_blocks(&self.round_keys, &padded, chaining, trace)
    }

    /// Like [`Cipher::decrypt_bytes`], reporting every state to `trace`.
    pub fn decrypt_traced<T: StateTrace + ?Sized>(
        &self,
        ciphertext: &[u8],
        chaining: Chaining,
        trace: &mut T,
    ) -> Result<Vec<u8>> {
        if ciphertext.is_empty() || ciphertext.len() % BLOCK_LEN != 0 {
            return Err(Error::InvalidCiphertextLength {
                length: ciphertext.len(),
                multiple: BLOCK_LEN,
            });
        }
        Ok(decrypt_blocks(&self.round_keys, ciphertext, chaining, trace))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::padding::strip_zero_padding;
    use aes_core::{InvalidKeyLength, TraceLog};

    const KEY: &[u8] = b"Thats my Kung Fu";
    const PLAIN: &[u8] = b"Two One Nine Two";
    const CIPHER_HEX: &str = "29c3505f571420f6402299b31a02d73a";

    fn cipher() -> Cipher {
        Cipher::new(KEY, false).expect("valid key")
    }

    #[test]
    fn ecb_known_vector() {
        let aes = cipher();
        let ct = aes.encrypt(PLAIN, Chaining::Ecb);
        assert_eq!(ct, CIPHER_HEX);
        assert_eq!(aes.decrypt(&ct, Chaining::Ecb).expect("decrypt"), PLAIN);
    }

    #[test]
    fn cbc_single_block_equals_ecb_under_zero_iv() {
        let aes = cipher();
        assert_eq!(aes.encrypt(PLAIN, Chaining::Cbc), CIPHER_HEX);
    }

    #[test]
    fn cbc_two_block_vector() {
        let aes = cipher();
        let message = [PLAIN, PLAIN].concat();
        let ct = aes.encrypt(&message, Chaining::Cbc);
        assert_eq!(
            ct,
            "29c3505f571420f6402299b31a02d73a7dd2046aee8c4b039f51a10d61b25446"
        );
        assert_eq!(aes.decrypt(&ct, Chaining::Cbc).expect("decrypt"), message);
    }

    #[test]
    fn ecb_repeats_identical_blocks() {
        let aes = cipher();
        let ct = aes.encrypt(&[PLAIN, PLAIN].concat(), Chaining::Ecb);
        assert_eq!(ct.len(), 64);
        assert_eq!(ct[..32], ct[32..]);
    }

    #[test]
    fn cbc_propagates_first_block_difference() {
        let aes = cipher();
        let tail = [0x41u8; 48];
        let a = aes.encrypt_to_bytes(&[&[0u8; 16][..], &tail].concat(), Chaining::Cbc);
        let b = aes.encrypt_to_bytes(&[&[1u8; 16][..], &tail].concat(), Chaining::Cbc);
        for (block_a, block_b) in a.chunks(16).zip(b.chunks(16)) {
            assert_ne!(block_a, block_b);
        }
    }

    #[test]
    fn short_message_is_zero_padded() {
        let aes = cipher();
        let ct = aes.encrypt(b"hello", Chaining::Ecb);
        assert_eq!(ct, "d04ce5867478c59c4a84ac9b7cfcc812");
        let pt = aes.decrypt(&ct, Chaining::Ecb).expect("decrypt");
        assert_eq!(pt.len(), 16);
        assert_eq!(strip_zero_padding(&pt), b"hello");
    }

    #[test]
    fn empty_message_encrypts_to_nothing() {
        let aes = cipher();
        assert_eq!(aes.encrypt(b"", Chaining::Cbc), "");
        assert!(matches!(
            aes.decrypt("", Chaining::Cbc),
            Err(Error::InvalidCiphertextLength { length: 0, .. })
        ));
    }

    #[test]
    fn rejects_ten_byte_key() {
        let err = Cipher::new(&[0u8; 10], false).expect_err("10-byte key");
        assert_eq!(err, Error::InvalidKeyLength(InvalidKeyLength(10)));
    }

    #[test]
    fn rejects_33_hex_characters() {
        let aes = cipher();
        let text = format!("{CIPHER_HEX}0");
        assert_eq!(
            aes.decrypt(&text, Chaining::Ecb),
            Err(Error::InvalidCiphertextLength {
                length: 33,
                multiple: 32
            })
        );
    }

    #[test]
    fn rejects_non_hex_digit() {
        let aes = cipher();
        let text = CIPHER_HEX.replace('5', "z");
        assert!(matches!(
            aes.decrypt(&text, Chaining::Ecb),
            Err(Error::InvalidHexDigit { character: 'z', .. })
        ));
    }

    #[test]
    fn rejects_unaligned_raw_ciphertext() {
        let aes = cipher();
        assert_eq!(
            aes.decrypt_bytes(&[0u8; 20], Chaining::Cbc),
            Err(Error::InvalidCiphertextLength {
                length: 20,
                multiple: 16
            })
        );
    }

    #[test]
    fn same_key_gives_same_schedule() {
        for len in [16usize, 24, 32] {
            let key = vec![0x5cu8; len];
            let a = Cipher::new(&key, false).expect("valid key");
            let b = Cipher::new(&key, true).expect("valid key");
            assert_eq!(a.round_keys(), b.round_keys());
            assert_eq!(a.round_keys().rounds(), len / 4 + 6);
        }
    }

    #[test]
    fn traced_encrypt_reports_each_block() {
        let aes = cipher();
        let mut log = TraceLog::new();
        let ct = aes.encrypt_traced(&[PLAIN, PLAIN].concat(), Chaining::Cbc, &mut log);
        assert_eq!(log.entries.len(), 2 * 40);
        assert_eq!(log.entries[39].1[..], ct[..16]);
        assert_eq!(log.entries[79].1[..], ct[16..]);
    }

    #[test]
    fn cipher_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Cipher>();

        let aes = &cipher();
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(move || aes.encrypt(PLAIN, Chaining::Ecb)))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().expect("thread"), CIPHER_HEX);
            }
        });
    }
}
