//! Property-based tests for the chaining layer.

use aes_core::{decrypt_block, encrypt_block, expand_key, inv_mix_column, mix_column, AesKey};
use aes_modes::{strip_zero_padding, Chaining, Cipher};
use proptest::prelude::*;

fn key_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        prop::collection::vec(any::<u8>(), 16),
        prop::collection::vec(any::<u8>(), 24),
        prop::collection::vec(any::<u8>(), 32),
    ]
}

fn chaining() -> impl Strategy<Value = Chaining> {
    prop_oneof![Just(Chaining::Ecb), Just(Chaining::Cbc)]
}

proptest! {
    #[test]
    fn block_round_trip(key in key_bytes(), block in any::<[u8; 16]>()) {
        let key = AesKey::try_from(key.as_slice()).unwrap();
        let rks = expand_key(&key);
        prop_assert_eq!(decrypt_block(&encrypt_block(&block, &rks), &rks), block);
    }

    #[test]
    fn mix_columns_inverse_law(column in any::<[u8; 4]>()) {
        prop_assert_eq!(inv_mix_column(mix_column(column)), column);
    }

    #[test]
    fn message_round_trip(
        key in key_bytes(),
        mode in chaining(),
        message in prop::collection::vec(any::<u8>(), 1..=200)
    ) {
        let aes = Cipher::new(&key, false).unwrap();
        let ct = aes.encrypt(&message, mode);
        prop_assert_eq!(ct.len(), message.len().div_ceil(16) * 32);
        prop_assert!(ct.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)));

        let pt = aes.decrypt(&ct, mode).unwrap();
        prop_assert_eq!(&pt[..message.len()], &message[..]);
        prop_assert!(pt[message.len()..].iter().all(|&b| b == 0));
    }

    #[test]
    fn text_survives_padding_strip(key in key_bytes(), text in "[a-zA-Z0-9 ]{1,64}") {
        let aes = Cipher::new(&key, false).unwrap();
        let ct = aes.encrypt(text.as_bytes(), Chaining::Cbc);
        let pt = aes.decrypt(&ct, Chaining::Cbc).unwrap();
        prop_assert_eq!(strip_zero_padding(&pt), text.as_bytes());
    }

    #[test]
    fn cbc_changes_every_later_block(
        key in key_bytes(),
        first in any::<[u8; 16]>(),
        flip in 0usize..16,
        tail in prop::collection::vec(any::<u8>(), 16..=64)
    ) {
        let aes = Cipher::new(&key, false).unwrap();
        let mut other = first;
        other[flip] ^= 0x01;

        let a = aes.encrypt_to_bytes(&[&first[..], &tail].concat(), Chaining::Cbc);
        let b = aes.encrypt_to_bytes(&[&other[..], &tail].concat(), Chaining::Cbc);
        for (x, y) in a.chunks(16).zip(b.chunks(16)) {
            prop_assert_ne!(x, y);
        }
    }

    #[test]
    fn invalid_key_lengths_rejected(len in (0usize..64).prop_filter("valid", |l| ![16, 24, 32].contains(l))) {
        prop_assert!(Cipher::new(&vec![0u8; len], false).is_err());
    }
}
