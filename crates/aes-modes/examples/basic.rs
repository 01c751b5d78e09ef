//! Encrypts two identical blocks under ECB and CBC and decrypts them back.

use aes_modes::{strip_zero_padding, Chaining, Cipher};

fn main() -> Result<(), aes_modes::Error> {
    let cipher = Cipher::new(b"Thats my Kung Fu", false)?;
    let message = b"Two One Nine TwoTwo One Nine Two";

    let ecb = cipher.encrypt(message, Chaining::Ecb);
    let cbc = cipher.encrypt(message, Chaining::Cbc);
    // ECB leaks the repeated block, CBC does not.
    assert_eq!(ecb[..32], ecb[32..]);
    assert_ne!(cbc[..32], cbc[32..]);

    let recovered = cipher.decrypt(&cbc, Chaining::Cbc)?;
    assert_eq!(strip_zero_padding(&recovered), &message[..]);

    println!("ecb: {ecb}");
    println!("cbc: {cbc}");
    Ok(())
}
