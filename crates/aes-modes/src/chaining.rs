//! ECB and CBC block chaining.

use aes_core::{process_block, xor_in_place, Block, Direction, RoundKeys, StateTrace, BLOCK_LEN};

/// The chaining value starts at all zeros.
///
/// A fixed IV means equal leading blocks under one key produce equal leading
/// ciphertext across messages. Kept for compatibility with existing output.
pub const ZERO_IV: Block = [0u8; BLOCK_LEN];

/// Block chaining mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Chaining {
    /// Electronic codebook: every block encrypted on its own.
    Ecb,
    /// Cipher block chaining with a zero IV.
    #[default]
    Cbc,
}

/// Encrypts block-aligned `plaintext`.
pub(crate) fn encrypt_blocks<T: StateTrace + ?Sized>(
    round_keys: &RoundKeys,
    plaintext: &[u8],
    chaining: Chaining,
    trace: &mut T,
) -> Vec<u8> {
    debug_assert_eq!(plaintext.len() % BLOCK_LEN, 0);
    let mut out = Vec::with_capacity(plaintext.len());
    let mut chain = ZERO_IV;

    for chunk in plaintext.chunks_exact(BLOCK_LEN) {
        let mut block = to_block(chunk);
        if chaining == Chaining::Cbc {
            xor_in_place(&mut block, &chain);
        }
        let ct = process_block(&block, round_keys, Direction::Encrypt, trace);
        out.extend_from_slice(&ct);
        chain = ct;
    }

    out
}

/// Decrypts block-aligned `ciphertext`.
pub(crate) fn decrypt_blocks<T: StateTrace + ?Sized>(
    round_keys: &RoundKeys,
    ciphertext: &[u8],
    chaining: Chaining,
    trace: &mut T,
) -> Vec<u8> {
    debug_assert_eq!(ciphertext.len() % BLOCK_LEN, 0);
    let mut out = Vec::with_capacity(ciphertext.len());
    let mut chain = ZERO_IV;

    for chunk in ciphertext.chunks_exact(BLOCK_LEN) {
        let ct = to_block(chunk);
        let mut block = process_block(&ct, round_keys, Direction::Decrypt, trace);
        if chaining == Chaining::Cbc {
            xor_in_place(&mut block, &chain);
        }
        out.extend_from_slice(&block);
        chain = ct;
    }

    out
}

fn to_block(chunk: &[u8]) -> Block {
    let mut block = [0u8; BLOCK_LEN];
    block.copy_from_slice(chunk);
    block
}
