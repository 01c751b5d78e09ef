//! AES key schedule and block encryption/decryption.

use crate::block::Block;
use crate::gf::RCON;
use crate::key::{AesKey, RoundKeys, MAX_ROUND_KEYS};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::sbox::sbox;
use crate::trace::{NoTrace, StateTrace};

const NB: usize = 4;

fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

fn sub_word(word: u32) -> u32 {
    u32::from_be_bytes(word.to_be_bytes().map(sbox))
}

/// Expands a key into `Nr + 1` round keys.
pub fn expand_key(key: &AesKey) -> RoundKeys {
    let nk = key.size().nk();
    let rounds = key.size().rounds();
    let total = NB * (rounds + 1);

    let mut w = [0u32; NB * MAX_ROUND_KEYS];
    for (i, chunk) in key.as_bytes().chunks_exact(4).enumerate() {
        w[i] = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    for i in nk..total {
        let mut temp = w[i - 1];
        if i % nk == 0 {
            temp = sub_word(rot_word(temp)) ^ (u32::from(RCON[i / nk]) << 24);
        } else if nk > 6 && i % nk == 4 {
            temp = sub_word(temp);
        }
        w[i] = w[i - nk] ^ temp;
    }

    let mut round_keys = [[0u8; 16]; MAX_ROUND_KEYS];
    for (round_key, words) in round_keys.iter_mut().zip(w[..total].chunks_exact(NB)) {
        for (column, word) in round_key.chunks_exact_mut(4).zip(words) {
            column.copy_from_slice(&word.to_be_bytes());
        }
    }

    RoundKeys::new(round_keys, rounds)
}

/// Direction of a pass through the round pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Forward cipher.
    Encrypt,
    /// Inverse cipher.
    Decrypt,
}

/// Runs one block through the pipeline in the given direction, reporting
/// every intermediate state to `trace`.
pub fn process_block<T: StateTrace + ?Sized>(
    block: &Block,
    round_keys: &RoundKeys,
    direction: Direction,
    trace: &mut T,
) -> Block {
    match direction {
        Direction::Encrypt => forward(block, round_keys, trace),
        Direction::Decrypt => inverse(block, round_keys, trace),
    }
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    forward(block, round_keys, &mut NoTrace)
}

/// Decrypts a single 16-byte block with pre-expanded round keys.
pub fn decrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    inverse(block, round_keys, &mut NoTrace)
}

fn forward<T: StateTrace + ?Sized>(block: &Block, round_keys: &RoundKeys, trace: &mut T) -> Block {
    let rounds = round_keys.rounds();
    let mut state = *block;

    add_round_key(&mut state, round_keys.get(0));
    trace.record("Add Round Key", &state);

    for round in 1..rounds {
        sub_bytes(&mut state);
        trace.record("Sub Bytes", &state);
        shift_rows(&mut state);
        trace.record("Shift Rows", &state);
        mix_columns(&mut state);
        trace.record("Mix Columns", &state);
        add_round_key(&mut state, round_keys.get(round));
        trace.record("Add Round Key", &state);
    }

    sub_bytes(&mut state);
    trace.record("Sub Bytes", &state);
    shift_rows(&mut state);
    trace.record("Shift Rows", &state);
    add_round_key(&mut state, round_keys.get(rounds));
    trace.record("Add Round Key", &state);

    state
}

fn inverse<T: StateTrace + ?Sized>(block: &Block, round_keys: &RoundKeys, trace: &mut T) -> Block {
    let rounds = round_keys.rounds();
    let mut state = *block;

    add_round_key(&mut state, round_keys.get(rounds));
    trace.record("Add Round Key", &state);
    inv_shift_rows(&mut state);
    trace.record("Inv Shift Rows", &state);
    inv_sub_bytes(&mut state);
    trace.record("Inv Sub Bytes", &state);

    for round in (1..rounds).rev() {
        add_round_key(&mut state, round_keys.get(round));
        trace.record("Add Round Key", &state);
        inv_mix_columns(&mut state);
        trace.record("Inv Mix Columns", &state);
        inv_shift_rows(&mut state);
        trace.record("Inv Shift Rows", &state);
        inv_sub_bytes(&mut state);
        trace.record("Inv Sub Bytes", &state);
    }

    add_round_key(&mut state, round_keys.get(0));
    trace.record("Add Round Key", &state);

    state
}
