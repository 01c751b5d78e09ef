//! AES round transformations.
//!
//! Each primitive has a forward and an inverse procedure; the pipeline in
//! `cipher` picks between them once per block.

use crate::block::{state_index, xor_in_place, Block};
use crate::gf::MUL;
use crate::sbox::{inv_sbox, sbox};

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = sbox(*byte);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = inv_sbox(*byte);
    }
}

/// Rotates row `r` left by `r` positions.
#[inline]
pub fn shift_rows(state: &mut Block) {
    let src = *state;
    for row in 1..4 {
        for col in 0..4 {
            state[state_index(row, col)] = src[state_index(row, (col + row) % 4)];
        }
    }
}

/// Rotates row `r` right by `r` positions.
#[inline]
pub fn inv_shift_rows(state: &mut Block) {
    let src = *state;
    for row in 1..4 {
        for col in 0..4 {
            state[state_index(row, (col + row) % 4)] = src[state_index(row, col)];
        }
    }
}

/// Multiplies one column by the circulant matrix {2, 3, 1, 1}.
pub fn mix_column(col: [u8; 4]) -> [u8; 4] {
    let t = &*MUL;
    let [a0, a1, a2, a3] = col.map(usize::from);
    [
        t.by2[a0] ^ t.by3[a1] ^ col[2] ^ col[3],
        col[0] ^ t.by2[a1] ^ t.by3[a2] ^ col[3],
        col[0] ^ col[1] ^ t.by2[a2] ^ t.by3[a3],
        t.by3[a0] ^ col[1] ^ col[2] ^ t.by2[a3],
    ]
}

/// Multiplies one column by the circulant matrix {14, 11, 13, 9}.
pub fn inv_mix_column(col: [u8; 4]) -> [u8; 4] {
    let t = &*MUL;
    let [a0, a1, a2, a3] = col.map(usize::from);
    [
        t.by14[a0] ^ t.by11[a1] ^ t.by13[a2] ^ t.by9[a3],
        t.by9[a0] ^ t.by14[a1] ^ t.by11[a2] ^ t.by13[a3],
        t.by13[a0] ^ t.by9[a1] ^ t.by14[a2] ^ t.by11[a3],
        t.by11[a0] ^ t.by13[a1] ^ t.by9[a2] ^ t.by14[a3],
    ]
}

fn map_columns(state: &mut Block, f: fn([u8; 4]) -> [u8; 4]) {
    for column in state.chunks_exact_mut(4) {
        let mixed = f([column[0], column[1], column[2], column[3]]);
        column.copy_from_slice(&mixed);
    }
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut Block) {
    map_columns(state, mix_column);
}

/// Inverse MixColumns over all four columns.
#[inline]
pub fn inv_mix_columns(state: &mut Block) {
    map_columns(state, inv_mix_column);
}

/// Adds (XORs) a round key into the state.
#[inline]
pub fn add_round_key(state: &mut Block, round_key: &Block) {
    xor_in_place(state, round_key);
}
