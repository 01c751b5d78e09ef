//! Block representation helpers.
//!
//! A block doubles as the cipher state: byte `4 * c + r` sits at row `r`,
//! column `c` of the 4x4 matrix.

/// Block size in bytes.
pub const BLOCK_LEN: usize = 16;

/// AES block of 16 bytes.
pub type Block = [u8; BLOCK_LEN];

/// XORs two blocks, writing the result into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}

/// Index of the byte at `row`, `col` within a column-major block.
#[inline]
pub const fn state_index(row: usize, col: usize) -> usize {
    4 * col + row
}
