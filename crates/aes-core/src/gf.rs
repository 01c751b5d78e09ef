//! GF(2^8) arithmetic under the AES reduction polynomial x^8 + x^4 + x^3 + x + 1.

use once_cell::sync::Lazy;

/// Low byte of the reduction polynomial (0x11b).
const REDUCTION: u8 = 0x1b;

/// Multiplies `byte` by `x` (i.e. by 2), reducing modulo 0x11b.
#[inline]
pub const fn xtime(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ REDUCTION
    } else {
        shifted
    }
}

/// Bitwise (shift-and-add) field multiplication.
///
/// Slow but table-free; used to cross-check the lookup tables.
pub fn gmul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    while b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        a = xtime(a);
        b >>= 1;
    }
    product
}

/// Lookup tables for multiplication by the MixColumns constants.
pub struct MulTables {
    /// `x * 0x02`
    pub by2: [u8; 256],
    /// `x * 0x03`
    pub by3: [u8; 256],
    /// `x * 0x09`
    pub by9: [u8; 256],
    /// `x * 0x0b`
    pub by11: [u8; 256],
    /// `x * 0x0d`
    pub by13: [u8; 256],
    /// `x * 0x0e`
    pub by14: [u8; 256],
}

impl MulTables {
    fn compute() -> Self {
        let mut tables = Self {
            by2: [0u8; 256],
            by3: [0u8; 256],
            by9: [0u8; 256],
            by11: [0u8; 256],
            by13: [0u8; 256],
            by14: [0u8; 256],
        };
        for value in 0..=255u8 {
            let x1 = value;
            let x2 = xtime(x1);
            let x4 = xtime(x2);
            let x8 = xtime(x4);
            let i = value as usize;
            tables.by2[i] = x2;
            tables.by3[i] = x2 ^ x1;
            tables.by9[i] = x8 ^ x1;
            tables.by11[i] = x8 ^ x2 ^ x1;
            tables.by13[i] = x8 ^ x4 ^ x1;
            tables.by14[i] = x8 ^ x4 ^ x2;
        }
        tables
    }
}

/// Process-wide multiplication tables, populated on first access.
pub static MUL: Lazy<MulTables> = Lazy::new(MulTables::compute);

/// Round constants `Rcon[1..=14]`; index 0 is unused.
///
/// Covers every round index reachable by the 128/192/256-bit schedules.
pub const RCON: [u8; 15] = rcon_table();

const fn rcon_table() -> [u8; 15] {
    let mut table = [0u8; 15];
    table[1] = 0x01;
    let mut i = 2;
    while i < table.len() {
        table[i] = xtime(table[i - 1]);
        i += 1;
    }
    table
}
