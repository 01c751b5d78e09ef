//! Reference AES implementation covering 128, 192 and 256-bit keys.
//!
//! This crate follows FIPS-197 and provides:
//! - GF(2^8) multiplication tables and the S-box.
//! - Key schedule for all three key sizes.
//! - Single-block encryption and decryption, optionally traced step by step.
//!
//! The implementation aims for clarity and testability rather than constant-time
//! guarantees; it should not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
pub mod gf;
mod key;
mod round;
mod sbox;
mod trace;

pub use crate::block::{state_index, xor_in_place, Block, BLOCK_LEN};
pub use crate::cipher::{decrypt_block, encrypt_block, expand_key, process_block, Direction};
pub use crate::key::{AesKey, InvalidKeyLength, KeySize, RoundKeys};
pub use crate::round::{inv_mix_column, mix_column};
pub use crate::sbox::{inv_sbox, sbox};
pub use crate::trace::{format_state, render_snapshot, NoTrace, StateTrace, StdoutTrace, TraceLog};
