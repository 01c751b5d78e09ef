//! ECB and CBC chaining over the `aes-core` block cipher.
//!
//! Messages are zero-padded to whole blocks and ciphertext is exchanged as
//! lowercase hex. Two properties are kept for compatibility and are weak:
//! - CBC always starts from an all-zero IV ([`ZERO_IV`]).
//! - Padding is plain zero bytes, so trailing zeros of the original message
//!   cannot be distinguished from padding (see [`strip_zero_padding`]).
//!
//! There is no authentication of any kind.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod chaining;
mod cipher;
mod error;
mod hexcodec;
mod padding;

pub use crate::chaining::{Chaining, ZERO_IV};
pub use crate::cipher::Cipher;
pub use crate::error::{Error, Result};
pub use crate::hexcodec::{decode_ciphertext, encode as encode_hex, HEX_BLOCK_LEN};
pub use crate::padding::{strip_zero_padding, zero_pad};
pub use aes_core::{AesKey, KeySize};
