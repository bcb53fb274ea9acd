//! In-place AES-128/192/256 with ECB, CBC, and CTR modes of operation.
//!
//! The crate is an embeddable cipher core: a [`Cipher`] context holds the
//! expanded round-key schedule and the working IV/counter, and every
//! operation mutates a caller-owned buffer in place without allocating.
//! Padding, key/IV generation and transport, and authenticated encryption
//! are deliberately left to the caller.
//!
//! ## Example
//! ```
//! # fn main() -> aesbuf::Result<()> {
//! use aesbuf::{Cipher, Key};
//!
//! let key = Key::try_from_slice(&[
//!     0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, //
//!     0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f, 0x3c, //
//! ])?;
//! let iv = [0x42u8; 16];
//!
//! let mut cipher = Cipher::new_with_iv(&key, &iv);
//! let mut buffer = *b"exactly thirty-two bytes of text";
//! let original = buffer;
//!
//! cipher.encrypt_cbc(&mut buffer)?;
//!
//! cipher.set_iv(&iv);
//! cipher.decrypt_cbc(&mut buffer)?;
//! assert_eq!(buffer, original);
//! # Ok(())
//! # }
//! ```

mod cipher;
mod core;
mod error;
mod key;
mod modes;

pub use cipher::Cipher;
pub use error::{Error, Result};
pub use key::{Key, KeySize};
