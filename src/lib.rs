// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # PPM ElGamal
//!
//! Text encryption that is byte-compatible with the ElGamal variant spoken by
//! PPM servers. The scheme is textbook ElGamal over `Z_p`, wrapped in legacy
//! encodings:
//!
//! - text is written as modified UTF-8 and padded to fixed blocks of
//!   `min(127, bit_length / 8)` bytes, with the padding length folded into a
//!   checksum trailer;
//! - every block is encrypted independently under a fresh ephemeral key;
//! - each `(a, b)` pair is written in a custom radix-85 alphabet, pairs joined
//!   by `;`;
//! - the plain text carries a random 4–5 character prefix so that equal
//!   inputs never produce a recognisable first block.
//!
//! ## Security
//!
//! This crate exists for interoperability only. The block mode has no
//! diffusion between blocks and no integrity protection; do not use it for
//! anything a PPM peer doesn't require.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ppm_elgamal::{Decrypt, Encrypt, KeyPair};
//!
//! let keys = KeyPair::from_key_files("ppm_public.key", "ppm_private.key")
//!     .expect("key files");
//!
//! let cipher = keys.encrypt("hello world").expect("encryption failed");
//! let plain = keys.decrypt(&cipher).expect("decryption failed");
//! assert_eq!(plain, "hello world");
//! ```

mod ciphertext;
mod crypto;
mod error;
mod keypair;
mod scheme;
mod util;

pub mod delimiter;
pub mod math;
pub mod radix85;
pub mod text;

#[cfg(test)]
mod testing;

pub use ciphertext::*;
pub use crypto::{Decrypt, Encrypt, decrypt_block, encrypt_block};
pub use error::*;
pub use keypair::*;
pub use scheme::*;
pub use util::random::RandomSource;
