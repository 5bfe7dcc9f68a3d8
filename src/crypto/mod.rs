// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

mod decrypt;
mod encrypt;

pub use decrypt::decrypt_block;
pub use encrypt::encrypt_block;

pub(crate) use decrypt::decrypt_padded;
pub(crate) use encrypt::encrypt_padded;

use crate::delimiter::strip_delimiters;
use crate::error::Result;

/// Encrypts text for the PPM peer.
pub trait Encrypt {
    /// Encrypt `plain_text` into the `;`-joined wire format.
    ///
    /// Equivalent to [`ElGamal::encrypt2`](crate::ElGamal::encrypt2).
    fn encrypt(&self, plain_text: &str) -> Result<String>;
}

/// Decrypts text produced by the PPM peer.
pub trait Decrypt {
    /// Recover the plain text from wire-format ciphertext.
    ///
    /// Equivalent to [`ElGamal::decrypt2`](crate::ElGamal::decrypt2).
    fn decrypt(&self, cipher_text: &str) -> Result<String>;

    /// Like [`decrypt`](Decrypt::decrypt), but first removes a surrounding
    /// `#?#` or `#!#` delimiter pair if present.
    fn decrypt_delimited(&self, text: &str) -> Result<String> {
        self.decrypt(strip_delimiters(text))
    }
}
