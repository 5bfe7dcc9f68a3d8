// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use rand::Rng;
use tracing::{debug, instrument};

use crate::ciphertext::Ciphertext;
use crate::crypto::{decrypt_padded, encrypt_padded};
use crate::delimiter::strip_delimiters;
use crate::error::{Error, Result};
use crate::keypair::{PrivateKey, PublicKey};
use crate::text::{from_padded_bytes, to_padded_bytes};
use crate::util::random::{RandomSource, secure_rng};

/// Symbols of the random prefix written by [`ElGamal::encode`].
pub const PREFIX_ALPHABET: &[u8; 66] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789~_-+";

/// Shortest random prefix; the prefix is this long or one character longer.
const PREFIX_MIN_LEN: usize = 4;

/// Stateless entry points of the PPM ElGamal scheme.
///
/// [`encrypt2`](Self::encrypt2) and [`decrypt2`](Self::decrypt2) are the
/// operations external callers should use. The remaining functions are the
/// building blocks they compose.
pub struct ElGamal;

impl ElGamal {
    /// Encrypts plain text: `encrypt(encode(plain_text))`.
    ///
    /// Empty input yields an empty string.
    #[instrument(level = "debug", skip_all, fields(bit_length = public_key.bit_length()))]
    pub fn encrypt2(plain_text: &str, public_key: &PublicKey) -> Result<String> {
        if plain_text.is_empty() {
            return Ok(String::new());
        }

        let mut rng = secure_rng();
        let encoded = Self::encode_with(plain_text, &mut rng);
        Self::encrypt_with(&encoded, public_key, &mut rng)
    }

    /// Decrypts cipher text: `decode(decrypt(cipher_text))`.
    ///
    /// Empty input yields an empty string.
    #[instrument(level = "debug", skip_all, fields(bit_length = private_key.bit_length()))]
    pub fn decrypt2(cipher_text: &str, private_key: &PrivateKey) -> Result<String> {
        if cipher_text.is_empty() {
            return Ok(String::new());
        }

        let encoded = Self::decrypt(cipher_text, private_key)?;
        Self::decode(&encoded).map(str::to_owned)
    }

    /// [`decrypt2`](Self::decrypt2) after removing a `#?#` or `#!#`
    /// delimiter pair, if present.
    pub fn decrypt_delimited(text: &str, private_key: &PrivateKey) -> Result<String> {
        Self::decrypt2(strip_delimiters(text), private_key)
    }

    /// Pads `encoded_text` into blocks and encrypts each block.
    pub fn encrypt(encoded_text: &str, public_key: &PublicKey) -> Result<String> {
        Self::encrypt_with(encoded_text, public_key, &mut secure_rng())
    }

    pub(crate) fn encrypt_with<R: RandomSource>(
        encoded_text: &str,
        public_key: &PublicKey,
        rng: &mut R,
    ) -> Result<String> {
        if encoded_text.is_empty() {
            return Ok(String::new());
        }

        let block_length = public_key.block_length();
        let padded = to_padded_bytes(encoded_text, block_length);
        let ciphertext = encrypt_padded(&padded, public_key, rng)?;

        debug!(blocks = ciphertext.len(), block_length, "encrypted text");
        Ok(ciphertext.to_string())
    }

    /// Decrypts every block and decodes the padded text.
    pub fn decrypt(cipher_text: &str, private_key: &PrivateKey) -> Result<String> {
        if cipher_text.is_empty() {
            return Ok(String::new());
        }

        from_padded_bytes(&Self::decrypt_bytes(cipher_text, private_key)?)
    }

    /// Decrypts every block and returns the concatenated padded bytes,
    /// without removing the padding or decoding text.
    pub fn decrypt_bytes(cipher_text: &str, private_key: &PrivateKey) -> Result<Vec<u8>> {
        let ciphertext: Ciphertext = cipher_text.parse()?;
        let bytes = decrypt_padded(&ciphertext, private_key)?;

        debug!(blocks = ciphertext.len(), "decrypted blocks");
        Ok(bytes)
    }

    /// Prefixes `plain_text` with four or five random characters and a space.
    ///
    /// This keeps short or repeated plain text from producing a recognisable
    /// first block.
    pub fn encode(plain_text: &str) -> String {
        Self::encode_with(plain_text, &mut secure_rng())
    }

    pub(crate) fn encode_with<R: RandomSource>(plain_text: &str, rng: &mut R) -> String {
        let prefix_len = PREFIX_MIN_LEN + rng.random_range(0..2usize);

        let mut encoded = String::with_capacity(prefix_len + 1 + plain_text.len());
        for _ in 0..prefix_len {
            let i = rng.random_range(0..PREFIX_ALPHABET.len());
            encoded.push(char::from(PREFIX_ALPHABET[i]));
        }
        encoded.push(' ');
        encoded.push_str(plain_text);
        encoded
    }

    /// Returns the text after the first space.
    ///
    /// Fails with [`Error::NotEncoded`] when there is no space, which usually
    /// means the text was decrypted with the wrong key.
    pub fn decode(text: &str) -> Result<&str> {
        text.split_once(' ').map(|(_, rest)| rest).ok_or(Error::NotEncoded)
    }
}
