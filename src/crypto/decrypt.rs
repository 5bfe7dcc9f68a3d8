// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::Decrypt;
use crate::ciphertext::{Ciphertext, CiphertextBlock};
use crate::error::Result;
use crate::keypair::{KeyPair, PrivateKey};
use crate::math::{mod_inverse, mod_pow};
use crate::scheme::ElGamal;
use crate::util::biguint_to_block;

impl Decrypt for PrivateKey {
    fn decrypt(&self, cipher_text: &str) -> Result<String> {
        ElGamal::decrypt2(cipher_text, self)
    }
}

impl Decrypt for KeyPair {
    fn decrypt(&self, cipher_text: &str) -> Result<String> {
        self.private_key().decrypt(cipher_text)
    }
}

/// Recovers the `expected_length` plaintext bytes of one block.
///
/// Computes `d = b · (a^x)⁻¹ mod p`. Fails with
/// [`Error::NoInverse`](crate::Error::NoInverse) when `a^x` is not invertible
/// modulo `p`, which only happens for tampered input.
pub fn decrypt_block(
    block: &CiphertextBlock,
    expected_length: usize,
    private_key: &PrivateKey,
) -> Result<Vec<u8>> {
    let p = &private_key.p;

    let shared = mod_pow(block.a(), &private_key.x, p);
    let shared_inv = mod_inverse(&shared, p)?;
    let d = (block.b() * shared_inv) % p;

    Ok(biguint_to_block(&d, expected_length))
}

/// Decrypts every block and concatenates the padded plaintext bytes.
pub(crate) fn decrypt_padded(ciphertext: &Ciphertext, private_key: &PrivateKey) -> Result<Vec<u8>> {
    let block_length = private_key.block_length();
    let mut bytes = Vec::with_capacity(ciphertext.len() * block_length);

    for block in ciphertext.iter() {
        bytes.extend(decrypt_block(block, block_length, private_key)?);
    }

    Ok(bytes)
}
