// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::Encrypt;
use crate::ciphertext::{Ciphertext, CiphertextBlock};
use crate::error::{Error, Result};
use crate::keypair::{KeyPair, PublicKey};
use crate::math::{choose_ephemeral_key, mod_pow};
use crate::scheme::ElGamal;
use crate::util::random::{RandomSource, secure_rng};

use num_bigint_dig::BigUint;
use tracing::trace;

impl Encrypt for PublicKey {
    fn encrypt(&self, plain_text: &str) -> Result<String> {
        ElGamal::encrypt2(plain_text, self)
    }
}

impl Encrypt for KeyPair {
    fn encrypt(&self, plain_text: &str) -> Result<String> {
        self.public_key().encrypt(plain_text)
    }
}

/// Encrypts the block of `public_key.block_length()` bytes starting at
/// `offset`, under a fresh ephemeral key.
///
/// The block is read as a big-endian integer `t`; the result is
/// `(g^k mod p, y^k · t mod p)`. A block that reaches past the end of `bytes`
/// is read up to the end.
pub fn encrypt_block(
    bytes: &[u8],
    offset: usize,
    public_key: &PublicKey,
) -> Result<CiphertextBlock> {
    encrypt_block_with(bytes, offset, public_key, &mut secure_rng())
}

pub(crate) fn encrypt_block_with<R: RandomSource>(
    bytes: &[u8],
    offset: usize,
    public_key: &PublicKey,
    rng: &mut R,
) -> Result<CiphertextBlock> {
    let start = offset.min(bytes.len());
    let end = start.saturating_add(public_key.block_length()).min(bytes.len());

    let t = BigUint::from_bytes_be(&bytes[start..end]);
    if t >= public_key.p {
        return Err(Error::PlaintextTooLarge);
    }

    let p = &public_key.p;
    let k = choose_ephemeral_key(p, rng);

    // a = g^k mod p, b = y^k · t mod p
    let a = mod_pow(&public_key.g, &k, p);
    let b = (mod_pow(&public_key.y, &k, p) * t) % p;

    Ok(CiphertextBlock::new(a, b))
}

/// Encrypts already padded bytes block by block.
pub(crate) fn encrypt_padded<R: RandomSource>(
    bytes: &[u8],
    public_key: &PublicKey,
    rng: &mut R,
) -> Result<Ciphertext> {
    let block_length = public_key.block_length();

    let blocks = (0..bytes.len())
        .step_by(block_length)
        .map(|offset| {
            trace!(offset, "encrypting block");
            encrypt_block_with(bytes, offset, public_key, &mut *rng)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Ciphertext::new(blocks))
}
