// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

mod file;

use std::path::Path;

pub use file::{PRIVATE_KEY_HEADER, PUBLIC_KEY_HEADER};

use crate::error::{Error, Result};

use num_bigint_dig::BigUint;
use num_traits::{One, Zero};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Largest block the peer ever uses, in bytes.
const MAX_BLOCK_LENGTH: usize = 127;

/// Public parameters of the scheme.
///
/// `p` is the prime modulus, `g` the generator and `y = g^x mod p` the public
/// value. `bit_length` fixes the block size and may exceed the size of `p`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    pub(crate) bit_length: usize,
    pub(crate) p: BigUint,
    pub(crate) g: BigUint,
    pub(crate) y: BigUint,
}

impl PublicKey {
    /// Construct a public key from its components.
    ///
    /// `bit_length` must cover `p` and be at least 8; `p` must exceed 1 and
    /// `g`, `y` must be non-zero.
    pub fn new(bit_length: usize, p: BigUint, g: BigUint, y: BigUint) -> Result<Self> {
        validate(bit_length, &p, &g)?;
        if y.is_zero() {
            return Err(Error::InvalidKey("y cannot be zero".into()));
        }

        Ok(Self { bit_length, p, g, y })
    }

    /// Load a public key from a key file.
    pub fn from_key_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        file::read_key_file(path.as_ref())?.parse()
    }

    /// Render this key in the key file format.
    pub fn to_key_file_string(&self) -> String {
        file::render(PUBLIC_KEY_HEADER, self.bit_length, &self.p, &self.g, &self.y)
    }

    /// Return the prime modulus `p`.
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// Return the generator `g`.
    pub fn g(&self) -> &BigUint {
        &self.g
    }

    /// Return the public value `y`.
    pub fn y(&self) -> &BigUint {
        &self.y
    }

    /// Return the configured bit length.
    pub fn bit_length(&self) -> usize {
        self.bit_length
    }

    /// Plaintext bytes per block, `min(127, bit_length / 8)`.
    pub fn block_length(&self) -> usize {
        block_length(self.bit_length)
    }
}

/// Secret parameters of the scheme.
///
/// Holds the same `p`, `g` as the public key plus the secret exponent `x`.
/// The exponent is zeroized on drop. The relation `y = g^x mod p` is never
/// checked.
#[allow(missing_debug_implementations)]
#[derive(PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
#[cfg_attr(feature = "expose-secret", derive(Debug))]
pub struct PrivateKey {
    #[zeroize(skip)]
    pub(crate) bit_length: usize,
    #[zeroize(skip)]
    pub(crate) p: BigUint,
    #[zeroize(skip)]
    pub(crate) g: BigUint,
    pub(crate) x: BigUint,
}

impl PrivateKey {
    /// Construct a private key from its components.
    ///
    /// Same constraints as [`PublicKey::new`], with `x` non-zero.
    pub fn new(bit_length: usize, p: BigUint, g: BigUint, x: BigUint) -> Result<Self> {
        validate(bit_length, &p, &g)?;
        if x.is_zero() {
            return Err(Error::InvalidKey("x cannot be zero".into()));
        }

        Ok(Self { bit_length, p, g, x })
    }

    /// Load a private key from a key file.
    pub fn from_key_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        file::read_key_file(path.as_ref())?.parse()
    }

    /// Render this key in the key file format.
    pub fn to_key_file_string(&self) -> String {
        file::render(PRIVATE_KEY_HEADER, self.bit_length, &self.p, &self.g, &self.x)
    }

    /// Return the prime modulus `p`.
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// Return the generator `g`.
    pub fn g(&self) -> &BigUint {
        &self.g
    }

    /// Return the configured bit length.
    pub fn bit_length(&self) -> usize {
        self.bit_length
    }

    /// Plaintext bytes per block, `min(127, bit_length / 8)`.
    pub fn block_length(&self) -> usize {
        block_length(self.bit_length)
    }
}

/// A matching public and private key.
///
/// Secret material is zeroized when dropped.
#[allow(missing_debug_implementations)]
#[derive(PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
#[cfg_attr(feature = "expose-secret", derive(Debug))]
pub struct KeyPair {
    #[zeroize(skip)]
    public: PublicKey,
    secret: PrivateKey,
}

impl KeyPair {
    /// Pair a public key with its private key.
    ///
    /// Both must share the bit length, modulus and generator.
    pub fn new(public: PublicKey, secret: PrivateKey) -> Result<Self> {
        if public.bit_length != secret.bit_length || public.p != secret.p || public.g != secret.g {
            return Err(Error::InvalidKey("public and private key parameters differ".into()));
        }

        Ok(Self { public, secret })
    }

    /// Load both halves from their key files.
    pub fn from_key_files<P: AsRef<Path>, Q: AsRef<Path>>(public: P, private: Q) -> Result<Self> {
        Self::new(PublicKey::from_key_file(public)?, PrivateKey::from_key_file(private)?)
    }

    /// Return the public key.
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// Return the private key.
    pub fn private_key(&self) -> &PrivateKey {
        &self.secret
    }
}

fn validate(bit_length: usize, p: &BigUint, g: &BigUint) -> Result<()> {
    if p <= &BigUint::one() {
        return Err(Error::InvalidKey("p must be greater than 1".into()));
    }
    if g.is_zero() {
        return Err(Error::InvalidKey("g cannot be zero".into()));
    }
    if bit_length < p.bits() {
        return Err(Error::InvalidKey(format!(
            "bit length {bit_length} is less than the {}-bit modulus",
            p.bits()
        )));
    }
    if block_length(bit_length) == 0 {
        return Err(Error::InvalidKey(format!("bit length {bit_length} is below one byte")));
    }
    Ok(())
}

fn block_length(bit_length: usize) -> usize {
    MAX_BLOCK_LENGTH.min(bit_length / 8)
}
