// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use num_bigint_dig::BigUint;

use crate::error::{Error, Result};
use crate::radix85;

/// Separates the `a` and `b` halves of a block.
pub const PAIR_SEPARATOR: char = ',';

/// Separates consecutive blocks.
pub const BLOCK_SEPARATOR: char = ';';

/// One encrypted block, the pair `(a, b)` with `a = g^k` and `b = y^k · t`.
///
/// Serialized as `radix85(a),radix85(b)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CiphertextBlock {
    a: BigUint,
    b: BigUint,
}

impl CiphertextBlock {
    pub fn new(a: BigUint, b: BigUint) -> Self {
        Self { a, b }
    }

    pub fn a(&self) -> &BigUint {
        &self.a
    }

    pub fn b(&self) -> &BigUint {
        &self.b
    }
}

impl fmt::Display for CiphertextBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{PAIR_SEPARATOR}{}", radix85::encode(&self.a), radix85::encode(&self.b))
    }
}

impl FromStr for CiphertextBlock {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (a, b) = s.split_once(PAIR_SEPARATOR).ok_or_else(|| {
            Error::InvalidSymbol(format!("block is missing the '{PAIR_SEPARATOR}' separator"))
        })?;

        Ok(Self::new(radix85::decode(a)?, radix85::decode(b)?))
    }
}

/// An ordered sequence of encrypted blocks.
///
/// Serialized as the block serializations joined by `;`. Order is the
/// plaintext byte order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ciphertext {
    blocks: Vec<CiphertextBlock>,
}

impl Ciphertext {
    pub fn new(blocks: Vec<CiphertextBlock>) -> Self {
        Self { blocks }
    }

    pub fn blocks(&self) -> &[CiphertextBlock] {
        &self.blocks
    }

    pub fn into_blocks(self) -> Vec<CiphertextBlock> {
        self.blocks
    }
}

impl Deref for Ciphertext {
    type Target = [CiphertextBlock];

    fn deref(&self) -> &Self::Target {
        &self.blocks
    }
}

impl From<Vec<CiphertextBlock>> for Ciphertext {
    fn from(blocks: Vec<CiphertextBlock>) -> Self {
        Self::new(blocks)
    }
}

impl fmt::Display for Ciphertext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, block) in self.blocks.iter().enumerate() {
            if i != 0 {
                write!(f, "{BLOCK_SEPARATOR}")?;
            }
            write!(f, "{block}")?;
        }
        Ok(())
    }
}

/// The empty string parses to a ciphertext with no blocks.
impl FromStr for Ciphertext {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Ok(Self::default());
        }

        s.split(BLOCK_SEPARATOR)
            .map(str::parse)
            .collect::<Result<Vec<_>>>()
            .map(Self::new)
    }
}
