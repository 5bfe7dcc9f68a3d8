// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Five-line key file format.
//!
//! ```text
//! ElGamal Public Key        (or ElGamal Private Key)
//! <bit length, decimal>
//! <p, hex>
//! <g, hex>
//! <y or x, hex>
//! ```

use std::path::Path;
use std::str::FromStr;

use num_bigint_dig::BigUint;
use tracing::debug;

use super::{PrivateKey, PublicKey};
use crate::error::{Error, Result};

/// First line of a public key file.
pub const PUBLIC_KEY_HEADER: &str = "ElGamal Public Key";

/// First line of a private key file.
pub const PRIVATE_KEY_HEADER: &str = "ElGamal Private Key";

struct KeyFields {
    bit_length: usize,
    p: BigUint,
    g: BigUint,
    value: BigUint,
}

pub(super) fn read_key_file(path: &Path) -> Result<String> {
    debug!(path = %path.display(), "reading key file");
    Ok(std::fs::read_to_string(path)?)
}

pub(super) fn render(
    header: &str,
    bit_length: usize,
    p: &BigUint,
    g: &BigUint,
    value: &BigUint,
) -> String {
    format!(
        "{header}\n{bit_length}\n{}\n{}\n{}\n",
        p.to_str_radix(16),
        g.to_str_radix(16),
        value.to_str_radix(16)
    )
}

fn parse(text: &str, header: &str) -> Result<KeyFields> {
    let mut lines = text.lines().map(str::trim_end);

    let mut next = |what: &str| {
        lines.next().ok_or_else(|| Error::InvalidKeyFile(format!("missing {what} line")))
    };

    if next("header")? != header {
        return Err(Error::InvalidKeyFile(format!("expected header {header:?}")));
    }

    let bit_length = next("bit length")?;
    let bit_length = bit_length
        .trim()
        .parse()
        .map_err(|_| Error::InvalidKeyFile(format!("bad bit length {bit_length:?}")))?;

    let p = parse_hex(next("p")?, "p")?;
    let g = parse_hex(next("g")?, "g")?;
    let value = parse_hex(next("key")?, "key")?;

    Ok(KeyFields { bit_length, p, g, value })
}

fn parse_hex(line: &str, what: &str) -> Result<BigUint> {
    let digits = line.trim();
    let digits = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
        .unwrap_or(digits);

    if digits.is_empty() {
        return Err(Error::InvalidKeyFile(format!("empty {what} value")));
    }

    BigUint::parse_bytes(digits.as_bytes(), 16)
        .ok_or_else(|| Error::InvalidKeyFile(format!("bad hex {what} value")))
}

impl FromStr for PublicKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let fields = parse(s, PUBLIC_KEY_HEADER)?;
        PublicKey::new(fields.bit_length, fields.p, fields.g, fields.value)
    }
}

impl FromStr for PrivateKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let fields = parse(s, PRIVATE_KEY_HEADER)?;
        PrivateKey::new(fields.bit_length, fields.p, fields.g, fields.value)
    }
}
