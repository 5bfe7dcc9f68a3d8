// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Text ⇄ block-padded bytes.
//!
//! Text is written as UTF-16 code units in the peer's modified UTF-8 form:
//! `U+0000` takes two bytes and a supplementary character is written as its
//! two surrogates, three bytes each. The byte string is then zero-padded to a
//! whole number of blocks. The padding length is not stored directly. The last
//! byte holds `padding + Σ plaintext bytes (mod 256)`, and the decoder
//! subtracts every other byte back out to recover it.

use crate::error::{Error, Result};

/// Smallest code unit written as a single byte.
const ONE_BYTE_MIN: u16 = 0x0001;
/// Largest code unit written as a single byte.
const ONE_BYTE_MAX: u16 = 0x007F;
/// Largest code unit written as two bytes; anything above takes three.
const TWO_BYTE_MAX: u16 = 0x07FF;

/// Encodes `text` and pads it to a multiple of `block_length` bytes.
///
/// At least one padding byte is always added, so text whose encoding is
/// already block-aligned gains a whole extra block.
///
/// # Panics
/// Panics if `block_length` is zero.
pub fn to_padded_bytes(text: &str, block_length: usize) -> Vec<u8> {
    assert!(block_length > 0, "block length must be non-zero");

    let mut bytes = Vec::with_capacity(text.len() + block_length);
    for unit in text.encode_utf16() {
        push_unit(unit, &mut bytes);
    }

    let padding = block_length - bytes.len() % block_length;
    let trailer = bytes.iter().fold(padding as u8, |acc, &b| acc.wrapping_add(b));

    bytes.resize(bytes.len() + padding, 0);
    if let Some(last) = bytes.last_mut() {
        *last = trailer;
    }

    bytes
}

/// Strips the padding written by [`to_padded_bytes`] and decodes the text.
///
/// An empty input decodes to the empty string.
pub fn from_padded_bytes(bytes: &[u8]) -> Result<String> {
    let Some((&trailer, body)) = bytes.split_last() else {
        return Ok(String::new());
    };

    let padding = usize::from(body.iter().fold(trailer, |acc, &b| acc.wrapping_sub(b)));
    if padding == 0 || padding > bytes.len() {
        return Err(Error::MalformedEncoding(format!(
            "padding length {padding} does not fit {} bytes",
            bytes.len()
        )));
    }

    let units = decode_units(&bytes[..bytes.len() - padding])?;
    String::from_utf16(&units).map_err(|_| Error::MalformedEncoding("unpaired surrogate".into()))
}

fn push_unit(unit: u16, out: &mut Vec<u8>) {
    if (ONE_BYTE_MIN..=ONE_BYTE_MAX).contains(&unit) {
        out.push(unit as u8);
    } else if unit > TWO_BYTE_MAX {
        out.push(0xE0 | ((unit >> 12) & 0x0F) as u8);
        out.push(0x80 | ((unit >> 6) & 0x3F) as u8);
        out.push(0x80 | (unit & 0x3F) as u8);
    } else {
        out.push(0xC0 | ((unit >> 6) & 0x1F) as u8);
        out.push(0x80 | (unit & 0x3F) as u8);
    }
}

fn decode_units(data: &[u8]) -> Result<Vec<u16>> {
    let mut units = Vec::with_capacity(data.len());
    let mut iter = data.iter().copied();

    while let Some(lead) = iter.next() {
        let unit = match lead >> 4 {
            0..=7 => u16::from(lead),
            12 | 13 => {
                let c2 = continuation(iter.next())?;
                (u16::from(lead & 0x1F) << 6) | c2
            }
            14 => {
                let c2 = continuation(iter.next())?;
                let c3 = continuation(iter.next())?;
                (u16::from(lead & 0x0F) << 12) | (c2 << 6) | c3
            }
            _ => {
                return Err(Error::MalformedEncoding(format!("invalid lead byte {lead:#04x}")));
            }
        };
        units.push(unit);
    }

    Ok(units)
}

fn continuation(byte: Option<u8>) -> Result<u16> {
    match byte {
        Some(b) if b & 0xC0 == 0x80 => Ok(u16::from(b & 0x3F)),
        Some(b) => Err(Error::MalformedEncoding(format!("invalid continuation byte {b:#04x}"))),
        None => Err(Error::MalformedEncoding("truncated multi-byte sequence".into())),
    }
}
