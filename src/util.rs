// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod random;

use num_bigint_dig::BigUint;
use num_traits::Zero;

/// Converts a recovered block value into exactly `length` big-endian bytes.
///
/// The minimal representation loses leading zero bytes, so shorter values are
/// left-padded with zeros. Longer values keep only their last `length` bytes;
/// the legacy decryptor truncates the same way instead of failing.
pub fn biguint_to_block(value: &BigUint, length: usize) -> Vec<u8> {
    let bytes = if value.is_zero() { Vec::new() } else { value.to_bytes_be() };

    if bytes.len() >= length {
        return bytes[bytes.len() - length..].to_vec();
    }

    let mut block = vec![0u8; length - bytes.len()];
    block.extend_from_slice(&bytes);
    block
}
