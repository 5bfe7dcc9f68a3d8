// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Positional base-85 serialization of ciphertext integers.
//!
//! This is not Ascii85: the alphabet, its order and the big-endian digit
//! layout are fixed by the PPM peer. Zero encodes to the empty string.

use num_bigint_dig::BigUint;
use num_traits::{ToPrimitive, Zero};

use crate::error::{Error, Result};

/// Digit alphabet, indexed by digit value. The last symbol is a space.
pub const ALPHABET: &[u8; 85] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ`~@$^&*()_+=-{}|:<>./? ";

const RADIX: u32 = 85;

/// Encodes a non-negative integer, most significant digit first.
pub fn encode(value: &BigUint) -> String {
    let radix = BigUint::from(RADIX);
    let mut digits = Vec::new();
    let mut rest = value.clone();

    while !rest.is_zero() {
        let digit = (&rest % &radix).to_usize().unwrap_or_default();
        digits.push(ALPHABET[digit]);
        rest = &rest / &radix;
    }

    digits.iter().rev().map(|&d| char::from(d)).collect()
}

/// Decodes a string produced by [`encode`].
///
/// Fails with [`Error::InvalidSymbol`] on the first character outside
/// [`ALPHABET`]. The empty string decodes to zero.
pub fn decode(text: &str) -> Result<BigUint> {
    let radix = BigUint::from(RADIX);
    let mut value = BigUint::zero();

    for c in text.chars() {
        let digit = digit_of(c)
            .ok_or_else(|| Error::InvalidSymbol(format!("not a radix-85 character: {c:?}")))?;
        value = value * &radix + BigUint::from(digit);
    }

    Ok(value)
}

fn digit_of(c: char) -> Option<u32> {
    if !c.is_ascii() {
        return None;
    }
    ALPHABET.iter().position(|&d| d == c as u8).map(|i| i as u32)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::testing::mersenne;
    use proptest::prelude::*;

    #[test]
    fn alphabet_has_no_duplicates() {
        let mut seen = std::collections::HashSet::new();
        assert!(ALPHABET.iter().all(|b| seen.insert(*b)));
    }

    #[test]
    fn zero_encodes_to_empty() {
        assert_eq!(encode(&BigUint::zero()), "");
        assert_eq!(decode("").unwrap(), BigUint::zero());
    }

    #[test]
    fn known_values() {
        assert_eq!(encode(&BigUint::from(84u32)), " ");
        assert_eq!(encode(&BigUint::from(85u32)), "10");
        assert_eq!(encode(&BigUint::from(123_456_789u32)), "2v2B(");
        assert_eq!(encode(&mersenne(61)), "9.h-`FPk|v");

        assert_eq!(decode("10").unwrap(), BigUint::from(85u32));
        assert_eq!(decode("9.h-`FPk|v").unwrap(), mersenne(61));
    }

    #[test]
    fn leading_zero_digits_are_ignored() {
        assert_eq!(decode("0010").unwrap(), BigUint::from(85u32));
    }

    #[test]
    fn rejects_foreign_symbols() {
        for bad in ["abc,", "12;3", "\"", "é", "#"] {
            assert!(matches!(decode(bad), Err(Error::InvalidSymbol(_))), "{bad:?}");
        }
    }

    #[test]
    fn roundtrip_up_to_modulus() {
        let p = mersenne(1279);
        for value in [BigUint::from(1u32), &p - BigUint::from(1u32), p.clone()] {
            assert_eq!(decode(&encode(&value)).unwrap(), value);
        }
    }

    proptest! {
        #[test]
        fn roundtrip_arbitrary(bytes in prop::collection::vec(any::<u8>(), 0..96)) {
            let value = BigUint::from_bytes_be(&bytes);
            let encoded = encode(&value);

            prop_assert!(encoded.bytes().all(|b| ALPHABET.contains(&b)));
            prop_assert_eq!(decode(&encoded).unwrap(), value);
        }
    }
}
