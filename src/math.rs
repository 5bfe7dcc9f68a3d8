// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Big integer helpers used by the block cipher.
//!
//! Everything here is stateless. Randomness is only consumed by
//! [`choose_ephemeral_key`], and always through an explicit [`RandomSource`].

use num_bigint_dig::{BigUint, ModInverse};
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::error::{Error, Result};
use crate::util::random::RandomSource;

/// Computes `base^exponent mod modulus`.
///
/// # Panics
/// Panics if `modulus` is zero.
#[inline]
pub fn mod_pow(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> BigUint {
    assert!(!modulus.is_zero(), "modulus must be non-zero");
    base.modpow(exponent, modulus)
}

/// Greatest common divisor.
#[inline]
pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    a.gcd(b)
}

/// Computes `value⁻¹ mod modulus`.
///
/// Returns [`Error::NoInverse`] when `gcd(value, modulus) != 1` or the
/// modulus is zero.
pub fn mod_inverse(value: &BigUint, modulus: &BigUint) -> Result<BigUint> {
    if modulus.is_zero() {
        return Err(Error::NoInverse);
    }

    let reduced = value % modulus;
    let inverse = (&reduced)
        .mod_inverse(modulus)
        .ok_or(Error::NoInverse)?
        .to_biguint()
        .ok_or(Error::NoInverse)?;

    Ok(inverse % modulus)
}

/// Draws the per-block ephemeral exponent `k` for modulus `p`.
///
/// `k` is a uniformly random integer of `bits(p)` bits with its lowest bit
/// forced on, redrawn until `gcd(k, p - 1) == 1`. The value may exceed `p`;
/// the legacy peer draws it the same way.
pub fn choose_ephemeral_key<R: RandomSource>(p: &BigUint, rng: &mut R) -> BigUint {
    let bits = p.bits();
    let p_minus_1 = p - BigUint::one();
    let len = bits.div_ceil(8).max(1);
    let excess = len * 8 - bits.max(1);
    let mut buf = vec![0u8; len];

    loop {
        rng.fill_bytes(&mut buf);
        buf[0] &= 0xFF >> excess;
        buf[len - 1] |= 1;

        let k = BigUint::from_bytes_be(&buf);
        if gcd(&k, &p_minus_1).is_one() {
            return k;
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::testing::{ReplayRng, mersenne};
    use crate::util::random::secure_rng;

    #[test]
    fn mod_pow_small_values() {
        let r = mod_pow(&BigUint::from(4u32), &BigUint::from(13u32), &BigUint::from(497u32));
        assert_eq!(r, BigUint::from(445u32));
    }

    #[test]
    fn gcd_basic() {
        assert_eq!(gcd(&BigUint::from(48u32), &BigUint::from(18u32)), BigUint::from(6u32));
        assert_eq!(gcd(&BigUint::from(17u32), &BigUint::zero()), BigUint::from(17u32));
    }

    #[test]
    fn mod_inverse_small_values() {
        let inv = mod_inverse(&BigUint::from(3u32), &BigUint::from(11u32)).unwrap();
        assert_eq!(inv, BigUint::from(4u32));

        let inv = mod_inverse(&BigUint::from(10u32), &BigUint::from(17u32)).unwrap();
        assert_eq!(inv, BigUint::from(12u32));
    }

    #[test]
    fn mod_inverse_reduces_value_first() {
        let inv = mod_inverse(&BigUint::from(14u32), &BigUint::from(11u32)).unwrap();
        assert_eq!(inv, BigUint::from(4u32));
    }

    #[test]
    fn mod_inverse_not_coprime() {
        let result = mod_inverse(&BigUint::from(6u32), &BigUint::from(9u32));
        assert_eq!(result, Err(Error::NoInverse));

        let result = mod_inverse(&BigUint::zero(), &BigUint::from(7u32));
        assert_eq!(result, Err(Error::NoInverse));
    }

    #[test]
    fn mod_inverse_large_modulus() {
        let p = mersenne(1279);
        let value = BigUint::from(0xDEAD_BEEF_u64) * BigUint::from(0x1234_5678_9ABC_u64);

        let inv = mod_inverse(&value, &p).unwrap();
        assert_eq!((&value * &inv) % &p, BigUint::one());
        assert!(inv < p);
    }

    #[test]
    fn mod_inverse_of_modulus_multiple_or_zero_modulus() {
        let p = mersenne(127);
        assert_eq!(mod_inverse(&p, &p), Err(Error::NoInverse));
        assert_eq!(mod_inverse(&(&p * BigUint::from(3u32)), &p), Err(Error::NoInverse));
        assert_eq!(mod_inverse(&BigUint::from(5u32), &BigUint::zero()), Err(Error::NoInverse));
    }

    #[test]
    fn mod_inverse_matches_fermat_inverse() {
        // For prime p, v^(p-2) is the inverse of v.
        let p = mersenne(127);
        let exponent = &p - BigUint::from(2u32);

        for v in [2u64, 0xFFFF_FFFF, 0x0123_4567_89AB_CDEF] {
            let v = BigUint::from(v);
            assert_eq!(mod_inverse(&v, &p).unwrap(), mod_pow(&v, &exponent, &p));
        }
    }

    #[test]
    fn ephemeral_key_properties() {
        let p = mersenne(127);
        let p_minus_1 = &p - BigUint::one();
        let mut rng = secure_rng();

        for _ in 0..32 {
            let k = choose_ephemeral_key(&p, &mut rng);
            assert!(k.bits() <= p.bits());
            assert_eq!(&k % BigUint::from(2u32), BigUint::one());
            assert!(gcd(&k, &p_minus_1).is_one());
        }
    }

    #[test]
    fn ephemeral_key_retries_until_coprime() {
        // 2^61 - 2 is divisible by 3, so 3 is rejected and 0x...df1 accepted.
        let p = mersenne(61);
        let mut rng =
            ReplayRng::new([BigUint::from(3u32), BigUint::from(0x0123_4567_89AB_CDF1_u64)]);

        let k = choose_ephemeral_key(&p, &mut rng);
        assert_eq!(k, BigUint::from(0x0123_4567_89AB_CDF1_u64));
    }

    #[test]
    fn ephemeral_key_masks_excess_bits_and_forces_odd() {
        let p = mersenne(61);
        let mut rng = ReplayRng::new([BigUint::from(0xFFFF_FFFF_FFFF_FFFE_u64)]);

        let k = choose_ephemeral_key(&p, &mut rng);
        assert_eq!(k, BigUint::from(0x1FFF_FFFF_FFFF_FFFF_u64));
    }
}
