// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixtures shared by the unit tests.

use std::collections::VecDeque;

use num_bigint_dig::BigUint;
use num_traits::One;
use rand::{CryptoRng, RngCore};

use crate::keypair::{PrivateKey, PublicKey};

/// Secret exponent of the small fixture key.
pub const FIXTURE_X: u64 = 0x01D2_C3B4_A596_8778;

/// `2^n - 1`.
pub fn mersenne(n: usize) -> BigUint {
    (BigUint::one() << n) - BigUint::one()
}

/// Key pair over the Mersenne prime `2^n - 1` with generator 3.
///
/// The bit length is `n`, which is never a multiple of 8 for the exponents
/// used here, so every block is strictly smaller than `p`.
pub fn mersenne_keys(n: usize, x: u64) -> (PublicKey, PrivateKey) {
    let p = mersenne(n);
    let g = BigUint::from(3u32);
    let x = BigUint::from(x);
    let y = g.modpow(&x, &p);

    let public = PublicKey::new(n, p.clone(), g.clone(), y).expect("valid fixture public key");
    let private = PrivateKey::new(n, p, g, x).expect("valid fixture private key");
    (public, private)
}

/// The 61-bit key with 7-byte blocks used by the literal vectors.
pub fn small_keys() -> (PublicKey, PrivateKey) {
    mersenne_keys(61, FIXTURE_X)
}

/// Replays queued values, one per `fill_bytes` call, as big-endian bytes
/// right-aligned in the destination.
///
/// Only for fixtures that need a known ephemeral key.
pub struct ReplayRng {
    values: VecDeque<BigUint>,
}

impl ReplayRng {
    pub fn new<I: IntoIterator<Item = BigUint>>(values: I) -> Self {
        Self { values: values.into_iter().collect() }
    }
}

impl RngCore for ReplayRng {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.fill_bytes(&mut buf);
        u32::from_be_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.fill_bytes(&mut buf);
        u64::from_be_bytes(buf)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let value = self.values.pop_front().expect("replay values exhausted");
        let bytes = value.to_bytes_be();
        let take = bytes.len().min(dest.len());

        dest.fill(0);
        let start = dest.len() - take;
        dest[start..].copy_from_slice(&bytes[bytes.len() - take..]);
    }
}

impl CryptoRng for ReplayRng {}
