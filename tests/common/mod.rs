// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(dead_code)]

use num_bigint_dig::BigUint;
use num_traits::One;
use ppm_elgamal::{PrivateKey, PublicKey};

/// The 61-bit fixture key in key file form.
pub const PUBLIC_KEY_FILE: &str = "ElGamal Public Key\n61\n1fffffffffffffff\n3\n1dcfb483218a7945\n";
pub const PRIVATE_KEY_FILE: &str =
    "ElGamal Private Key\n61\n1fffffffffffffff\n3\n1d2c3b4a5968778\n";

/// `encrypt("AB")` under the fixture key with k = 0x0123456789abcdf1.
pub const AB_VECTOR: &str = "9}?X8r35R,7Mm|~?Y{(C";

/// `encrypt("Hello, PPM!")` under the fixture key, two blocks.
pub const HELLO_VECTOR: &str = "9}?X8r35R,6aw|HG3n=k;4n:3)=Pq||,6jGLr$_ 2P";

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Keys over `2^n - 1` with generator 3.
pub fn mersenne_keys(n: usize, x: u64) -> (PublicKey, PrivateKey) {
    let p = (BigUint::one() << n) - BigUint::one();
    let g = BigUint::from(3u32);
    let x = BigUint::from(x);
    let y = g.modpow(&x, &p);

    (
        PublicKey::new(n, p.clone(), g.clone(), y).unwrap(),
        PrivateKey::new(n, p, g, x).unwrap(),
    )
}
