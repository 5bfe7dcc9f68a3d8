// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use rand::rngs::StdRng;
use rand::{CryptoRng, RngCore, SeedableRng};

/// Source of randomness for ephemeral keys and the anti-determinism prefix.
///
/// Implemented for every cryptographically secure generator. Public entry
/// points always draw from [`secure_rng`]; there is no way to seed them.
pub trait RandomSource: RngCore + CryptoRng {}

impl<R: RngCore + CryptoRng> RandomSource for R {}

/// A freshly OS-seeded generator.
pub fn secure_rng() -> StdRng {
    StdRng::from_os_rng()
}
