#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint_dig::BigUint;
use num_traits::One;
use ppm_elgamal::{Ciphertext, ElGamal, PrivateKey};
use std::sync::OnceLock;

static KEY: OnceLock<PrivateKey> = OnceLock::new();

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let key = KEY.get_or_init(|| {
        let p = (BigUint::one() << 127usize) - BigUint::one();
        PrivateKey::new(127, p, BigUint::from(3u32), BigUint::from(0x0F1E_2D3Cu32)).unwrap()
    });

    if let Ok(ciphertext) = text.parse::<Ciphertext>() {
        assert_eq!(ciphertext.to_string().parse::<Ciphertext>().unwrap(), ciphertext);
    }

    // Hostile cipher text must be rejected, not panic.
    let _ = ElGamal::decrypt2(text, key);
});
