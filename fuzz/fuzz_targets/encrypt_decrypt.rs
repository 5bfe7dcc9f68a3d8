#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint_dig::BigUint;
use num_traits::One;
use ppm_elgamal::{ElGamal, PrivateKey, PublicKey};
use std::sync::OnceLock;

static KEYS: OnceLock<(PublicKey, PrivateKey)> = OnceLock::new();

fuzz_target!(|data: &[u8]| {
    let (public, private) = KEYS.get_or_init(|| {
        let p = (BigUint::one() << 521usize) - BigUint::one();
        let g = BigUint::from(3u32);
        let x = BigUint::from(0x00C0_FFEE_D00D_u64);
        let y = g.modpow(&x, &p);

        (
            PublicKey::new(521, p.clone(), g.clone(), y).unwrap(),
            PrivateKey::new(521, p, g, x).unwrap(),
        )
    });

    let text = String::from_utf8_lossy(data);
    let cipher = ElGamal::encrypt2(&text, public).unwrap();
    assert_eq!(ElGamal::decrypt2(&cipher, private).unwrap(), text);
});
