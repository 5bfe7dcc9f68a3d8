#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint_dig::BigUint;
use ppm_elgamal::radix85;

fuzz_target!(|data: &[u8]| {
    // Arbitrary strings must decode or fail cleanly.
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(value) = radix85::decode(text) {
            let reencoded = radix85::encode(&value);
            assert_eq!(radix85::decode(&reencoded).unwrap(), value);
        }
    }

    let value = BigUint::from_bytes_be(data);
    let encoded = radix85::encode(&value);
    assert!(encoded.bytes().all(|b| radix85::ALPHABET.contains(&b)));
    assert_eq!(radix85::decode(&encoded).unwrap(), value);
});
