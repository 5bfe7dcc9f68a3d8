#![no_main]

use libfuzzer_sys::fuzz_target;
use ppm_elgamal::text::{from_padded_bytes, to_padded_bytes};

fuzz_target!(|data: &[u8]| {
    // Decoding arbitrary bytes never panics.
    let _ = from_padded_bytes(data);

    let Some((&n, rest)) = data.split_first() else {
        return;
    };
    let block_length = usize::from(n % 127) + 1;
    let text = String::from_utf8_lossy(rest);

    let padded = to_padded_bytes(&text, block_length);
    assert_eq!(padded.len() % block_length, 0);
    assert_eq!(from_padded_bytes(&padded).unwrap(), text);
});
