// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Errors that can occur while encrypting, decrypting or loading keys.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Value has no modular inverse")]
    NoInverse,

    #[error("Invalid ciphertext symbol: {0}")]
    InvalidSymbol(String),

    #[error("Malformed text encoding: {0}")]
    MalformedEncoding(String),

    #[error("Text doesn't appear to be encoded or there is an encryption key mismatch")]
    NotEncoded,

    #[error("Plaintext block exceeds the key modulus")]
    PlaintextTooLarge,

    #[error("Invalid key file: {0}")]
    InvalidKeyFile(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
