// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Markers that flag a stored value as encrypted.
//!
//! PPM encloses ciphertext in `#?#` (hashed values) or `#!#` (passwords).
//! The cipher never emits these itself.

/// Delimiter PPM uses for hashed values.
pub const HASH_DELIMITER: &str = "#?#";

/// Delimiter PPM uses for passwords.
pub const PASSWORD_DELIMITER: &str = "#!#";

/// The two delimiter kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Hash,
    Password,
}

impl Delimiter {
    pub fn as_str(self) -> &'static str {
        match self {
            Delimiter::Hash => HASH_DELIMITER,
            Delimiter::Password => PASSWORD_DELIMITER,
        }
    }
}

/// Returns the delimiter enclosing `text`, if any.
///
/// The password delimiter wins when both would match.
pub fn delimiter_of(text: &str) -> Option<Delimiter> {
    [Delimiter::Password, Delimiter::Hash]
        .into_iter()
        .find(|d| enclosed(text, d.as_str()).is_some())
}

/// `true` when `text` is enclosed by one of the delimiters.
pub fn is_encrypted(text: &str) -> bool {
    delimiter_of(text).is_some()
}

/// The text between the delimiters, or `text` itself when it isn't enclosed.
pub fn strip_delimiters(text: &str) -> &str {
    delimiter_of(text)
        .and_then(|d| enclosed(text, d.as_str()))
        .unwrap_or(text)
}

/// Encloses `cipher_text` in `delimiter`.
pub fn wrap(cipher_text: &str, delimiter: Delimiter) -> String {
    let d = delimiter.as_str();
    format!("{d}{cipher_text}{d}")
}

fn enclosed<'a>(text: &'a str, delimiter: &str) -> Option<&'a str> {
    if text.len() < 2 * delimiter.len() {
        return None;
    }
    text.strip_prefix(delimiter)?.strip_suffix(delimiter)
}
