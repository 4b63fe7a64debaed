//! Text encodings for secrets and shares
//!
//! Two canonical formats are produced and consumed by this crate:
//!
//! - **Secrets** are written in base 62, digits first, then lowercase, then
//!   uppercase letters. Zero is `"0"`; no other value has a leading zero.
//! - **Shares** are written as `<index>,<value>` with both numbers in decimal
//!   and no whitespace.
//!
//! # Examples
//!
//! ```rust
//! use num_bigint::BigUint;
//! use sharedsecret::codec::{decode_base62, encode_base62};
//!
//! let value = BigUint::from(3843u32); // 62² - 1
//! assert_eq!(encode_base62(&value), "ZZ");
//! assert_eq!(decode_base62("ZZ").unwrap(), value);
//! ```
//!
//! ```rust
//! use sharedsecret::codec::{decode_share, encode_share};
//!
//! let share = decode_share("2,161872477868088873785792630750634181303").unwrap();
//! assert_eq!(*share.index(), 2);
//! assert_eq!(encode_share(&share), "2,161872477868088873785792630750634181303");
//! ```

use num_bigint::BigUint;

use crate::domain::{ShareIndex, ShareRecord};
use crate::error::ParseCause;

/// Base-62 digit alphabet
const BASE62_ALPHABET: &[u8; 62] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Maps a base-62 character to its digit value
fn base62_digit(c: u8) -> Option<u8> {
    let digit = match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'z' => c - b'a' + 10,
        b'A'..=b'Z' => c - b'A' + 36,
        _ => return None,
    };
    Some(digit)
}

/// Encodes a non-negative integer in base 62
#[must_use]
pub fn encode_base62(value: &BigUint) -> String {
    value
        .to_radix_be(62)
        .into_iter()
        .map(|digit| char::from(BASE62_ALPHABET[usize::from(digit)]))
        .collect()
}

/// Decodes base-62 text
///
/// # Errors
/// Returns a description of the problem if the text is empty or contains a
/// character outside the alphabet
pub fn decode_base62(text: &str) -> Result<BigUint, String> {
    if text.is_empty() {
        return Err("empty base-62 text".to_string());
    }

    let digits = text
        .bytes()
        .map(|b| base62_digit(b).ok_or_else(|| format!("unexpected character {:?}", char::from(b))))
        .collect::<Result<Vec<u8>, String>>()?;

    BigUint::from_radix_be(&digits, 62).ok_or_else(|| format!("cannot decode {text:?}"))
}

/// Renders a share in its canonical line form (without the newline)
#[must_use]
pub fn encode_share(share: &ShareRecord) -> String {
    format!("{},{}", share.index(), share.value())
}

/// Plain decimal digits, no sign
fn is_decimal(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Parses one share line
///
/// The line must contain exactly one comma. Both parts are unsigned
/// decimal; whitespace around either part is ignored.
///
/// # Errors
/// Returns the [`ParseCause`] describing why the line is not a share
pub fn decode_share(line: &str) -> Result<ShareRecord, ParseCause> {
    let parts: Vec<&str> = line.split(',').collect();
    let [index, value] = parts.as_slice() else {
        return Err(ParseCause::ExpectedTwoParts);
    };

    let index = index.trim();
    let invalid_index = || ParseCause::InvalidIndex(index.to_string());
    if !is_decimal(index) {
        return Err(invalid_index());
    }
    let raw_index: u64 = index.parse().map_err(|_| invalid_index())?;
    let index = ShareIndex::new(raw_index).ok_or(ParseCause::ZeroIndex)?;

    let value = value.trim();
    if !is_decimal(value) {
        return Err(ParseCause::InvalidValue(value.to_string()));
    }
    let value = BigUint::parse_bytes(value.as_bytes(), 10)
        .ok_or_else(|| ParseCause::InvalidValue(value.to_string()))?;

    Ok(ShareRecord::new(index, value))
}
