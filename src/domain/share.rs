//! Share records and secrets

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;
use zeroize::Zeroizing;

use crate::codec;
use crate::error::{Error, ParseError};

use super::ShareIndex;

/// One point on the sharing polynomial
///
/// Displays in the canonical `<index>,<decimal-value>` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRecord {
    index: ShareIndex,
    value: BigUint,
}

impl ShareRecord {
    #[must_use]
    pub fn new(index: ShareIndex, value: BigUint) -> Self {
        Self { index, value }
    }

    #[must_use]
    pub fn index(&self) -> ShareIndex {
        self.index
    }

    #[must_use]
    pub fn value(&self) -> &BigUint {
        &self.value
    }
}

impl fmt::Display for ShareRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&codec::encode_share(self))
    }
}

impl FromStr for ShareRecord {
    type Err = ParseError;

    /// Strict parse of a single canonical share line (no decoration handling)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        codec::decode_share(s).map_err(|cause| ParseError::new(s, cause))
    }
}

/// A shared secret
///
/// Only ever shown as base-62 text. Equality is value equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Secret(BigUint);

impl Secret {
    #[must_use]
    pub fn new(value: BigUint) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(&self) -> &BigUint {
        &self.0
    }

    /// Base-62 rendering in a buffer that is wiped on drop
    #[must_use]
    pub fn to_text(&self) -> Zeroizing<String> {
        Zeroizing::new(codec::encode_base62(&self.0))
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl FromStr for Secret {
    type Err = Error;

    /// Parses base-62 text
    ///
    /// ```rust
    /// use sharedsecret::domain::Secret;
    ///
    /// let secret: Secret = "7uPIBqGKMPpProBYFFR3S".parse().unwrap();
    /// assert_eq!(secret.to_string(), "7uPIBqGKMPpProBYFFR3S");
    ///
    /// assert!("not-base62!".parse::<Secret>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        codec::decode_base62(s.trim())
            .map(Self)
            .map_err(Error::InvalidSecret)
    }
}
