//! Threshold newtype for secret sharing

use crate::error::Error;

/// Minimum number of shares needed to recover the secret (>= 1)
///
/// A threshold of 1 is accepted: every share then carries the secret on its own.
/// Whether that is useful is the caller's decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Threshold(u64);

impl Threshold {
    /// Creates a new threshold, returning an error if value < 1
    ///
    /// # Errors
    /// Returns an error if the threshold is not positive
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sharedsecret::domain::Threshold;
    ///
    /// let threshold = Threshold::new(3).unwrap();
    /// assert_eq!(*threshold, 3);
    ///
    /// assert!(Threshold::new(0).is_err());
    /// assert!(Threshold::new(-10).is_err());
    /// ```
    pub fn new(value: i64) -> Result<Self, Error> {
        match u64::try_from(value) {
            Ok(k) if k >= 1 => Ok(Self(k)),
            _ => Err(Error::NonPositive { name: "k", value }),
        }
    }
}

impl std::ops::Deref for Threshold {
    type Target = u64;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
