//! `ShareCount` newtype for share generation

use crate::config::MAX_SHARE_COUNT;
use crate::error::Error;

/// Number of shares to distribute (1..=255)
///
/// This is the number of shares handed out, not the size of the pool they are
/// drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ShareCount(u64);

impl ShareCount {
    /// Minimum valid share count
    pub const MIN: u64 = 1;

    /// Maximum valid share count
    pub const MAX: u64 = MAX_SHARE_COUNT;

    /// Creates a new share count from a caller-supplied value
    ///
    /// # Errors
    /// Returns an error if the count is not positive or exceeds [`ShareCount::MAX`]
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sharedsecret::domain::ShareCount;
    ///
    /// let count = ShareCount::new(5).unwrap();
    /// assert_eq!(*count, 5);
    ///
    /// assert!(ShareCount::new(0).is_err());
    /// assert!(ShareCount::new(-1).is_err());
    /// assert!(ShareCount::new(256).is_err());
    /// ```
    pub fn new(value: i64) -> Result<Self, Error> {
        let Ok(count) = u64::try_from(value) else {
            return Err(Error::NonPositive { name: "n", value });
        };
        if count < Self::MIN {
            return Err(Error::NonPositive { name: "n", value });
        }
        if count > Self::MAX {
            return Err(Error::TooManyShares(count));
        }
        Ok(Self(count))
    }

    /// Number of shares the engine is asked for: `max(n², MIN_POOL_SIZE)`
    #[must_use]
    pub fn pool_size(self) -> u64 {
        (self.0 * self.0).max(crate::config::MIN_POOL_SIZE)
    }
}

impl std::ops::Deref for ShareCount {
    type Target = u64;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MIN_POOL_SIZE;

    #[test]
    fn test_pool_size_has_floor() {
        assert_eq!(ShareCount::new(1).unwrap().pool_size(), MIN_POOL_SIZE);
        assert_eq!(ShareCount::new(5).unwrap().pool_size(), MIN_POOL_SIZE);
        assert_eq!(ShareCount::new(100).unwrap().pool_size(), MIN_POOL_SIZE);
    }

    #[test]
    fn test_pool_size_grows_quadratically() {
        assert_eq!(ShareCount::new(101).unwrap().pool_size(), 10_201);
        assert_eq!(ShareCount::new(255).unwrap().pool_size(), 65_025);
    }

    #[test]
    fn test_share_count_cap() {
        assert_eq!(*ShareCount::new(255).unwrap(), ShareCount::MAX);
        assert!(matches!(
            ShareCount::new(256),
            Err(Error::TooManyShares(256))
        ));
        assert!(ShareCount::new(256).unwrap_err().is_usage());
    }

    #[test]
    fn test_negative_count_reports_value() {
        let err = ShareCount::new(-1).unwrap_err().to_string();
        assert!(err.contains("must be positive"));
        assert!(err.contains("-1"));
    }
}
