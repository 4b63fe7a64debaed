//! Validation of generation parameters

use crate::error::Error;

use super::{ShareCount, Threshold};

/// Validated pair of threshold and share count
///
/// Enforces the invariant that threshold <= `share_count` at the type level.
/// This prevents creating requests where more shares are required for
/// recovery than are actually handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    threshold: Threshold,
    share_count: ShareCount,
}

impl GenerationRequest {
    /// Creates a new request
    ///
    /// # Errors
    /// Returns an error if threshold exceeds share count
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sharedsecret::domain::{GenerationRequest, ShareCount, Threshold};
    ///
    /// let request = GenerationRequest::new(
    ///     Threshold::new(3).unwrap(),
    ///     ShareCount::new(5).unwrap()
    /// ).unwrap();
    ///
    /// assert_eq!(*request.threshold(), 3);
    /// assert_eq!(*request.share_count(), 5);
    ///
    /// let result = GenerationRequest::new(
    ///     Threshold::new(5).unwrap(),
    ///     ShareCount::new(3).unwrap()
    /// );
    /// assert!(result.is_err());
    /// ```
    pub fn new(threshold: Threshold, share_count: ShareCount) -> Result<Self, Error> {
        if *threshold > *share_count {
            return Err(Error::ThresholdTooHigh {
                shares: *share_count,
                threshold: *threshold,
            });
        }
        Ok(Self {
            threshold,
            share_count,
        })
    }

    /// Validates raw caller parameters `n` (shares) and `k` (threshold)
    ///
    /// Positivity of both is checked before their relation.
    ///
    /// # Errors
    /// Returns an error if either value is not positive, `n` is too large, or `k > n`
    pub fn from_params(shares: i64, threshold: i64) -> Result<Self, Error> {
        let share_count = ShareCount::new(shares)?;
        let threshold = Threshold::new(threshold)?;
        Self::new(threshold, share_count)
    }

    /// Gets the threshold value
    #[must_use]
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Gets the share count value
    #[must_use]
    pub fn share_count(&self) -> ShareCount {
        self.share_count
    }
}
