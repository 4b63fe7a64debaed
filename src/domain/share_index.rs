//! `ShareIndex` newtype for secret sharing

/// Share index: the x-coordinate a share was evaluated at (>= 1)
///
/// Index 0 is where the secret itself lives and is never handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShareIndex(u64);

impl ShareIndex {
    /// Creates a new share index, `None` for 0
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sharedsecret::domain::ShareIndex;
    ///
    /// let index = ShareIndex::new(42).unwrap();
    /// assert_eq!(*index, 42);
    ///
    /// assert!(ShareIndex::new(0).is_none());
    /// ```
    #[must_use]
    pub fn new(value: u64) -> Option<Self> {
        (value != 0).then_some(Self(value))
    }
}

impl std::ops::Deref for ShareIndex {
    type Target = u64;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ShareIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
