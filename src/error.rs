//! Error types.
//!
//! [`Error`] covers everything that aborts an invocation. [`ParseError`] is the
//! per-line failure of the share parser; it is reported and skipped, never
//! propagated as an [`Error`].

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::MAX_SHARE_COUNT;

/// Fatal errors.
#[derive(Debug, Error)]
pub enum Error {
    #[error("share counts must be positive: {name} is {value}")]
    NonPositive { name: &'static str, value: i64 },

    #[error(
        "not enough shares to allow recovery: threshold {threshold} exceeds share count {shares}"
    )]
    ThresholdTooHigh { shares: u64, threshold: u64 },

    #[error("too many shares: {0} exceeds the maximum of {max}", max = MAX_SHARE_COUNT)]
    TooManyShares(u64),

    #[error("invalid secret: {0}")]
    InvalidSecret(String),

    #[error("failed to open {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read shares")]
    Read(#[source] io::Error),

    #[error("failed to write output")]
    Write(#[from] io::Error),

    #[error("duplicate share index {0}")]
    DuplicateIndex(u64),
}

impl Error {
    /// Whether the error stems from how the tool was invoked, in which case
    /// usage text should accompany it.
    #[must_use]
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            Self::NonPositive { .. }
                | Self::ThresholdTooHigh { .. }
                | Self::TooManyShares(_)
                | Self::InvalidSecret(_)
        )
    }
}

/// Why a single line could not be read as a share.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCause {
    #[error("expected two parts")]
    ExpectedTwoParts,

    #[error("invalid index {0:?}")]
    InvalidIndex(String),

    #[error("index must be positive")]
    ZeroIndex,

    #[error("invalid value {0:?}")]
    InvalidValue(String),
}

/// A malformed share line and the reason it was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("reading share {line:?}: {cause}")]
pub struct ParseError {
    /// The offending line with surrounding whitespace trimmed, so a
    /// trailing `\r` or newline never shows up in diagnostics. Inner text
    /// is kept as read.
    pub line: String,
    pub cause: ParseCause,
}

impl ParseError {
    pub(crate) fn new(line: &str, cause: ParseCause) -> Self {
        Self {
            line: line.to_string(),
            cause,
        }
    }
}
