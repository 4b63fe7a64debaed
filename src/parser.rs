//! Tolerant parsing of share text
//!
//! Share material arrives typed by hand or pasted from wherever it was
//! stored, often together with the rest of the generation output. The parser
//! therefore:
//!
//! - trims each line,
//! - skips blank lines and the `secret: ...` / `shares ...` lines written by
//!   [`output`](crate::output),
//! - turns everything else into a [`ShareRecord`] or a [`ParseError`].
//!
//! A failed line never stops the caller from moving on to the next one.

use tracing::trace;

use crate::codec;
use crate::config::{SECRET_PREFIX, SHARES_PREFIX};
use crate::domain::ShareRecord;
use crate::error::ParseError;

/// Parses one raw input line
///
/// Returns `Ok(None)` for lines that are decoration rather than shares.
///
/// # Errors
/// Returns a [`ParseError`] holding the trimmed line and the reason it was
/// rejected
///
/// # Examples
///
/// ```rust
/// use sharedsecret::parser::parse_line;
///
/// let share = parse_line("  3,1234  ").unwrap().unwrap();
/// assert_eq!(*share.index(), 3);
///
/// assert!(parse_line("secret: 7uPIBqGKMPpProBYFFR3S").unwrap().is_none());
/// assert!(parse_line("shares (need at least 3 of these for recovery):").unwrap().is_none());
/// assert!(parse_line("").unwrap().is_none());
///
/// let err = parse_line("foo").unwrap_err();
/// assert_eq!(err.to_string(), "reading share \"foo\": expected two parts");
/// ```
pub fn parse_line(raw: &str) -> Result<Option<ShareRecord>, ParseError> {
    let line = raw.trim();

    if is_decoration(line) {
        trace!("skipping decoration line");
        return Ok(None);
    }

    codec::decode_share(line)
        .map(Some)
        .map_err(|cause| ParseError::new(line, cause))
}

/// Whether a trimmed line is blank or one of the generation output headers
fn is_decoration(line: &str) -> bool {
    line.is_empty() || line.starts_with(SECRET_PREFIX) || line.starts_with(SHARES_PREFIX)
}
