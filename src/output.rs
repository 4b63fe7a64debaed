//! Canonical text output
//!
//! Generation:
//!
//! ```text
//! secret: <base62-secret>
//! shares (need at least <k> of these for recovery):
//! <index>,<decimal-value>
//! ...
//! ```
//!
//! Recovery is the base-62 secret on a line of its own. Both shapes are
//! accepted unchanged by the [`parser`](crate::parser).

use std::io::{self, Write};

use crate::config::{SECRET_PREFIX, SHARES_PREFIX};
use crate::domain::Secret;
use crate::generator::GeneratedShares;

/// Writes a generation result
///
/// # Errors
/// Returns an error if the output cannot be written
pub fn write_generated<W: Write + ?Sized>(out: &mut W, generated: &GeneratedShares) -> io::Result<()> {
    writeln!(out, "{SECRET_PREFIX}{}", generated.secret.to_text().as_str())?;
    writeln!(
        out,
        "{SHARES_PREFIX} (need at least {} of these for recovery):",
        *generated.threshold
    )?;
    for share in &generated.shares {
        writeln!(out, "{share}")?;
    }
    Ok(())
}

/// Writes a recovered secret
///
/// # Errors
/// Returns an error if the output cannot be written
pub fn write_recovered<W: Write + ?Sized>(out: &mut W, secret: &Secret) -> io::Result<()> {
    writeln!(out, "{}", secret.to_text().as_str())
}
