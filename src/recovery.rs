//! Assembling a secret from noisy share input
//!
//! Every line goes through [`parse_line`]. Good records are collected in input
//! order; bad lines are reported to the diagnostic sink and skipped. The
//! collected records are handed to the engine as they are: no dedup, no
//! count check. A repeated index is named in the diagnostics as soon as it
//! is seen; the engine then refuses the batch. Nothing in the input says what the threshold was, so an
//! under-threshold set simply recovers a different value.

use std::collections::HashSet;
use std::io::{BufRead, Write};

use tracing::{debug, info, warn};
use zeroize::Zeroizing;

use crate::domain::{Secret, ShareIndex, ShareRecord};
use crate::engine;
use crate::error::Error;
use crate::parser::parse_line;

/// Outcome of one recovery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recovery {
    /// The interpolated secret, `None` if no share was found
    pub secret: Option<Secret>,
    /// Records handed to the engine
    pub consumed: usize,
    /// Lines rejected by the parser
    pub rejected: usize,
}

/// Drives the parser over an input and delegates to the engine
pub struct RecoveryAssembler<W> {
    diagnostics: W,
    records: Vec<ShareRecord>,
    seen: HashSet<ShareIndex>,
    rejected: usize,
}

impl<W: Write> RecoveryAssembler<W> {
    /// Creates an assembler reporting malformed lines to `diagnostics`
    pub fn new(diagnostics: W) -> Self {
        Self {
            diagnostics,
            records: Vec::new(),
            seen: HashSet::new(),
            rejected: 0,
        }
    }

    /// Recovers from already split lines
    ///
    /// # Errors
    /// Returns an error if diagnostics cannot be written or the engine
    /// rejects the collected shares
    pub fn recover_lines<I, S>(mut self, lines: I) -> Result<Recovery, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.feed(line.as_ref())?;
        }
        self.finish()
    }

    /// Recovers from a stream, reading it to the end
    ///
    /// Bytes that are not UTF-8 are replaced and left for the parser to
    /// reject, so they never abort the batch.
    ///
    /// # Errors
    /// Returns an error if the stream cannot be read, diagnostics cannot be
    /// written, or the engine rejects the collected shares
    pub fn recover_reader<R: BufRead>(mut self, mut reader: R) -> Result<Recovery, Error> {
        let mut buf = Zeroizing::new(Vec::new());
        loop {
            buf.clear();
            let read = reader.read_until(b'\n', &mut buf).map_err(Error::Read)?;
            if read == 0 {
                break;
            }
            let line = Zeroizing::new(String::from_utf8_lossy(&buf).into_owned());
            self.feed(&line)?;
        }
        self.finish()
    }

    fn feed(&mut self, line: &str) -> Result<(), Error> {
        match parse_line(line) {
            Ok(Some(record)) => {
                if !self.seen.insert(record.index()) {
                    warn!(index = *record.index(), "repeated share index");
                    writeln!(
                        self.diagnostics,
                        "reading share {:?}: duplicate index {}",
                        line.trim(),
                        record.index()
                    )?;
                }
                self.records.push(record);
            }
            Ok(None) => {}
            Err(err) => {
                debug!(cause = %err.cause, "rejected share line");
                self.rejected += 1;
                writeln!(self.diagnostics, "{err}")?;
            }
        }
        Ok(())
    }

    fn finish(mut self) -> Result<Recovery, Error> {
        let consumed = self.records.len();
        info!(consumed, rejected = self.rejected, "share input read");

        if self.records.is_empty() {
            writeln!(self.diagnostics, "no shares found")?;
            return Ok(Recovery {
                secret: None,
                consumed,
                rejected: self.rejected,
            });
        }

        let secret = engine::recover(&self.records)?;
        Ok(Recovery {
            secret: Some(secret),
            consumed,
            rejected: self.rejected,
        })
    }
}
