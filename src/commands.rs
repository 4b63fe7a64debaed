use std::io::{BufRead, Write};

use rand::{CryptoRng, Rng};

use crate::domain::{GenerationRequest, Secret};
use crate::error::Error;
use crate::generator::{GeneratedShares, ShareGenerator};
use crate::output;
use crate::recovery::{Recovery, RecoveryAssembler};

/// Generate a new secret and `shares` shares of it, `threshold` of which
/// recover it, and write them to `out`
///
/// Parameters are validated before anything is written.
///
/// # Errors
/// Returns an error if the parameters are invalid or output fails
pub fn generate<W: Write + ?Sized>(
    shares: i64,
    threshold: i64,
    out: &mut W,
) -> Result<GeneratedShares, Error> {
    let request = GenerationRequest::from_params(shares, threshold)?;
    generate_with(&mut ShareGenerator::from_os_rng(), &request, None, out)
}

/// Generate shares with an explicit generator, optionally for an existing secret
///
/// # Errors
/// Returns an error if an existing secret is out of range or output fails
pub fn generate_with<R, W>(
    generator: &mut ShareGenerator<R>,
    request: &GenerationRequest,
    existing: Option<Secret>,
    out: &mut W,
) -> Result<GeneratedShares, Error>
where
    R: Rng + CryptoRng,
    W: Write + ?Sized,
{
    let generated = match existing {
        Some(secret) => generator.distribute(secret, request)?,
        None => generator.generate(request),
    };
    output::write_generated(out, &generated)?;
    Ok(generated)
}

/// Recover a secret from share text read to end-of-stream
///
/// Malformed lines go to `diagnostics`; the secret, if any share was found,
/// goes to `out`.
///
/// # Errors
/// Returns an error if reading or writing fails or the engine rejects the shares
pub fn recover<R, E, W>(input: R, diagnostics: E, out: &mut W) -> Result<Recovery, Error>
where
    R: BufRead,
    E: Write,
    W: Write + ?Sized,
{
    let recovery = RecoveryAssembler::new(diagnostics).recover_reader(input)?;
    emit(&recovery, out)?;
    Ok(recovery)
}

/// Recover a secret from individually collected lines
///
/// # Errors
/// Returns an error if writing fails or the engine rejects the shares
pub fn recover_lines<I, S, E, W>(lines: I, diagnostics: E, out: &mut W) -> Result<Recovery, Error>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    E: Write,
    W: Write + ?Sized,
{
    let recovery = RecoveryAssembler::new(diagnostics).recover_lines(lines)?;
    emit(&recovery, out)?;
    Ok(recovery)
}

fn emit<W: Write + ?Sized>(recovery: &Recovery, out: &mut W) -> Result<(), Error> {
    if let Some(secret) = &recovery.secret {
        output::write_recovered(out, secret)?;
    }
    Ok(())
}
