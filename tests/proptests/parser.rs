//! Property tests for the tolerant share parser

use num_bigint::BigUint;
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use sharedsecret::codec::encode_base62;
use sharedsecret::error::Error;
use sharedsecret::parser::parse_line;
use sharedsecret::recovery::RecoveryAssembler;

const REFERENCE: [&str; 3] = [
    "1,19943338053965968504353533017903769217",
    "2,161872477868088873785792630750634181303",
    "5,160274174127002500413544256698187925606",
];

/// Text that can never be a share line: no commas
#[derive(Clone, Debug)]
struct Junk(String);

impl Arbitrary for Junk {
    fn arbitrary(g: &mut Gen) -> Self {
        Junk(String::arbitrary(g).replace(',', ""))
    }
}

/// Run of spaces and tabs
#[derive(Clone, Debug)]
struct Padding(String);

impl Arbitrary for Padding {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 4;
        Padding(
            (0..len)
                .map(|_| if bool::arbitrary(g) { ' ' } else { '\t' })
                .collect(),
        )
    }
}

/// Canonical share lines parse back to the same index and value, padded or not
#[quickcheck]
fn prop_canonical_share_line_parses(index: u64, value: u128, left: Padding, right: Padding) -> bool {
    if index == 0 {
        return true;
    }

    let line = format!("{}{index},{value}{}", left.0, right.0);
    let Ok(Some(share)) = parse_line(&line) else {
        return false;
    };

    *share.index() == index && *share.value() == BigUint::from(value)
}

/// Secret lines and share headers are always decoration
#[quickcheck]
fn prop_generation_headers_are_skipped(secret: u128, threshold: u64) -> bool {
    let secret_line = format!("secret: {}", encode_base62(&BigUint::from(secret)));
    let header = format!("shares (need at least {threshold} of these for recovery):");

    matches!(parse_line(&secret_line), Ok(None)) && matches!(parse_line(&header), Ok(None))
}

/// Arbitrary input never aborts recovery; every rejected line gets exactly
/// one diagnostic line
#[quickcheck]
fn prop_arbitrary_input_never_aborts(lines: Vec<String>) -> bool {
    let mut diagnostics = Vec::new();
    match RecoveryAssembler::new(&mut diagnostics).recover_lines(&lines) {
        Ok(recovery) => {
            let notes = usize::from(recovery.consumed == 0);
            let written = String::from_utf8(diagnostics).unwrap_or_default();
            written.lines().count() == recovery.rejected + notes
        }
        // Random lines that happen to repeat an index are the one fatal case
        Err(Error::DuplicateIndex(_)) => true,
        Err(_) => false,
    }
}

/// Junk mixed into valid shares never changes the recovered secret
#[quickcheck]
fn prop_junk_does_not_change_secret(junk: Vec<Junk>) -> bool {
    let mut lines: Vec<String> = junk.into_iter().map(|Junk(s)| s).collect();
    for (offset, share) in REFERENCE.iter().enumerate() {
        let at = (offset * 7) % (lines.len() + 1);
        lines.insert(at, (*share).to_string());
    }

    let Ok(recovery) = RecoveryAssembler::new(std::io::sink()).recover_lines(&lines) else {
        return false;
    };

    recovery.consumed == 3
        && recovery
            .secret
            .is_some_and(|secret| secret.to_string() == "7uPIBqGKMPpProBYFFR3S")
}
