//! Property tests for the generate/recover workflow
//!
//! Each case builds an oversampled pool of at least 10 000 points, so these
//! run fewer cases than the quickcheck default.

use std::collections::HashSet;
use std::io::Cursor;

use quickcheck::{Arbitrary, Gen, QuickCheck};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use sharedsecret::commands;
use sharedsecret::config::MIN_POOL_SIZE;
use sharedsecret::domain::GenerationRequest;
use sharedsecret::engine;
use sharedsecret::generator::ShareGenerator;

const CASES: u64 = 20;

/// Wrapper for valid share count and threshold pairs
#[derive(Clone, Copy, Debug)]
struct ValidParams {
    shares: i64,
    threshold: i64,
}

impl Arbitrary for ValidParams {
    fn arbitrary(g: &mut Gen) -> Self {
        // Share count between 1 and 8 (keep it reasonable for testing)
        let shares = i64::from(u8::arbitrary(g) % 8) + 1;
        let threshold = i64::from(u8::arbitrary(g)) % shares + 1;
        ValidParams { shares, threshold }
    }
}

impl ValidParams {
    fn request(self) -> GenerationRequest {
        GenerationRequest::from_params(self.shares, self.threshold).unwrap()
    }
}

/// Exactly `n` shares, distinct indices, all inside the pool
fn prop_share_count_and_indices(params: ValidParams, seed: u64) -> bool {
    let request = params.request();
    let generated = ShareGenerator::new(StdRng::seed_from_u64(seed)).generate(&request);

    let indices: HashSet<u64> = generated.shares.iter().map(|s| *s.index()).collect();
    let pool = request.share_count().pool_size();

    generated.shares.len() == usize::try_from(params.shares).unwrap()
        && indices.len() == generated.shares.len()
        && indices.iter().all(|&i| (1..=pool).contains(&i))
        && pool >= MIN_POOL_SIZE
}

/// Any selection of at least `k` distributed shares recovers the secret
fn prop_any_threshold_subset_recovers(params: ValidParams, seed: u64, extra: u8) -> bool {
    let request = params.request();
    let generated = ShareGenerator::new(StdRng::seed_from_u64(seed)).generate(&request);

    let mut selection = generated.shares.clone();
    selection.shuffle(&mut StdRng::seed_from_u64(seed.wrapping_add(1)));
    let spare = params.shares - params.threshold;
    let take = params.threshold + i64::from(extra) % (spare + 1);
    selection.truncate(usize::try_from(take).unwrap());

    engine::recover(&selection).is_ok_and(|secret| secret == generated.secret)
}

/// Full generation text and its share lines alone recover the same secret
fn prop_decorated_output_recovers(params: ValidParams, seed: u64) -> bool {
    let request = params.request();
    let mut generator = ShareGenerator::new(StdRng::seed_from_u64(seed));
    let mut text = Vec::new();
    let Ok(generated) = commands::generate_with(&mut generator, &request, None, &mut text) else {
        return false;
    };
    let text = String::from_utf8(text).unwrap();
    let shares_only: Vec<&str> = text.lines().skip(2).collect();

    let mut from_full = Vec::new();
    let mut from_shares = Vec::new();
    let full = commands::recover(Cursor::new(text.clone()), std::io::sink(), &mut from_full);
    let bare = commands::recover_lines(shares_only, std::io::sink(), &mut from_shares);

    full.is_ok()
        && bare.is_ok()
        && from_full == from_shares
        && from_full == format!("{}\n", generated.secret).into_bytes()
}

#[test]
fn share_count_and_indices() {
    QuickCheck::new()
        .tests(CASES)
        .quickcheck(prop_share_count_and_indices as fn(ValidParams, u64) -> bool);
}

#[test]
fn any_threshold_subset_recovers() {
    QuickCheck::new()
        .tests(CASES)
        .quickcheck(prop_any_threshold_subset_recovers as fn(ValidParams, u64, u8) -> bool);
}

#[test]
fn decorated_output_recovers() {
    QuickCheck::new()
        .tests(CASES)
        .quickcheck(prop_decorated_output_recovers as fn(ValidParams, u64) -> bool);
}
