//! Shamir secret sharing over the prime field GF(2^127 - 1)
//!
//! The secret is the constant term of a random polynomial of degree
//! `threshold - 1`. A share is the polynomial evaluated at a non-zero index.
//! Any `threshold` shares determine the polynomial, and Lagrange
//! interpolation at zero gives the secret back.
//!
//! This module knows nothing about pools, shuffling or text input. It
//! evaluates at `1..=total` and interpolates whatever points it is given.

use std::collections::HashSet;
use std::sync::LazyLock;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::{CryptoRng, Rng};

use crate::domain::{Secret, ShareIndex, ShareRecord};
use crate::error::Error;

/// The field modulus, 2^127 - 1
pub static PRIME: LazyLock<BigUint> = LazyLock::new(|| (BigUint::one() << 127u32) - 1u32);

/// Draws a uniform field element
///
/// A random `u128` shifted down to 127 bits covers `[0, 2^127 - 1]`; the only
/// value outside the field is the modulus itself, which is redrawn.
fn random_element<R: Rng + CryptoRng + ?Sized>(rng: &mut R) -> BigUint {
    loop {
        let candidate = BigUint::from(rng.random::<u128>() >> 1);
        if candidate < *PRIME {
            return candidate;
        }
    }
}

/// Polynomial with coefficients in the field, constant term first
struct Polynomial {
    coefficients: Vec<BigUint>,
}

impl Polynomial {
    /// Random polynomial of degree `threshold - 1` with the given constant term
    fn random<R: Rng + CryptoRng + ?Sized>(secret: BigUint, threshold: u64, rng: &mut R) -> Self {
        let mut coefficients = Vec::with_capacity(usize::try_from(threshold).unwrap_or(0));
        coefficients.push(secret);
        for _ in 1..threshold {
            coefficients.push(random_element(rng));
        }
        Self { coefficients }
    }

    /// Horner evaluation at `x`
    fn evaluate(&self, x: u64) -> BigUint {
        self.coefficients
            .iter()
            .rev()
            .fold(BigUint::zero(), |acc, c| (acc * x + c) % &*PRIME)
    }

    fn shares(&self, total: u64) -> Vec<ShareRecord> {
        (1..=total)
            .filter_map(|x| {
                let index = ShareIndex::new(x)?;
                Some(ShareRecord::new(index, self.evaluate(x)))
            })
            .collect()
    }
}

/// Creates a fresh random secret and `total` shares of it
///
/// Shares are evaluated at indices `1..=total`, in order. `threshold` must be
/// between 1 and `total`; callers validate this through
/// [`GenerationRequest`](crate::domain::GenerationRequest).
pub fn generate<R: Rng + CryptoRng + ?Sized>(
    total: u64,
    threshold: u64,
    rng: &mut R,
) -> (Vec<ShareRecord>, Secret) {
    let secret = random_element(rng);
    let polynomial = Polynomial::random(secret.clone(), threshold, rng);
    (polynomial.shares(total), Secret::new(secret))
}

/// Creates `total` shares of an existing secret
///
/// # Errors
/// Returns an error if the secret does not fit in the field
pub fn distribute<R: Rng + CryptoRng + ?Sized>(
    secret: &Secret,
    total: u64,
    threshold: u64,
    rng: &mut R,
) -> Result<Vec<ShareRecord>, Error> {
    if *secret.value() >= *PRIME {
        return Err(Error::InvalidSecret(
            "value does not fit in the 127-bit field".to_string(),
        ));
    }
    let polynomial = Polynomial::random(secret.value().clone(), threshold, rng);
    Ok(polynomial.shares(total))
}

/// Interpolates the given shares at zero
///
/// Values are reduced modulo the field prime first. No share count is
/// checked: fewer points than the original threshold interpolate a
/// lower-degree polynomial and produce some other value. An empty slice
/// yields the zero secret.
///
/// # Errors
/// Returns an error if two shares carry the same index
pub fn recover(shares: &[ShareRecord]) -> Result<Secret, Error> {
    let mut seen = HashSet::with_capacity(shares.len());
    for share in shares {
        if !seen.insert(share.index()) {
            return Err(Error::DuplicateIndex(*share.index()));
        }
    }

    let prime = &*PRIME;
    let mut secret = BigUint::zero();

    for (i, share) in shares.iter().enumerate() {
        let xi = BigUint::from(*share.index());
        let mut numerator = BigUint::one();
        let mut denominator = BigUint::one();

        for (j, other) in shares.iter().enumerate() {
            if i == j {
                continue;
            }
            let xj = BigUint::from(*other.index());
            // l_i(0) = prod x_j / (x_j - x_i)
            numerator = numerator * &xj % prime;
            denominator = denominator * ((&xj + prime - &xi) % prime) % prime;
        }

        // Fermat inverse; the denominator is non-zero since indices are
        // distinct and smaller than the prime.
        let inverse = denominator.modpow(&(prime - 2u32), prime);
        let term = share.value() % prime * numerator % prime * inverse % prime;
        secret = (secret + term) % prime;
    }

    Ok(Secret::new(secret))
}
