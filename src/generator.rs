//! Share generation with an oversampled pool
//!
//! Handing out shares `1..=n` would tell anyone holding them how many shares
//! exist, and with that something about the threshold. Instead the engine is
//! asked for `max(n², MIN_POOL_SIZE)` shares, the pool is shuffled uniformly,
//! and the first `n` are kept. Distributed indices are then scattered over a
//! range far larger than `n`.
//!
//! The shuffle is only as good as its randomness source, so the generator
//! requires a [`CryptoRng`]. Tests inject a seeded [`StdRng`].

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng, SeedableRng};
use tracing::debug;

use crate::domain::{GenerationRequest, Secret, ShareRecord, Threshold};
use crate::engine;
use crate::error::Error;

/// Result of one generation call
#[derive(Debug, Clone)]
pub struct GeneratedShares {
    pub secret: Secret,
    pub threshold: Threshold,
    pub shares: Vec<ShareRecord>,
}

/// Produces shares from an oversampled, shuffled pool
pub struct ShareGenerator<R> {
    rng: R,
}

impl ShareGenerator<StdRng> {
    /// Generator backed by a CSPRNG freshly seeded from the operating system
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng + CryptoRng> ShareGenerator<R> {
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Creates a new random secret and `n` shares of it
    pub fn generate(&mut self, request: &GenerationRequest) -> GeneratedShares {
        let pool_size = request.share_count().pool_size();
        debug!(
            shares = *request.share_count(),
            threshold = *request.threshold(),
            pool_size,
            "generating share pool"
        );

        let (pool, secret) = engine::generate(pool_size, *request.threshold(), &mut self.rng);
        GeneratedShares {
            secret,
            threshold: request.threshold(),
            shares: self.subsample(pool, request),
        }
    }

    /// Creates `n` shares of an existing secret
    ///
    /// # Errors
    /// Returns an error if the secret does not fit in the engine's field
    pub fn distribute(
        &mut self,
        secret: Secret,
        request: &GenerationRequest,
    ) -> Result<GeneratedShares, Error> {
        let pool_size = request.share_count().pool_size();
        debug!(pool_size, "distributing existing secret");

        let pool = engine::distribute(&secret, pool_size, *request.threshold(), &mut self.rng)?;
        Ok(GeneratedShares {
            secret,
            threshold: request.threshold(),
            shares: self.subsample(pool, request),
        })
    }

    /// Shuffles the whole pool and keeps the first `n` shares
    fn subsample(
        &mut self,
        mut pool: Vec<ShareRecord>,
        request: &GenerationRequest,
    ) -> Vec<ShareRecord> {
        pool.shuffle(&mut self.rng);
        pool.truncate(usize::try_from(*request.share_count()).unwrap_or(usize::MAX));
        debug!(kept = pool.len(), "subsampled pool");
        pool
    }
}
