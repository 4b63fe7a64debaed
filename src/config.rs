//! Tunables and fixed text markers.

/// Lower bound on the size of the oversampled share pool.
///
/// The engine is always asked for at least this many shares, so a distributed
/// subset reveals little about how many shares were produced in total.
pub const MIN_POOL_SIZE: u64 = 10_000;

/// Largest share count accepted for a single generation.
///
/// Generation evaluates a degree `k - 1` polynomial at every pool point, so
/// its cost is `max(n², MIN_POOL_SIZE) * k` field multiplications, cubic in
/// `n` once `k` tracks it. At 255 the worst case (`n = k = 255`) is about
/// 16.6 million multiplications, a couple of seconds in a release build.
pub const MAX_SHARE_COUNT: u64 = 255;

/// Default threshold (`-k`).
pub const DEFAULT_THRESHOLD: i64 = 3;

/// Default number of distributed shares (`-n`).
pub const DEFAULT_SHARE_COUNT: i64 = 5;

/// Prefix of the secret line in generation output.
pub const SECRET_PREFIX: &str = "secret: ";

/// Prefix of the header line preceding the share list.
pub const SHARES_PREFIX: &str = "shares";
