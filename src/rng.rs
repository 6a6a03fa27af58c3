use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seed every fresh source starts from, so output is reproducible across
/// process restarts until a caller reseeds.
pub const DEFAULT_SEED: i64 = 1;

/// Seedable pseudo-random source used to pick words.
///
/// Not suitable for anything security related.
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    /// Create a source seeded with [`DEFAULT_SEED`]
    pub fn new() -> Self {
        Self::seeded(DEFAULT_SEED)
    }

    /// Create a source seeded with `seed`
    pub fn seeded(seed: i64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed as u64),
        }
    }

    /// Reset the generator deterministically
    pub fn seed(&mut self, seed: i64) {
        tracing::debug!(seed, "reseeding random source");
        self.rng = StdRng::seed_from_u64(seed as u64);
    }

    /// Reseed from the wall clock (nanoseconds since the Unix epoch)
    pub fn use_non_deterministic_seed(&mut self) {
        let now = chrono::Utc::now();
        // Out of range after the year 2262; fall back to whole seconds.
        let seed = now
            .timestamp_nanos_opt()
            .unwrap_or_else(|| now.timestamp());
        self.seed(seed);
    }

    /// Uniformly distributed index in `[0, bound)`.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is zero.
    pub fn next_index(&mut self, bound: usize) -> usize {
        assert!(bound > 0, "cannot pick an index from an empty range");
        self.rng.gen_range(0..bound)
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new()
    }
}
