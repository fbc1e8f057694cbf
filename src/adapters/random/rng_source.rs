use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::core::actions::generate_transform::ports::random_source::RandomSource;

/// `RandomSource` backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngRandomSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngRandomSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngRandomSource<StdRng> {
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngRandomSource<R> {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        // gen_range panics on an empty range
        if low < high {
            self.rng.gen_range(low..high)
        } else {
            low
        }
    }

    fn unique_token(&mut self) -> u64 {
        self.rng.next_u64()
    }
}
