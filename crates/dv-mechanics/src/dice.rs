//! Random roll sources.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{MechError, MechResult};

/// Anything that can produce a uniformly distributed integer in `[low, high)`.
pub trait RollSource {
    /// Roll an integer in the half-open range `[low, high)`.
    ///
    /// Fails with [`MechError::InvalidRange`] when `low >= high`.
    fn roll(&mut self, low: i32, high: i32) -> MechResult<i32>;
}

impl<T: RollSource + ?Sized> RollSource for &mut T {
    fn roll(&mut self, low: i32, high: i32) -> MechResult<i32> {
        (**self).roll(low, high)
    }
}

/// The production roll source, backed by a standard RNG.
#[derive(Debug, Clone)]
pub struct DiceRoller {
    rng: StdRng,
}

impl DiceRoller {
    /// Create a roller seeded from the operating system.
    pub fn from_os() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a roller with a fixed seed for reproducible rolls.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for DiceRoller {
    fn default() -> Self {
        Self::from_os()
    }
}

impl RollSource for DiceRoller {
    fn roll(&mut self, low: i32, high: i32) -> MechResult<i32> {
        if low >= high {
            return Err(MechError::InvalidRange { low, high });
        }
        let value = self.rng.random_range(low..high);
        tracing::trace!(low, high, value, "rolled");
        Ok(value)
    }
}
