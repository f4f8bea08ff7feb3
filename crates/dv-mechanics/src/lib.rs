//! Dice rolling for Delve.
//!
//! Provides the [`RollSource`] seam used by the progression engine and the
//! production [`DiceRoller`], an OS-seeded `StdRng` that can also be seeded
//! explicitly for reproducible runs.

pub mod dice;
pub mod error;

pub use dice::{DiceRoller, RollSource};
pub use error::{MechError, MechResult};
