//! Strategies for choosing the next character to present.
//!
//! Two interchangeable policies sit behind [`SelectionPolicy`]: uniform
//! random picks for ephemeral play, and the persisted day-by-day rotation
//! in [`crate::recency`].

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::Rng;

use gom_core::{Catalog, CharacterId};

use crate::error::{EngineError, EngineResult};

/// A strategy for picking the next character to present.
pub trait SelectionPolicy {
    /// Choose the next character from the catalog.
    ///
    /// Fails with [`EngineError::EmptyCatalog`] when there is nothing to
    /// choose from.
    fn choose(&mut self, catalog: &Catalog) -> EngineResult<CharacterId>;
}

/// Uniform-random selection over the whole catalog.
///
/// No recency weighting: repeats are allowed across plays and sessions.
#[derive(Debug)]
pub struct RandomSelection {
    rng: StdRng,
}

impl RandomSelection {
    /// Create with a fixed seed for reproducible picks.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create from operating-system entropy.
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl SelectionPolicy for RandomSelection {
    fn choose(&mut self, catalog: &Catalog) -> EngineResult<CharacterId> {
        if catalog.is_empty() {
            return Err(EngineError::EmptyCatalog);
        }
        let index = self.rng.random_range(0..catalog.len());
        Ok(catalog.characters()[index].id)
    }
}
