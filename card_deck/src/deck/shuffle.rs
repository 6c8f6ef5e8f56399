//! Card shuffling sources.

use crate::cards::Card;
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};
use std::sync::{Mutex, PoisonError};

/// Produces a uniformly random permutation of a card sequence in place.
pub trait Shuffler: Send + Sync {
    fn shuffle(&self, cards: &mut [Card]);
}

/// Shuffles with the thread-local RNG. Used by default.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRngShuffler;

impl Shuffler for ThreadRngShuffler {
    fn shuffle(&self, cards: &mut [Card]) {
        cards.shuffle(&mut rand::rng());
    }
}

/// Shuffles with a generator seeded once at construction, so a given seed
/// always yields the same sequence of permutations.
pub struct SeededShuffler {
    rng: Mutex<StdRng>,
}

impl SeededShuffler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Shuffler for SeededShuffler {
    fn shuffle(&self, cards: &mut [Card]) {
        // The generator state stays valid even if a holder panicked.
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        cards.shuffle(&mut *rng);
    }
}
