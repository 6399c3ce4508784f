//! Pseudo-random sources
//!
//! `ThreadRandom` wraps rand's thread-local RNG. `SeededRandom` wraps a
//! `StdRng` behind a mutex so a fixed seed replays the same catalog.

use crate::random::RandomSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Thread-local RNG source
pub struct ThreadRandom {
    _phantom: std::marker::PhantomData<()>,
}

impl ThreadRandom {
    /// Create a new thread RNG source
    pub fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl Default for ThreadRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for ThreadRandom {
    fn name(&self) -> &'static str {
        "thread"
    }

    fn float(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Seeded pseudo-random source for deterministic runs and tests
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    /// Create a new seeded source
    ///
    /// Using the same seed will produce the same sequence of random values.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn name(&self) -> &'static str {
        "seeded"
    }

    fn float(&self) -> f64 {
        // A poisoned lock still holds a valid RNG state
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        rng.gen::<f64>()
    }
}
