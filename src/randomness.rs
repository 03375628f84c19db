//! Randomness sources injected into the generators.
//!
//! Generators never reach for an ambient RNG; they hold an `Arc<dyn RandomSource>`
//! so tests can substitute a deterministic one.

use std::cell::RefCell;
use std::sync::{Arc, Mutex};

use rand::rngs::{SmallRng, StdRng};
use rand::{Rng, SeedableRng};

#[cfg_attr(test, mockall::automock)]
pub trait RandomSource: Send + Sync {
    /// Uniform index in `0..upper`. `upper` is never zero.
    fn index(&self, upper: usize) -> usize;

    /// `true` with probability 0.5.
    fn coin(&self) -> bool;
}

thread_local! {
    static THREAD_RNG: RefCell<SmallRng> = RefCell::new(SmallRng::from_os_rng());
}

/// Per-thread, non-cryptographic generator seeded from the OS on first use.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn index(&self, upper: usize) -> usize {
        THREAD_RNG.with(|rng| rng.borrow_mut().random_range(0..upper))
    }

    fn coin(&self) -> bool {
        THREAD_RNG.with(|rng| rng.borrow_mut().random_bool(0.5))
    }
}

/// Reproducible source: the same seed yields the same sequence of draws.
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        // A panic while holding the lock cannot leave the RNG in an invalid state.
        let mut guard = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut guard)
    }
}

impl RandomSource for SeededRandom {
    fn index(&self, upper: usize) -> usize {
        self.with_rng(|rng| rng.random_range(0..upper))
    }

    fn coin(&self) -> bool {
        self.with_rng(|rng| rng.random_bool(0.5))
    }
}

/// The default source handed to generators built by the shell.
pub fn thread_source() -> Arc<dyn RandomSource> {
    Arc::new(ThreadRandom)
}

/// A seeded source when `seed` is given, otherwise the thread source.
pub fn source_for(seed: Option<u64>) -> Arc<dyn RandomSource> {
    match seed {
        Some(seed) => Arc::new(SeededRandom::new(seed)),
        None => thread_source(),
    }
}
