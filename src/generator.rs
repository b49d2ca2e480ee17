//! Random test data
//!
//! [`PostGenerator`] produces posts whose attributes fall inside the bounds
//! declared in [`crate::post`], so every generated post is accepted by both
//! [`priority_fn1`](crate::priority_fn1) and [`priority_fn2`](crate::priority_fn2).
//!
//! The default generator is seeded with a fixed value and yields the same
//! sequence on every run, which keeps test failures reproducible.

use crate::post::{
    Post, MAX_CONNECT_LEVEL, MAX_INTEREST_LEVEL, MAX_LIKES, MAX_POST_ID, MAX_TIME,
    MIN_CONNECT_LEVEL, MIN_INTEREST_LEVEL, MIN_LIKES, MIN_POST_ID, MIN_TIME,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Seed used by [`PostGenerator::new`]
pub const DEFAULT_SEED: u64 = 10;

/// Seedable source of random posts and values
pub struct PostGenerator {
    rng: StdRng,
}

impl PostGenerator {
    /// Deterministic generator using [`DEFAULT_SEED`]
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generator seeded from the operating system
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Post with every attribute drawn uniformly from its valid range
    pub fn random_post(&mut self) -> Post {
        Post::new(
            self.random_int(MIN_POST_ID, MAX_POST_ID),
            self.random_int(MIN_LIKES, MAX_LIKES),
            self.random_int(MIN_CONNECT_LEVEL, MAX_CONNECT_LEVEL),
            self.random_int(MIN_TIME, MAX_TIME),
            self.random_int(MIN_INTEREST_LEVEL, MAX_INTEREST_LEVEL),
        )
    }

    pub fn random_posts(&mut self, count: usize) -> Vec<Post> {
        (0..count).map(|_| self.random_post()).collect()
    }

    /// Uniform integer in `min..=max`
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    pub fn random_int(&mut self, min: i32, max: i32) -> i32 {
        self.rng.random_range(min..=max)
    }

    /// Uniform real in `min..max`, truncated to two decimal places
    ///
    /// # Panics
    ///
    /// Panics if `min >= max`, since the half-open range is then empty.
    pub fn random_real(&mut self, min: f64, max: f64) -> f64 {
        let value: f64 = self.rng.random_range(min..max);
        (value * 100.0).floor() / 100.0
    }

    /// Every integer in `min..=max` exactly once, in random order
    pub fn shuffled(&mut self, min: i32, max: i32) -> Vec<i32> {
        let mut values: Vec<i32> = (min..=max).collect();
        values.shuffle(&mut self.rng);
        values
    }

    /// Lowercase ASCII string of the given length
    pub fn random_string(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| char::from(self.rng.random_range(b'a'..=b'z')))
            .collect()
    }
}

impl Default for PostGenerator {
    fn default() -> Self {
        Self::new()
    }
}
