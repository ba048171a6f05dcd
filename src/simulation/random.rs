//! Seedable random source shared by every stochastic operation.
//!
//! Normal variates come from the Box-Muller transform. Each transform yields
//! two independent values; the second is parked in a single-slot cache and
//! handed out by the next call.

use rand::distr::OpenClosed01;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::f32::consts::TAU;

/// Random number generator with a one-value Gaussian cache.
///
/// A `Random` is passed by `&mut` into gene, expression and organism
/// construction so that a fixed seed replays a whole simulation.
#[derive(Debug, Clone)]
pub struct Random {
    rng: ChaCha8Rng,
    cached: Option<f32>,
}

impl Random {
    /// Creates a generator whose stream is fully determined by `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            cached: None,
        }
    }

    /// Creates a generator seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self {
            rng: ChaCha8Rng::from_os_rng(),
            cached: None,
        }
    }

    /// Draws a standard normal value.
    ///
    /// Odd calls run a fresh transform and return its cosine branch; even
    /// calls return the cached sine branch.
    pub fn std_gaussian(&mut self) -> f32 {
        if let Some(cached) = self.cached.take() {
            return cached;
        }
        // (0, 1] keeps ln() finite
        let x: f32 = self.rng.sample(OpenClosed01);
        let y: f32 = self.rng.random();
        let r = (-2.0 * x.ln()).sqrt();
        let t = TAU * y;
        self.cached = Some(r * t.sin());
        r * t.cos()
    }

    /// Draws a normal value with the given mean and standard deviation.
    pub fn gaussian(&mut self, mean: f32, sigma: f32) -> f32 {
        self.std_gaussian() * sigma + mean
    }

    /// Uniform value in `[0, 1)`.
    pub fn uniform(&mut self) -> f32 {
        self.rng.random()
    }

    /// Returns `true` with probability `p`.
    pub fn chance(&mut self, p: f32) -> bool {
        self.uniform() < p
    }

    /// Uniform integer in `[0, n)`.
    pub fn below(&mut self, n: u32) -> u32 {
        self.rng.random_range(0..n)
    }

    /// Uniform heading in `[0, 2π)`.
    pub fn heading(&mut self) -> f32 {
        self.uniform() * TAU
    }

    /// Whether a second Box-Muller value is waiting to be returned.
    pub fn has_cached(&self) -> bool {
        self.cached.is_some()
    }
}
