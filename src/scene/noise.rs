//! Coherent noise sampling
//!
//! One Perlin field per seed, sampled at continuous 2D coordinates. Every
//! animation channel in the crate reads from this: the first coordinate is
//! the channel's private seed, the second advances with scaled time, so
//! motion is smooth, bounded and reproducible without any per-frame state.

use noise::{NoiseFn, Perlin};
use std::fmt;

/// A seeded 2D coherent-noise field with output in [0, 1).
#[derive(Clone)]
pub struct NoiseField {
    seed: u32,
    perlin: Perlin,
}

impl fmt::Debug for NoiseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NoiseField").field("seed", &self.seed).finish()
    }
}

impl NoiseField {
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            perlin: Perlin::new(seed),
        }
    }

    /// Sample the field at (a, b).
    ///
    /// Deterministic for a given seed, continuous in both coordinates.
    /// Perlin output in [-1, 1] is remapped into the half-open unit range.
    pub fn sample(&self, a: f32, b: f32) -> f32 {
        let raw = self.perlin.get([a as f64, b as f64]) as f32;
        ((raw + 1.0) * 0.5).clamp(0.0, 0.999_999)
    }
}
