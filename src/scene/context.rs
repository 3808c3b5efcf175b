//! Explicit randomness for one regenerate pass
//!
//! Instead of mutating a process-wide seed, every generator takes a
//! `GenerationContext` carrying the active seed, a deterministic RNG and
//! the noise field derived from the same seed. Two contexts built from the
//! same seed produce identical draw sequences.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::noise::NoiseField;

/// Seed, RNG and noise bundle threaded through all generators.
#[derive(Debug, Clone)]
pub struct GenerationContext {
    /// Seed this context was built from, kept for reporting
    pub seed: u64,
    /// Deterministic RNG; draw order is part of the layout contract
    pub rng: Pcg32,
    /// Coherent noise field sharing the seed (truncated to 32 bits)
    pub noise: NoiseField,
}

impl GenerationContext {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            noise: NoiseField::new(seed as u32),
        }
    }
}
