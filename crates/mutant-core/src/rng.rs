//! Random number generation for grid regeneration
//!
//! Uses a seeded ChaCha RNG so that healing is reproducible under a fixed seed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::nucleotide::Nucleotide;

/// Uniform source of alphabet symbols
pub trait SymbolSource<S> {
    /// Draw one symbol, uniformly over the alphabet
    fn sample(&mut self) -> S;
}

/// Genome random number generator
///
/// Wraps ChaCha8Rng for reproducible random number generation.
#[derive(Debug, Clone)]
pub struct GenomeRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl GenomeRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns 0..n-1
    ///
    /// Returns 0 if n is 0.
    pub fn rn2(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }
}

impl Default for GenomeRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl SymbolSource<Nucleotide> for GenomeRng {
    fn sample(&mut self) -> Nucleotide {
        Nucleotide::ALL[self.rn2(Nucleotide::ALL.len() as u32) as usize]
    }
}
