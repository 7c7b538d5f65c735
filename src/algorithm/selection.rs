//! Seeded randomness shared by every stochastic choice in a run
//!
//! Point sampling, interior-node removal and decoration glyphs all draw from
//! one generator so a single seed reproduces the whole image.

use crate::render::glyph::{DECORATION_WEIGHTS, Glyph};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Seeded random selector for reproducible stochastic choices
#[derive(Debug, Clone)]
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw a seed for a collaborator that keeps its own generator
    pub fn derive_seed(&mut self) -> u64 {
        self.rng.random()
    }

    /// Uniformly pick an index strictly between the first and last element
    ///
    /// Returns `None` when a sequence of `len` elements has no interior.
    pub fn interior_index(&mut self, len: usize) -> Option<usize> {
        (len > 2).then(|| self.rng.random_range(1..len - 1))
    }

    /// Generic weighted random selection
    ///
    /// Returns index into weights array using cumulative distribution
    pub fn weighted_choice(&mut self, weights: &[f64]) -> usize {
        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return 0;
        }

        let mut rand_val = self.rng.random::<f64>() * total;
        for (i, &weight) in weights.iter().enumerate() {
            rand_val -= weight;
            if rand_val <= 0.0 {
                return i;
            }
        }
        weights.len() - 1
    }

    /// Pick a decoration glyph for an intermediate waypoint
    pub fn decoration(&mut self) -> Glyph {
        let weights = DECORATION_WEIGHTS.map(|(_, weight)| weight);
        let choice = self.weighted_choice(&weights);
        DECORATION_WEIGHTS
            .get(choice)
            .map_or(Glyph::Skull, |&(glyph, _)| glyph)
    }
}
