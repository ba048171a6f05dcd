//! Heritable trait vectors.
//!
//! A gene holds a hue, one intensity per body block and a size, all in
//! `[0, 1]`. Genes are never edited in place: mutation and crossover build
//! new values and leave their parents untouched.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use super::geometric_utils::{clip, cycle};
use super::random::Random;

/// Number of body blocks encoded by a gene.
pub const BLOCK_COUNT: usize = 15;

/// Standard deviation of the perturbation applied by mutation and crossover.
pub const MUTATION_SIGMA: f32 = 0.05;

/// Immutable heritable traits of an organism.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gene {
    hue: f32,
    blocks: Array1<f32>,
    size: f32,
}

impl Gene {
    /// Builds a gene from raw traits, wrapping the hue and clipping the rest.
    pub fn new(hue: f32, blocks: [f32; BLOCK_COUNT], size: f32) -> Self {
        Self {
            hue: cycle(hue, 0.0, 1.0),
            blocks: blocks.iter().map(|&b| clip(b, 0.0, 1.0)).collect(),
            size: clip(size, 0.0, 1.0),
        }
    }

    /// Draws a fresh gene: uniform hue, blocks around 0.5, small sizes.
    pub fn random(random: &mut Random) -> Self {
        let hue = random.uniform();
        let blocks = Array1::from_shape_fn(BLOCK_COUNT, |_| {
            clip(random.gaussian(0.5, 0.25), 0.0, 1.0)
        });
        let size = clip(random.gaussian(0.25, 0.125), 0.0, 1.0);
        Self { hue, blocks, size }
    }

    /// Sexual crossover.
    ///
    /// Every trait is inherited from a parent picked by coin flip and then
    /// perturbed like a mutation.
    pub fn cross(x: &Gene, y: &Gene, random: &mut Random) -> Self {
        let hue = cycle(
            pick(random, x.hue, y.hue) + random.gaussian(0.0, MUTATION_SIGMA),
            0.0,
            1.0,
        );
        let blocks = x
            .blocks
            .iter()
            .zip(y.blocks.iter())
            .map(|(&xb, &yb)| {
                clip(
                    pick(random, xb, yb) + random.gaussian(0.0, MUTATION_SIGMA),
                    0.0,
                    1.0,
                )
            })
            .collect();
        let size = clip(
            pick(random, x.size, y.size) + random.gaussian(0.0, MUTATION_SIGMA),
            0.0,
            1.0,
        );
        Self { hue, blocks, size }
    }

    /// Returns a perturbed copy. Hue wraps, blocks and size are clipped.
    pub fn mutate(&self, random: &mut Random) -> Self {
        let hue = cycle(self.hue + random.gaussian(0.0, MUTATION_SIGMA), 0.0, 1.0);
        let blocks = self
            .blocks
            .mapv(|b| clip(b + random.gaussian(0.0, MUTATION_SIGMA), 0.0, 1.0));
        let size = clip(self.size + random.gaussian(0.0, MUTATION_SIGMA), 0.0, 1.0);
        Self { hue, blocks, size }
    }

    /// Hue of the rendered color.
    pub fn hue(&self) -> f32 {
        self.hue
    }

    /// Per-block trait intensities.
    pub fn blocks(&self) -> &Array1<f32> {
        &self.blocks
    }

    /// Body size trait.
    pub fn size(&self) -> f32 {
        self.size
    }
}

fn pick(random: &mut Random, x: f32, y: f32) -> f32 {
    if random.chance(0.5) { x } else { y }
}
