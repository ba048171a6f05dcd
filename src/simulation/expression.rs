//! Phenotypes sampled from genes.
//!
//! Expression is noisy: the same gene can produce different colors and block
//! masks each time an organism is born from it.

use serde::{Deserialize, Serialize};

use super::color::Hsv;
use super::gene::{BLOCK_COUNT, Gene};
use super::geometric_utils::clip;
use super::random::Random;

/// Noise added to each heritable trait when it is expressed.
const EXPRESSION_SIGMA: f32 = 0.01;
/// Blocks whose noisy intensity exceeds this are grown.
const BLOCK_THRESHOLD: f32 = 0.5;

/// The rendered traits of a single organism, fixed at birth.
///
/// At least one block is always grown: both constructors refuse an empty
/// mask, and so does deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ExpressionRecord")]
pub struct Expression {
    color: u32,
    blocks: [bool; BLOCK_COUNT],
    size: f32,
}

#[derive(Deserialize)]
struct ExpressionRecord {
    color: u32,
    blocks: [bool; BLOCK_COUNT],
    size: f32,
}

impl TryFrom<ExpressionRecord> for Expression {
    type Error = String;

    fn try_from(record: ExpressionRecord) -> Result<Self, Self::Error> {
        Self::new(record.color, record.blocks, record.size)
            .ok_or_else(|| "expression has no grown block".to_owned())
    }
}

impl Expression {
    /// Builds a phenotype from explicit traits, clipping `size` into `[0, 1]`.
    ///
    /// Returns `None` when no block is grown.
    pub fn new(color: u32, blocks: [bool; BLOCK_COUNT], size: f32) -> Option<Self> {
        if blocks.iter().all(|b| !b) {
            return None;
        }
        Some(Self {
            color: color & 0x00FF_FFFF,
            blocks,
            size: clip(size, 0.0, 1.0),
        })
    }

    /// Samples a phenotype from `gene`.
    ///
    /// Only the hue is heritable; saturation and value are drawn around a
    /// fixed pastel. Returns `None` when no block passes the threshold, which
    /// makes the organism non-viable.
    pub fn from_gene(gene: &Gene, random: &mut Random) -> Option<Self> {
        let color = Hsv::new(
            gene.hue() + random.gaussian(0.0, EXPRESSION_SIGMA),
            random.gaussian(112.0 / 255.0, 16.0 / 255.0),
            random.gaussian(208.0 / 255.0, 16.0 / 255.0),
        )
        .to_integer();

        let mut blocks = [false; BLOCK_COUNT];
        for (block, &intensity) in blocks.iter_mut().zip(gene.blocks().iter()) {
            *block = intensity + random.gaussian(0.0, EXPRESSION_SIGMA) > BLOCK_THRESHOLD;
        }

        let size = clip(gene.size() + random.gaussian(0.0, EXPRESSION_SIGMA), 0.0, 1.0);

        Self::new(color, blocks, size)
    }

    /// Packed `0xRRGGBB` body color.
    pub fn color(&self) -> u32 {
        self.color
    }

    /// Which body blocks are present.
    pub fn blocks(&self) -> &[bool; BLOCK_COUNT] {
        &self.blocks
    }

    /// Expressed size in `[0, 1]`.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Number of grown blocks.
    pub fn block_count(&self) -> usize {
        self.blocks.iter().filter(|b| **b).count()
    }
}
