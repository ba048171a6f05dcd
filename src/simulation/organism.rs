//! Organism kinematics and lifecycle.
//!
//! An organism swims in short strokes: every [`MOTION_RATIO`] ticks its speed
//! is reset and its heading nudged, and in between drag slows it down.
//! It grows over its first [`GROWTH_TICKS`] ticks and fades out over its last
//! [`FADE_TICKS`].

use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

use super::expression::Expression;
use super::gene::Gene;
use super::pattern::{BlockPattern, COLUMNS};
use super::random::Random;

/// Ticks between two swim strokes.
pub const MOTION_RATIO: u32 = 20;
/// Ticks needed to grow from half to full size.
pub const GROWTH_TICKS: u32 = 500;
/// Ticks over which a dying organism fades out.
pub const FADE_TICKS: f32 = 100.0;
/// Age an organism must exceed before it can clone itself.
pub const MATURITY_TICKS: u32 = 500;
/// Remaining life required to clone.
pub const MIN_REPRODUCTIVE_LIFE: f32 = 100.0;
/// Velocity retained each tick.
pub const DRAG: f32 = 0.9;

const LIFE_MEAN: f32 = 1600.0;
const LIFE_SIGMA: f32 = 500.0;
const STROKE: f32 = 4.0;

/// Presentation state of an organism for the current tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Visual {
    /// Horizontal position in canvas units.
    pub x: f32,
    /// Vertical position in canvas units, growing downward.
    pub y: f32,
    /// Heading in radians.
    pub rotation: f32,
    /// Size of one body cell in canvas units.
    pub scale: f32,
    /// Alpha in `[0, 1]`.
    pub opacity: f32,
}

/// A simulated plankter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organism {
    /// Unique identifier for this organism.
    pub id: usize,
    /// Horizontal position.
    pub x: f32,
    /// Vertical position.
    pub y: f32,
    /// Current speed.
    pub v: f32,
    /// Current heading in radians.
    pub angle: f32,
    /// Remaining ticks of life. The organism dies once this reaches 0.
    pub life: f32,
    /// Ticks lived.
    pub time: u32,
    gene: Gene,
    expression: Expression,
    pattern: BlockPattern,
    speed: f32,
    mass: f32,
    max_size: f32,
    timing: u32,
}

impl Organism {
    /// Creates an organism from an already expressed gene.
    pub fn new(
        id: usize,
        gene: Gene,
        expression: Expression,
        (x, y): (f32, f32),
        v: f32,
        angle: f32,
        random: &mut Random,
    ) -> Self {
        let (speed, mass) = locomotion(&expression);
        let max_size = expression.size() * 2.0 + 2.0;
        let life = random.gaussian(LIFE_MEAN, LIFE_SIGMA);
        let timing = random.below(MOTION_RATIO);
        let pattern = BlockPattern::from_expression(&expression);

        Self {
            id,
            x,
            y,
            v,
            angle,
            life,
            time: 0,
            gene,
            expression,
            pattern,
            speed,
            mass,
            max_size,
            timing,
        }
    }

    /// Expresses `gene` and builds an organism from it.
    ///
    /// Returns `None` for a stillbirth.
    pub fn from_gene(
        id: usize,
        gene: Gene,
        pos: (f32, f32),
        v: f32,
        angle: f32,
        random: &mut Random,
    ) -> Option<Self> {
        let expression = Expression::from_gene(&gene, random)?;
        Some(Self::new(id, gene, expression, pos, v, angle, random))
    }

    /// Produces a mutated offspring at the same spot, at rest, facing a
    /// random direction. Returns `None` for a stillbirth.
    pub fn clone_mutated(&self, id: usize, random: &mut Random) -> Option<Self> {
        let gene = self.gene.mutate(random);
        let angle = random.heading();
        Self::from_gene(id, gene, (self.x, self.y), 0.0, angle, random)
    }

    /// Applies an impulse of magnitude `f` in direction `angle`.
    ///
    /// The velocity changes immediately, so successive calls in one tick
    /// compose.
    pub fn apply_force(&mut self, f: f32, angle: f32) {
        let vx = self.v * self.angle.cos() + f * angle.cos() / self.mass;
        let vy = self.v * self.angle.sin() + f * angle.sin() / self.mass;
        self.v = vx.hypot(vy);
        self.angle = vy.atan2(vx);
    }

    /// Advances one tick. Returns `false`, without touching any state, once
    /// life is exhausted.
    pub fn animate(&mut self, random: &mut Random) -> bool {
        if !self.is_alive() {
            return false;
        }

        self.x += self.v * self.angle.cos();
        self.y += self.v * self.angle.sin();
        self.v *= DRAG;

        if self.time % MOTION_RATIO == self.timing {
            self.v = self.speed;
            self.angle += random.gaussian(0.0, PI / 60.0);
        }

        self.life -= 1.0;
        self.time += 1;
        true
    }

    /// Whether the organism still has life left.
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }

    /// Mature and not about to die.
    pub fn is_reproducible(&self) -> bool {
        self.time > MATURITY_TICKS && self.life >= MIN_REPRODUCTIVE_LIFE
    }

    /// Current cell size: linear growth from half to full over the first
    /// [`GROWTH_TICKS`] ticks.
    pub fn scale(&self) -> f32 {
        if self.time < GROWTH_TICKS {
            self.max_size * (0.5 + self.time as f32 / GROWTH_TICKS as f32 * 0.5)
        } else {
            self.max_size
        }
    }

    /// Alpha: opaque until the last [`FADE_TICKS`] ticks of life.
    pub fn opacity(&self) -> f32 {
        if self.life < FADE_TICKS {
            (self.life / FADE_TICKS).max(0.0)
        } else {
            1.0
        }
    }

    /// Snapshot of everything a renderer needs this tick.
    pub fn visual(&self) -> Visual {
        Visual {
            x: self.x,
            y: self.y,
            rotation: self.angle,
            scale: self.scale(),
            opacity: self.opacity(),
        }
    }

    /// Position as a tuple.
    pub fn pos(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    /// Stroke speed, reset every [`MOTION_RATIO`] ticks.
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Body mass, dividing every applied force.
    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Cell size once fully grown.
    pub fn max_size(&self) -> f32 {
        self.max_size
    }

    /// Phase offset of the swim stroke, in `[0, MOTION_RATIO)`.
    pub fn timing(&self) -> u32 {
        self.timing
    }

    /// Inherited traits.
    pub fn gene(&self) -> &Gene {
        &self.gene
    }

    /// Traits expressed at birth.
    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    /// Body layout built at birth.
    pub fn pattern(&self) -> &BlockPattern {
        &self.pattern
    }
}

/// Derives `(speed, mass)` from the grown blocks.
///
/// Each block weighs `(1 + size)^2`. Blocks in column 0 add mass but do not
/// propel, so they are left out of the speed denominator.
fn locomotion(expression: &Expression) -> (f32, f32) {
    let weight = (1.0 + expression.size()).powi(2);
    let mut propulsive = 0.0;
    let mut mass = 0.0;
    for (i, _) in expression.blocks().iter().enumerate().filter(|(_, b)| **b) {
        propulsive += weight * (i % COLUMNS) as f32;
        mass += weight;
    }
    // a body without limbs cannot swim
    let speed = if propulsive > 0.0 { STROKE / propulsive } else { 0.0 };
    (speed, mass)
}
