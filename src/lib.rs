//! # Plankton - Generative Plankton Simulation
//!
//! Genetically defined plankton swim, jostle, clone and fade away inside a
//! bounded 2D canvas.
//!
//! ## Features
//!
//! - Heritable genes with mutation and crossover
//! - Noisy phenotype expression, including stillbirths
//! - Stroke-based swimming with drag, edge repulsion and pairwise repulsion
//! - Cloning with a hard population cap and automatic reseeding
//! - Rendering decoupled through the [`simulation::stage::Stage`] trait
//! - Seedable randomness for reproducible runs
//!
//! ## Core Modules
//!
//! - [`simulation::gene`] - Heritable traits
//! - [`simulation::expression`] - Phenotypes sampled from genes
//! - [`simulation::organism`] - Organism kinematics and lifecycle
//! - [`simulation::ecosystem`] - Per-tick population driver
//! - [`simulation::random`] - Seedable Gaussian source

/// Core simulation logic and data structures.
pub mod simulation {
    /// RGB and HSV color values.
    pub mod color;
    /// Per-tick population driver.
    pub mod ecosystem;
    /// Configuration errors.
    pub mod error;
    /// Deferred population changes applied after each scan.
    pub mod events;
    /// Phenotypes sampled from genes.
    pub mod expression;
    /// Heritable trait vectors.
    pub mod gene;
    /// Clamping, wrapping and planar distance helpers.
    pub mod geometric_utils;
    /// Organism kinematics, lifecycle and presentation state.
    pub mod organism;
    /// Simulation parameters.
    pub mod params;
    /// Body layout built from an expression.
    pub mod pattern;
    /// Seedable random source with a cached Gaussian.
    pub mod random;
    /// Adapter trait for rendering layers.
    ///
    /// The [`stage::Stage`] trait is implemented by anything that can show
    /// organisms; [`stage::Headless`] shows nothing.
    pub mod stage;
    /// Population statistics.
    pub mod stats;
}
