use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::ConfigError;

/// How a fresh population is seeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedingPolicy {
    /// Every seed gets its own random gene.
    #[default]
    Independent,
    /// All seeds are mutated siblings of one shared random gene.
    Siblings,
}

/// Simulation parameters that control ecosystem behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Canvas width in canvas units.
    pub canvas_width: f32,
    /// Canvas height in canvas units. The y axis grows downward.
    pub canvas_height: f32,
    /// Width of the band along each edge that pushes organisms inward.
    pub edge: f32,
    /// Edge force per unit of penetration into the band.
    pub edge_force: f32,
    /// Distance under which two organisms repel each other.
    pub interaction_radius: f32,
    /// Numerator of the inverse-square repulsion, capped at 1.
    pub interaction_force: f32,
    /// Pull towards a click, multiplied by each organism's mass.
    pub mouse_force: f32,
    /// Per-tick probability that a reproducible organism clones itself.
    pub clone_rate: f32,
    /// Maximum organism population (hard cap).
    pub max_population: usize,
    /// Organisms created when the population is (re)seeded.
    pub seed_population: usize,
    /// How seeds are generated.
    pub seeding: SeedingPolicy,
    /// Random seed. `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            canvas_width: 480.0,
            canvas_height: 480.0,
            edge: 32.0,
            edge_force: 0.1,
            interaction_radius: 32.0,
            interaction_force: 64.0,
            mouse_force: 1.0,
            clone_rate: 0.0015,
            max_population: 50,
            seed_population: 5,
            seeding: SeedingPolicy::Independent,
            seed: None,
        }
    }
}

impl Params {
    /// Loads parameters from a JSON file. Missing fields keep their defaults.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let params: Self = serde_json::from_str(&json)?;
        params.validate()?;
        Ok(params)
    }

    /// Loads parameters from `path` when one is given, or returns the
    /// defaults. A path that fails to load is an error, never a silent
    /// fallback.
    pub fn load_or_default(path: Option<impl AsRef<Path>>) -> Result<Self, ConfigError> {
        path.map_or_else(|| Ok(Self::default()), Self::load_from_file)
    }

    /// Saves the parameters to a JSON file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Checks that every value is within its usable range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.canvas_width > 0.0 && self.canvas_height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "canvas must have positive size, got {}x{}",
                self.canvas_width, self.canvas_height
            )));
        }
        if self.edge < 0.0 || self.canvas_width.min(self.canvas_height) <= self.edge * 2.0 {
            return Err(ConfigError::Invalid(format!(
                "edge band {} does not fit a {}x{} canvas",
                self.edge, self.canvas_width, self.canvas_height
            )));
        }
        let forces = [
            ("edge_force", self.edge_force),
            ("interaction_radius", self.interaction_radius),
            ("interaction_force", self.interaction_force),
            ("mouse_force", self.mouse_force),
        ];
        if let Some((name, value)) = forces.iter().find(|(_, value)| *value < 0.0) {
            return Err(ConfigError::Invalid(format!(
                "{name} must not be negative, got {value}"
            )));
        }
        if !(0.0..=1.0).contains(&self.clone_rate) {
            return Err(ConfigError::Invalid(format!(
                "clone_rate must be a probability, got {}",
                self.clone_rate
            )));
        }
        if self.max_population == 0 {
            return Err(ConfigError::Invalid("max_population must be at least 1".into()));
        }
        if self.seed_population > self.max_population {
            return Err(ConfigError::Invalid(format!(
                "seed_population {} exceeds max_population {}",
                self.seed_population, self.max_population
            )));
        }
        Ok(())
    }
}
