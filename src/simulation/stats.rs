use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Running counters describing how the population evolves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopulationStats {
    /// Ticks simulated so far.
    pub ticks: u64,
    /// Organisms added by cloning or seeding.
    pub births: u64,
    /// Clones or seeds whose expression came out empty.
    pub stillbirths: u64,
    /// Organisms removed after their life ran out.
    pub deaths: u64,
    /// Times the population was reseeded after dying out (including the first seeding).
    pub reseeds: u64,
    /// Largest population seen.
    pub peak: usize,
    /// Recent population sizes, oldest first
    pub history: VecDeque<usize>,
    /// Maximum number of history samples to keep
    pub max_history: usize,
}

impl Default for PopulationStats {
    fn default() -> Self {
        Self {
            ticks: 0,
            births: 0,
            stillbirths: 0,
            deaths: 0,
            reseeds: 0,
            peak: 0,
            history: VecDeque::new(),
            max_history: 500,
        }
    }
}

impl PopulationStats {
    /// Records the population size at the end of a tick.
    pub fn record_tick(&mut self, population: usize) {
        self.ticks += 1;
        self.peak = self.peak.max(population);
        self.history.push_back(population);
        if self.history.len() > self.max_history {
            self.history.pop_front();
        }
    }

    /// Mean population over the recorded history.
    pub fn average_population(&self) -> f64 {
        if self.history.is_empty() {
            0.0
        } else {
            self.history.iter().sum::<usize>() as f64 / self.history.len() as f64
        }
    }
}
