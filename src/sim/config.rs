use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which cells a plant's canopy covers around its own cell.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CanopyShape {
    /// Cells at Manhattan distance `< width`.
    #[default]
    Diamond,
    /// Cells at Chebyshev distance `< width`, a `(2*width-1)^2` square.
    Square,
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("light_for_seeds_coefficient must be finite and positive, got {0}")]
    LightCoefficient(f64),
    #[error("mutation_factor must be finite and non-negative, got {0}")]
    MutationFactor(f64),
}

/// Tunable constants of the tick pipeline.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimParams {
    /// Ticks a germinating plant waits before it starts seeding.
    pub germination_time: u32,
    /// Light needed per unit of canopy area before seeds are released.
    pub light_for_seeds_coefficient: f64,
    /// Seeds released per dispersal event.
    pub num_seeds: u32,
    /// Score-scale amount moved between two traits per mutation.
    pub mutation_factor: f64,
    pub canopy: CanopyShape,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            germination_time: 5,
            light_for_seeds_coefficient: 2.5,
            num_seeds: 4,
            mutation_factor: 0.5,
            canopy: CanopyShape::Diamond,
        }
    }
}

impl SimParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let coefficient = self.light_for_seeds_coefficient;
        if !coefficient.is_finite() || coefficient <= 0.0 {
            return Err(ConfigError::LightCoefficient(coefficient));
        }
        if !self.mutation_factor.is_finite() || self.mutation_factor < 0.0 {
            return Err(ConfigError::MutationFactor(self.mutation_factor));
        }
        Ok(())
    }
}
