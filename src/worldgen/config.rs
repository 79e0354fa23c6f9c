use serde::{Deserialize, Serialize};

use crate::model::Plant;

/// Configuration for building the initial grid.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WorldGenConfig {
    /// Side length of the square grid.
    pub size: usize,
    /// Plant placed in the centre cell.
    pub initial_plant: Plant,
}

impl Default for WorldGenConfig {
    fn default() -> Self {
        Self {
            size: 40,
            initial_plant: Plant::seeding(8, 3, 20, 50),
        }
    }
}
