pub mod db;
pub mod flush;
pub mod model;
pub mod scenario;
pub mod sim;
pub mod worldgen;

pub use model::{Grid, GridError, Plant, PlantStatus, Position, TraitKind, TraitVector};
pub use sim::{SimConfig, SimParams, run, tick};
