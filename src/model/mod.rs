pub mod grid;
pub mod plant;
pub mod traits;

pub use grid::{Grid, GridError, Position, SeedBed};
pub use plant::{Plant, PlantStatus, TraitVector};
pub use traits::{TraitKind, TraitScale};
