pub mod config;

use tracing::debug;

use crate::model::{Grid, GridError, Position};

pub use config::WorldGenConfig;

/// Build an empty grid with the configured plant in the centre cell
/// (`size / 2` on both axes).
pub fn generate_world(config: &WorldGenConfig) -> Result<Grid, GridError> {
    let mut grid = Grid::new(config.size)?;
    let centre = Position::new(config.size / 2, config.size / 2);
    grid.place(centre, config.initial_plant.clone())?;
    debug!(size = config.size, ?centre, "generated initial world");
    Ok(grid)
}
