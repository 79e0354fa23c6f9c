use std::collections::BTreeMap;

use crate::model::{Grid, GridError, Plant, PlantStatus, Position};
use crate::sim::{RunError, SimConfig, SimParams, run};

/// Typed reference to a plant in a [`Scenario`], enabling chained field mutation.
///
/// Created by [`Scenario::plant`] (creation) or [`Scenario::plant_mut`] (mutation).
/// Call [`.id()`](PlantRef::id) to terminate the chain and extract the position.
pub struct PlantRef<'a> {
    scenario: &'a mut Scenario,
    position: Position,
}

impl<'a> PlantRef<'a> {
    fn data_mut(&mut self) -> &mut Plant {
        self.scenario
            .plants
            .entry(self.position)
            .or_insert_with(Scenario::default_plant)
    }

    pub fn status(mut self, v: PlantStatus) -> Self { self.data_mut().status = v; self }
    pub fn height(mut self, v: u32) -> Self { self.data_mut().height = v; self }
    pub fn width(mut self, v: u32) -> Self { self.data_mut().width = v; self }
    pub fn age(mut self, v: u32) -> Self { self.data_mut().age = v; self }
    pub fn life_span(mut self, v: u32) -> Self { self.data_mut().life_span = v; self }
    pub fn shade_tolerance(mut self, v: u32) -> Self { self.data_mut().shade_tolerance = v; self }
    pub fn sunlight(mut self, v: f64) -> Self { self.data_mut().sunlight = v; self }

    /// Escape hatch: apply an arbitrary closure to the plant.
    pub fn with(mut self, f: impl FnOnce(&mut Plant)) -> Self { f(self.data_mut()); self }

    /// Terminate the chain and return the plant's position.
    pub fn id(self) -> Position { self.position }
}

/// Fluent builder for hand-placed starting grids.
///
/// Plants start from [`Scenario::default_plant`] and are adjusted field by
/// field, so tests only spell out what they care about. Validation happens
/// once, in [`Scenario::build`].
pub struct Scenario {
    size: usize,
    plants: BTreeMap<Position, Plant>,
    params: SimParams,
}

impl Scenario {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            plants: BTreeMap::new(),
            params: SimParams::default(),
        }
    }

    /// A seeding plant with height 8, width 3, life span 20, shade tolerance 50.
    pub fn default_plant() -> Plant {
        Plant::seeding(8, 3, 20, 50)
    }

    /// Put a default plant at `(row, col)`, replacing any plant already there.
    pub fn plant(&mut self, row: usize, col: usize) -> PlantRef<'_> {
        let position = Position::new(row, col);
        self.plants.insert(position, Self::default_plant());
        PlantRef {
            scenario: self,
            position,
        }
    }

    /// Adjust the plant at `position`, creating a default one if the cell is empty.
    pub fn plant_mut(&mut self, position: Position) -> PlantRef<'_> {
        PlantRef {
            scenario: self,
            position,
        }
    }

    pub fn params_mut(&mut self) -> &mut SimParams {
        &mut self.params
    }

    pub fn build(&self) -> Result<Grid, GridError> {
        let mut grid = Grid::new(self.size)?;
        for (&position, plant) in &self.plants {
            grid.place(position, plant.clone())?;
        }
        Ok(grid)
    }

    /// Build the grid and run it for `num_ticks` ticks with the scenario's
    /// parameters.
    pub fn run(&self, num_ticks: u32, seed: u64) -> Result<Vec<Grid>, RunError> {
        let grid = self.build()?;
        let config = SimConfig {
            num_ticks,
            seed,
            params: self.params.clone(),
        };
        Ok(run(&grid, &config)?)
    }
}
