use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::plant::{Plant, TraitVector};

/// Row/column coordinates of a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Chebyshev (king-move) distance between two cells.
    pub fn chebyshev(self, other: Position) -> usize {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }

    /// Manhattan distance between two cells.
    pub fn manhattan(self, other: Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum GridError {
    #[error("grid size must be at least 1")]
    ZeroSize,
    #[error("grid has {rows} rows but row {row} has {cols} cells")]
    NotSquare { rows: usize, row: usize, cols: usize },
    #[error("cell ({}, {}) holds {count} plants, at most 1 allowed", .position.row, .position.col)]
    CellArity { position: Position, count: usize },
    #[error("cell ({}, {}) holds an unresolved seed", .position.row, .position.col)]
    UnresolvedSeed { position: Position },
    #[error("plant at ({}, {}) is invalid: {reason}", .position.row, .position.col)]
    InvalidPlant { position: Position, reason: String },
    #[error("position ({}, {}) is outside a {size}x{size} grid", .position.row, .position.col)]
    OutOfBounds { position: Position, size: usize },
    #[error("cell ({}, {}) is already occupied", .position.row, .position.col)]
    Occupied { position: Position },
}

/// Square world where every cell holds at most one committed plant.
///
/// Cells are stored row-major. Iteration order everywhere in the crate is
/// row-major, which makes canopy tie-breaks and RNG draw order reproducible.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<Plant>>,
}

impl Grid {
    /// An empty `size` x `size` grid.
    pub fn new(size: usize) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::ZeroSize);
        }
        Ok(Self {
            size,
            cells: vec![None; size * size],
        })
    }

    /// Build a grid from nested rows of cell candidate lists.
    ///
    /// Fails if the rows are not square, a cell holds more than one plant,
    /// a cell holds a seed, or a plant's traits are out of range.
    pub fn from_rows(rows: Vec<Vec<Vec<Plant>>>) -> Result<Self, GridError> {
        let size = rows.len();
        let mut grid = Self::new(size)?;
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(GridError::NotSquare {
                    rows: size,
                    row: r,
                    cols: row.len(),
                });
            }
            for (c, mut cell) in row.into_iter().enumerate() {
                let position = Position::new(r, c);
                match cell.len() {
                    0 => {}
                    1 => {
                        if let Some(plant) = cell.pop() {
                            grid.place(position, plant)?;
                        }
                    }
                    count => return Err(GridError::CellArity { position, count }),
                }
            }
        }
        Ok(grid)
    }

    /// Put a plant into an empty cell.
    pub fn place(&mut self, position: Position, plant: Plant) -> Result<(), GridError> {
        if !self.in_bounds(position) {
            return Err(GridError::OutOfBounds {
                position,
                size: self.size,
            });
        }
        if plant.is_seed() {
            return Err(GridError::UnresolvedSeed { position });
        }
        plant
            .validate()
            .map_err(|reason| GridError::InvalidPlant { position, reason })?;
        let index = self.index(position);
        if self.cells[index].is_some() {
            return Err(GridError::Occupied { position });
        }
        self.cells[index] = Some(plant);
        Ok(())
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, position: Position) -> bool {
        position.row < self.size && position.col < self.size
    }

    /// The cell `(row + dr, col + dc)`, or `None` if it falls off the grid.
    pub fn offset(&self, position: Position, dr: i64, dc: i64) -> Option<Position> {
        let row = usize::try_from(position.row as i64 + dr).ok()?;
        let col = usize::try_from(position.col as i64 + dc).ok()?;
        let target = Position::new(row, col);
        self.in_bounds(target).then_some(target)
    }

    pub fn get(&self, position: Position) -> Option<&Plant> {
        if !self.in_bounds(position) {
            return None;
        }
        self.cells[self.index(position)].as_ref()
    }

    /// Occupied cells in row-major order.
    pub fn plants(&self) -> impl Iterator<Item = (Position, &Plant)> + '_ {
        self.cells.iter().enumerate().filter_map(|(i, cell)| {
            cell.as_ref()
                .map(|plant| (Position::new(i / self.size, i % self.size), plant))
        })
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.population() == 0
    }

    /// Trait vectors of all living plants, row-major, one per occupied cell.
    pub fn trait_vectors(&self) -> Vec<TraitVector> {
        self.plants().map(|(_, plant)| plant.trait_vector()).collect()
    }

    /// Build a fresh grid by mapping every occupant through `f`, which sees
    /// only this grid. Returning `None` empties the cell.
    pub fn map_plants(&self, mut f: impl FnMut(Position, &Plant) -> Option<Plant>) -> Grid {
        let cells = self
            .cells
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                cell.as_ref()
                    .and_then(|plant| f(Position::new(i / self.size, i % self.size), plant))
            })
            .collect();
        Grid {
            size: self.size,
            cells,
        }
    }

    /// Assemble a grid from row-major cells produced by a phase.
    pub(crate) fn from_cells(size: usize, cells: Vec<Option<Plant>>) -> Grid {
        debug_assert_eq!(cells.len(), size * size);
        Grid { size, cells }
    }

    fn index(&self, position: Position) -> usize {
        position.row * self.size + position.col
    }
}

/// Intra-tick grid where a cell may hold several candidates: the previous
/// occupant (if any) followed by the seeds that landed there, in landing
/// order. Only dispersal creates one and only seed resolution consumes it.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedBed {
    size: usize,
    cells: Vec<Vec<Plant>>,
}

impl SeedBed {
    /// Start a seed bed holding each occupant of `grid` as its cell's sole
    /// candidate.
    pub fn from_grid(grid: &Grid) -> Self {
        Self {
            size: grid.size,
            cells: grid
                .cells
                .iter()
                .map(|cell| cell.iter().cloned().collect())
                .collect(),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Replace the occupant candidate of a cell, keeping any seeds behind it.
    pub fn set_occupant(&mut self, position: Position, plant: Plant) {
        let index = position.row * self.size + position.col;
        match self.cells[index].iter_mut().find(|p| !p.is_seed()) {
            Some(slot) => *slot = plant,
            None => self.cells[index].insert(0, plant),
        }
    }

    /// Append a candidate to a cell. The caller checks bounds.
    pub fn push(&mut self, position: Position, plant: Plant) {
        let index = position.row * self.size + position.col;
        self.cells[index].push(plant);
    }

    pub fn candidates(&self, position: Position) -> &[Plant] {
        &self.cells[position.row * self.size + position.col]
    }

    /// Consume the bed, yielding each cell's candidates in row-major order.
    pub fn into_cells(self) -> impl Iterator<Item = (Position, Vec<Plant>)> {
        let size = self.size;
        self.cells
            .into_iter()
            .enumerate()
            .map(move |(i, cell)| (Position::new(i / size, i % size), cell))
    }
}
