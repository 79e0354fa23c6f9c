//! Canopy shading and sunlight collection.
//!
//! Every plant claims each cell under its canopy. The tallest claim on a cell
//! wins it; equal heights go to the claim enumerated first (plants in
//! row-major order, then each plant's canopy cells row by row). Each won
//! cell is worth one unit of sunlight to its owner.

use super::config::CanopyShape;
use super::context::TickReport;
use crate::model::{Grid, Plant, Position};

#[derive(Debug, Clone, Copy)]
struct Claim {
    height: u32,
    owner: Position,
}

/// Cells covered by the canopy of a plant at `owner`, clipped to a
/// `size` x `size` grid. Rows ascend, then columns within a row, so the
/// first claim on a cell is the row-major first one.
///
/// Only on-grid cells are visited: the cost is bounded by the grid, never
/// by `width`.
pub fn canopy_cells(
    size: usize,
    owner: Position,
    width: u32,
    shape: CanopyShape,
) -> impl Iterator<Item = Position> {
    let width = usize::try_from(width).unwrap_or(usize::MAX);
    let reach = width.saturating_sub(1);
    let last = size.saturating_sub(1);
    let rows = owner.row.saturating_sub(reach)..=owner.row.saturating_add(reach).min(last);
    let first_col = owner.col.saturating_sub(reach);
    let last_col = owner.col.saturating_add(reach).min(last);
    rows.flat_map(move |row| (first_col..=last_col).map(move |col| Position::new(row, col)))
        .filter(move |cell| match shape {
            CanopyShape::Diamond => owner.manhattan(*cell) < width,
            CanopyShape::Square => true,
        })
}

/// Winner of every cell, row-major. `None` where no canopy reaches.
pub fn resolve_canopy(grid: &Grid, shape: CanopyShape) -> Vec<Option<Position>> {
    let size = grid.size();
    let mut claims: Vec<Option<Claim>> = vec![None; size * size];

    for (owner, plant) in grid.plants() {
        for cell in canopy_cells(size, owner, plant.width, shape) {
            let slot = &mut claims[cell.row * size + cell.col];
            // Strictly taller replaces; ties keep the earlier claim.
            if slot.is_none_or(|held| plant.height > held.height) {
                *slot = Some(Claim {
                    height: plant.height,
                    owner,
                });
            }
        }
    }

    claims
        .into_iter()
        .map(|claim| claim.map(|c| c.owner))
        .collect()
}

/// Credit each plant with one unit of sunlight per cell it wins.
pub fn collect_sunlight(grid: &Grid, shape: CanopyShape, report: &mut TickReport) -> Grid {
    let size = grid.size();
    let mut wins = vec![0_u32; size * size];
    for owner in resolve_canopy(grid, shape).into_iter().flatten() {
        wins[owner.row * size + owner.col] += 1;
    }

    grid.map_plants(|position, plant| {
        let gained = wins[position.row * size + position.col];
        report.light_collected += u64::from(gained);
        Some(Plant {
            sunlight: plant.sunlight + f64::from(gained),
            ..plant.clone()
        })
    })
}
