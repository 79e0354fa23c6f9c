//! Seed resolution: collapse every cell of a [`SeedBed`] to at most one plant.

use rand::Rng;

use super::context::TickContext;
use crate::model::{Grid, Plant, SeedBed};

/// Pick the single survivor of a cell.
///
/// An established occupant always beats incoming seeds. Among seeds alone,
/// one is chosen uniformly; a lone seed is kept without an RNG draw.
pub fn resolve_cell(mut candidates: Vec<Plant>, ctx: &mut TickContext) -> Option<Plant> {
    if candidates.is_empty() {
        return None;
    }
    let keep = match candidates.iter().position(|p| !p.is_seed()) {
        Some(occupant) => occupant,
        None if candidates.len() == 1 => 0,
        None => ctx.rng.random_range(0..candidates.len()),
    };
    ctx.report.seeds_discarded += candidates.len() - 1;
    Some(candidates.swap_remove(keep))
}

/// Resolve every cell in row-major order.
pub fn resolve_seeds(bed: SeedBed, ctx: &mut TickContext) -> Grid {
    let size = bed.size();
    let cells = bed
        .into_cells()
        .map(|(_, candidates)| resolve_cell(candidates, ctx))
        .collect();
    Grid::from_cells(size, cells)
}
