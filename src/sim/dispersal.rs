//! Seed dispersal.
//!
//! Reads the phase-start grid only: every emitting parent and every landing
//! spot is decided from that snapshot, and the new seeds are written into a
//! separate [`SeedBed`]. A seed that lands during this pass is never itself
//! a dispersal candidate.

use rand::Rng;
use tracing::trace;

use super::context::TickContext;
use crate::model::{Grid, Plant, PlantStatus, SeedBed};

/// Whether `plant` releases seeds this tick.
pub fn ready_to_seed(plant: &Plant, light_for_seeds_coefficient: f64) -> bool {
    plant.status == PlantStatus::Seeding
        && plant.sunlight >= plant.seed_threshold(light_for_seeds_coefficient)
}

/// Emit `num_seeds` seeds from every ready parent.
///
/// Each parent pays exactly one seed threshold of sunlight no matter how
/// much it holds. Each seed lands at `(row + dr, col + dc)` with `dr`, `dc`
/// drawn independently from `[-width, width]`; off-grid landings are lost.
pub fn disperse_seeds(grid: &Grid, ctx: &mut TickContext) -> SeedBed {
    let coefficient = ctx.params.light_for_seeds_coefficient;
    let mut bed = SeedBed::from_grid(grid);

    for (parent_pos, parent) in grid.plants() {
        if !ready_to_seed(parent, coefficient) {
            continue;
        }
        ctx.report.dispersing_parents += 1;

        let paid = Plant {
            sunlight: parent.sunlight - parent.seed_threshold(coefficient),
            ..parent.clone()
        };
        let seed = paid.offspring();
        bed.set_occupant(parent_pos, paid);

        let reach = i64::from(parent.width);
        for _ in 0..ctx.params.num_seeds {
            let dr = ctx.rng.random_range(-reach..=reach);
            let dc = ctx.rng.random_range(-reach..=reach);
            ctx.report.seeds_emitted += 1;
            match grid.offset(parent_pos, dr, dc) {
                Some(landing) => bed.push(landing, seed.clone()),
                None => {
                    ctx.report.seeds_dropped += 1;
                    trace!(?parent_pos, dr, dc, "seed landed off the grid");
                }
            }
        }
    }

    bed
}
