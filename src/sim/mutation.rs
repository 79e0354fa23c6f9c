//! Zero-sum trait trade-off applied to freshly resolved seeds.
//!
//! A mutation moves `mutation_factor` of score from one trait to another.
//! Scores are logarithmic, so the same transfer buys less native growth the
//! larger a trait already is.

use rand::Rng;

use super::context::TickContext;
use crate::model::{Grid, Plant, TraitKind};

/// A donor/recipient pair for one mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TradeOff {
    pub from: TraitKind,
    pub to: TraitKind,
}

impl TradeOff {
    /// Draw `from` uniformly from all traits, then `to` uniformly from the
    /// other three.
    pub fn draw(rng: &mut (impl Rng + ?Sized)) -> Self {
        let all = TraitKind::ALL;
        let from_index = rng.random_range(0..all.len());
        let mut to_index = rng.random_range(0..all.len() - 1);
        if to_index >= from_index {
            to_index += 1;
        }
        Self {
            from: all[from_index],
            to: all[to_index],
        }
    }
}

/// Apply a trade-off to one plant.
pub fn mutate(plant: &Plant, trade: TradeOff, factor: f64) -> Plant {
    let mut mutated = plant.clone();
    let from = trade.from.scale();
    let to = trade.to.scale();
    mutated.set_trait_value(trade.from, from.shift(plant.trait_value(trade.from), -factor));
    mutated.set_trait_value(trade.to, to.shift(plant.trait_value(trade.to), factor));
    mutated
}

/// Mutate every seed occupant, row-major. Other plants pass through.
pub fn mutate_seeds(grid: &Grid, ctx: &mut TickContext) -> Grid {
    let factor = ctx.params.mutation_factor;
    grid.map_plants(|_, plant| {
        if !plant.is_seed() {
            return Some(plant.clone());
        }
        let trade = TradeOff::draw(&mut *ctx.rng);
        ctx.report.mutations += 1;
        Some(mutate(plant, trade, factor))
    })
}
