#![allow(dead_code)]

use canopy_sim::model::*;
use canopy_sim::scenario::Scenario;
use canopy_sim::sim::mutation::{TradeOff, mutate};

/// The documented example: one seeding plant in the middle of a 5x5 grid.
pub fn lone_seeder() -> Scenario {
    let mut scenario = Scenario::new(5);
    scenario
        .plant(2, 2)
        .height(8)
        .width(3)
        .life_span(10)
        .shade_tolerance(25)
        .sunlight(0.0);
    scenario
}

/// Whether `child` carries exactly one trade-off mutation of `parent`'s traits.
pub fn is_single_trade_off(parent: &Plant, child: &Plant, factor: f64) -> bool {
    TraitKind::ALL.into_iter().any(|from| {
        TraitKind::ALL.into_iter().any(|to| {
            from != to
                && mutate(parent, TradeOff { from, to }, factor).trait_vector()
                    == child.trait_vector()
        })
    })
}

/// Plants that germinated during the tick that produced `grid`.
pub fn newborns(grid: &Grid) -> Vec<(Position, &Plant)> {
    grid.plants()
        .filter(|(_, p)| p.status == PlantStatus::Germinating && p.age == 1)
        .collect()
}

pub fn read_lines(path: &std::path::Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(String::from)
        .collect()
}
