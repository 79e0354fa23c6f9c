//! Drives a tick with an RNG that always returns zero, so every random
//! choice takes the low end of its range.

use canopy_sim::model::*;
use canopy_sim::scenario::Scenario;
use canopy_sim::sim::{SimParams, tick_with_report};
use rand::RngCore;

struct ZeroRng;

impl RngCore for ZeroRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        dst.fill(0);
    }
}

#[test]
fn zero_rng_gives_a_fully_predictable_tick() {
    let mut scenario = Scenario::new(5);
    scenario.plant(2, 2).height(8).width(2).life_span(20).shade_tolerance(50).sunlight(20.0);
    let grid = scenario.build().unwrap();

    let (next, report) = tick_with_report(&grid, &mut ZeroRng, &SimParams::default());

    // 5 cells of light on top of 20, minus the 20-unit threshold.
    let parent = next.get(Position::new(2, 2)).unwrap();
    assert_eq!(parent.sunlight, 5.0);

    // All four seeds land at offset (-2, -2); the first is kept.
    assert_eq!(report.seeds_emitted, 4);
    assert_eq!(report.seeds_dropped, 0);
    assert_eq!(report.seeds_discarded, 3);
    assert_eq!(report.mutations, 1);
    assert_eq!(next.population(), 2);

    // Height donates to width: 8 / sqrt(2) -> 6, 2 * sqrt(2) -> 3.
    let child = next.get(Position::new(0, 0)).unwrap();
    assert_eq!(child.status, PlantStatus::Germinating);
    assert_eq!(child.age, 1);
    assert_eq!(
        child.trait_vector(),
        TraitVector {
            height: 6,
            width: 3,
            life_span: 20,
            shade_tolerance: 50,
        }
    );
}
