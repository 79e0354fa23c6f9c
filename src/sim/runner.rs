use std::io;

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use thiserror::Error;
use tracing::{debug, info};

use super::config::{ConfigError, SimParams};
use super::context::{TickContext, TickReport};
use super::{dispersal, lifecycle, light, mutation, resolve};
use crate::flush::HistorySink;
use crate::model::{Grid, GridError};

/// Configuration for a simulation run.
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    pub num_ticks: u32,
    pub seed: u64,
    pub params: SimParams,
}

impl SimConfig {
    pub fn new(num_ticks: u32, seed: u64) -> Self {
        Self {
            num_ticks,
            seed,
            params: SimParams::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("failed to write tick history: {0}")]
    Sink(#[from] io::Error),
}

/// Advance the grid by one tick, reporting what each phase did.
///
/// Phase order is fixed:
/// 1. germinating plants past `germination_time` start seeding
/// 2. canopies collect sunlight
/// 3. ready parents disperse seeds
/// 4. each cell is resolved to at most one plant
/// 5. surviving seeds mutate
/// 6. seeds become germinating
/// 7. every plant ages by one
/// 8. plants at or past their life span are removed
///
/// Every phase reads the previous phase's grid and builds a new one. The
/// input grid is left untouched.
pub fn tick_with_report(
    grid: &Grid,
    rng: &mut dyn RngCore,
    params: &SimParams,
) -> (Grid, TickReport) {
    let mut report = TickReport::default();

    let matured = lifecycle::mature(grid, params.germination_time, &mut report);
    let lit = light::collect_sunlight(&matured, params.canopy, &mut report);

    let mut ctx = TickContext {
        rng,
        params,
        report: &mut report,
    };
    let bed = dispersal::disperse_seeds(&lit, &mut ctx);
    let resolved = resolve::resolve_seeds(bed, &mut ctx);
    let mutated = mutation::mutate_seeds(&resolved, &mut ctx);

    let germinated = lifecycle::germinate(&mutated, &mut report);
    let aged = lifecycle::age(&germinated);
    let next = lifecycle::remove_expired(&aged, &mut report);

    report.population = next.population();
    (next, report)
}

/// Advance the grid by one tick.
pub fn tick(grid: &Grid, rng: &mut dyn RngCore, params: &SimParams) -> Grid {
    tick_with_report(grid, rng, params).0
}

/// Run `num_ticks` ticks with a caller-supplied RNG. Returns one snapshot per
/// completed tick, in tick order.
pub fn run_with_rng(
    grid: &Grid,
    num_ticks: u32,
    rng: &mut dyn RngCore,
    params: &SimParams,
) -> Vec<Grid> {
    let mut snapshots: Vec<Grid> = Vec::with_capacity(num_ticks as usize);
    for tick_number in 1..=num_ticks {
        let current = snapshots.last().unwrap_or(grid);
        let (next, report) = tick_with_report(current, rng, params);
        log_tick(tick_number, &report);
        snapshots.push(next);
    }
    snapshots
}

/// Run the configured number of ticks.
///
/// Creates a deterministic RNG from `config.seed`, so the same seed always
/// produces the same history.
pub fn run(grid: &Grid, config: &SimConfig) -> Result<Vec<Grid>, ConfigError> {
    config.params.validate()?;
    info!(
        size = grid.size(),
        ticks = config.num_ticks,
        seed = config.seed,
        "starting simulation"
    );
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let snapshots = run_with_rng(grid, config.num_ticks, &mut rng, &config.params);
    info!(
        population = snapshots.last().unwrap_or(grid).population(),
        "simulation finished"
    );
    Ok(snapshots)
}

/// Run the configured number of ticks, streaming each tick's grid into
/// `sink` instead of keeping every snapshot. Returns the final grid.
pub fn run_to_sink(
    grid: &Grid,
    config: &SimConfig,
    sink: &mut dyn HistorySink,
) -> Result<Grid, RunError> {
    config.params.validate()?;
    info!(
        size = grid.size(),
        ticks = config.num_ticks,
        seed = config.seed,
        "starting simulation"
    );
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut current = grid.clone();
    for tick_number in 1..=config.num_ticks {
        let (next, report) = tick_with_report(&current, &mut rng, &config.params);
        log_tick(tick_number, &report);
        sink.write_tick(tick_number, &next)?;
        current = next;
    }
    sink.finish()?;
    info!(population = current.population(), "simulation finished");
    Ok(current)
}

fn log_tick(tick_number: u32, report: &TickReport) {
    debug!(
        tick = tick_number,
        population = report.population,
        light = report.light_collected,
        parents = report.dispersing_parents,
        emitted = report.seeds_emitted,
        dropped = report.seeds_dropped,
        discarded = report.seeds_discarded,
        mutations = report.mutations,
        matured = report.matured,
        germinated = report.germinated,
        died = report.died,
        "tick complete"
    );
}
