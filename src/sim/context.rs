use rand::RngCore;

use super::config::SimParams;

/// Context passed to each randomized phase of a tick.
///
/// Bundled so the phase signatures stay stable as parameters grow.
pub struct TickContext<'a> {
    /// The only source of randomness. Draw order is fixed: dispersal
    /// offsets, then resolution picks, then mutation indices.
    pub rng: &'a mut dyn RngCore,
    pub params: &'a SimParams,
    /// Phases add their counts here.
    pub report: &'a mut TickReport,
}

/// What one tick did, phase by phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub matured: usize,
    /// Light units handed out by canopy resolution.
    pub light_collected: u64,
    pub dispersing_parents: usize,
    pub seeds_emitted: usize,
    /// Seeds that landed off the grid.
    pub seeds_dropped: usize,
    /// Seeds lost to an occupant or to a sibling seed in resolution.
    pub seeds_discarded: usize,
    pub mutations: usize,
    pub germinated: usize,
    pub died: usize,
    /// Living plants at the end of the tick.
    pub population: usize,
}
