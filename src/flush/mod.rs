//! Per-tick history output. The tick core knows nothing about these formats;
//! it only hands each finished grid to a [`HistorySink`].

mod delimited;
mod jsonl;

use std::io;

use crate::model::Grid;

pub use delimited::{DelimitedSink, format_trait_vector};
pub use jsonl::{JsonlSink, TickRecord, write_history_jsonl};

/// Receives the grid after every completed tick.
pub trait HistorySink {
    fn write_tick(&mut self, tick: u32, grid: &Grid) -> io::Result<()>;

    /// Called once after the last tick. Default: no-op.
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}
