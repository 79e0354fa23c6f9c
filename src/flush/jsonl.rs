use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::HistorySink;
use crate::model::{Grid, TraitVector};

/// One tick of history: the trait vectors of every living plant, row-major.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickRecord {
    pub tick: u32,
    pub plants: Vec<TraitVector>,
}

impl TickRecord {
    pub fn from_grid(tick: u32, grid: &Grid) -> Self {
        Self {
            tick,
            plants: grid.trait_vectors(),
        }
    }
}

/// Write a finished run's snapshots to `path`, one [`TickRecord`] per line.
/// Snapshot `i` is tick `i + 1`.
pub fn write_history_jsonl(path: &Path, snapshots: &[Grid]) -> io::Result<()> {
    let mut sink = JsonlSink::create(path)?;
    for (grid, tick) in snapshots.iter().zip(1..) {
        sink.write_tick(tick, grid)?;
    }
    sink.finish()
}

/// Streams one [`TickRecord`] per line as ticks complete.
pub struct JsonlSink<W: Write> {
    writer: W,
}

impl JsonlSink<BufWriter<File>> {
    pub fn create(path: &Path) -> io::Result<Self> {
        Ok(Self::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> JsonlSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> HistorySink for JsonlSink<W> {
    fn write_tick(&mut self, tick: u32, grid: &Grid) -> io::Result<()> {
        serde_json::to_writer(&mut self.writer, &TickRecord::from_grid(tick, grid))?;
        self.writer.write_all(b"\n")
    }

    fn finish(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
