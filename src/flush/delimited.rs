use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use super::HistorySink;
use crate::model::{Grid, TraitVector};

const RECORD_SEPARATOR: &str = ";";
const FIELD_SEPARATOR: &str = ",";

/// `height,width,life_span,shade_tolerance`
pub fn format_trait_vector(traits: &TraitVector) -> String {
    [
        traits.height,
        traits.width,
        traits.life_span,
        traits.shade_tolerance,
    ]
    .map(|v| v.to_string())
    .join(FIELD_SEPARATOR)
}

/// Headerless delimited history: one line per tick, one `;`-separated
/// record per living plant in row-major order. Line length therefore
/// follows the population, and an extinct tick is an empty line.
pub struct DelimitedSink<W: Write> {
    writer: W,
}

impl DelimitedSink<BufWriter<File>> {
    pub fn create(path: &Path) -> io::Result<Self> {
        Ok(Self::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> DelimitedSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> HistorySink for DelimitedSink<W> {
    fn write_tick(&mut self, _tick: u32, grid: &Grid) -> io::Result<()> {
        let line = grid
            .plants()
            .map(|(_, plant)| format_trait_vector(&plant.trait_vector()))
            .collect::<Vec<_>>()
            .join(RECORD_SEPARATOR);
        writeln!(self.writer, "{line}")
    }

    fn finish(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
