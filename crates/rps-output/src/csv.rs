//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `tick_census.csv`
//! - `conversions.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{ConversionRow, OutputResult, TickCensusRow};

pub const CENSUS_FILE: &str = "tick_census.csv";
pub const CONVERSIONS_FILE: &str = "conversions.csv";

/// Writes run output to two CSV files.
pub struct CsvWriter {
    census:      Writer<File>,
    conversions: Writer<File>,
    finished:    bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut census = Writer::from_path(dir.join(CENSUS_FILE))?;
        census.write_record(["tick", "rock", "paper", "scissors", "conversions"])?;

        let mut conversions = Writer::from_path(dir.join(CONVERSIONS_FILE))?;
        conversions.write_record(["tick", "predator", "prey", "slot", "from", "to"])?;

        Ok(Self { census, conversions, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_census(&mut self, row: &TickCensusRow) -> OutputResult<()> {
        self.census.write_record(&[
            row.tick.to_string(),
            row.rock.to_string(),
            row.paper.to_string(),
            row.scissors.to_string(),
            row.conversions.to_string(),
        ])?;
        Ok(())
    }

    fn write_conversions(&mut self, rows: &[ConversionRow]) -> OutputResult<()> {
        for row in rows {
            self.conversions.write_record(&[
                row.tick.to_string(),
                row.predator.to_string(),
                row.prey.to_string(),
                row.slot.to_string(),
                row.from.as_str().to_owned(),
                row.to.as_str().to_owned(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.census.flush()?;
        self.conversions.flush()?;
        Ok(())
    }
}
