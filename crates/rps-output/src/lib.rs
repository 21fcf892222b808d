//! `rps-output` — run output writers for `rust_rps`.
//!
//! | Backend | Files created                           |
//! |---------|-----------------------------------------|
//! | CSV     | `tick_census.csv`, `conversions.csv`    |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `rps_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rps_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs).unwrap();
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::{CENSUS_FILE, CONVERSIONS_FILE, CsvWriter};
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{ConversionRow, TickCensusRow};
pub use writer::OutputWriter;
