//! CSV I/O for the aether traffic generator.
//!
//! The core pipeline never touches the filesystem; this crate is the
//! boundary the CLI uses to load pattern tables and persist generated
//! series.

mod error;
mod pattern_read;
mod series_write;

pub use error::IoError;
pub use pattern_read::read_pattern_csv;
pub use series_write::{write_diurnal_csv, write_series_csv};
