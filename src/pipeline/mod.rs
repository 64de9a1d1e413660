//! Pipeline entry points.
//!
//! - `run_mode`: dispatch to the extractor for a mode
//! - `run_report`: extract, flush failure notes, write the report

pub mod run;

pub use run::{run_mode, run_report};
