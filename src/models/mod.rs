// src/models/mod.rs

//! Domain models for the scraper.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod config;
mod mode;
mod notes;
mod status;
mod table;

// Re-export all public types
pub use config::{
    CacheConfig, Config, ErrorPolicy, HttpConfig, PathsConfig, RunConfig, SourcesConfig,
};
pub use mode::{Mode, OutputMode};
pub use notes::{FailureNote, FailureNotes};
pub use status::{ExpectedStatusTable, StatusTally};
pub use table::{Row, Table};
