// src/lib.rs

//! Python documentation scraper library

pub mod error;
#[cfg(feature = "cli")]
pub mod logging;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod services;
pub mod utils;
