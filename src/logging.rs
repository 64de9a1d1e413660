// src/logging.rs

//! Logger setup: `dd.mm.YYYY HH:MM:SS [LEVEL] message` lines written to
//! stderr and appended to a log file.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger, format_description,
};

/// Level from `RUST_LOG` when it names one, otherwise `debug`/`info` by verbosity.
fn level_filter(verbose: bool, rust_log: Option<&str>) -> LevelFilter {
    rust_log
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
}

fn build_config() -> Config {
    let mut builder = ConfigBuilder::new();
    builder
        .set_time_format_custom(format_description!(
            "[day].[month].[year] [hour]:[minute]:[second]"
        ))
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .set_location_level(LevelFilter::Off);
    // Falls back to UTC when the local offset cannot be determined.
    let _ = builder.set_time_offset_to_local();
    builder.build()
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global logger. `RUST_LOG` overrides the default level.
pub fn init(verbose: bool, log_file: &Path) {
    let level = level_filter(verbose, std::env::var("RUST_LOG").ok().as_deref());
    let config = build_config();

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        config.clone(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];
    match open_log_file(log_file) {
        Ok(file) => loggers.push(WriteLogger::new(level, config, file)),
        Err(err) => eprintln!(
            "Warning: Could not open log file at {}: {}",
            log_file.display(),
            err
        ),
    }

    let _ = CombinedLogger::init(loggers);
}
