//! Report modes and output destinations.

use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// The report this run produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Mode {
    /// Release notes for each minor version
    WhatsNew,
    /// Documentation versions and their support status
    LatestVersions,
    /// Download the A4 PDF documentation archive
    Download,
    /// Proposal counts per status
    Pep,
}

impl Mode {
    pub const ALL: [Mode; 4] = [
        Mode::WhatsNew,
        Mode::LatestVersions,
        Mode::Download,
        Mode::Pep,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::WhatsNew => "whats-new",
            Mode::LatestVersions => "latest-versions",
            Mode::Download => "download",
            Mode::Pep => "pep",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| AppError::config(format!("unknown mode '{s}'")))
    }
}

/// Where the finished table goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputMode {
    /// One line per row, cells separated by spaces
    #[default]
    Plain,
    /// Aligned table on the terminal
    Pretty,
    /// CSV file in the results directory
    File,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_round_trips_through_name() {
        for mode in Mode::ALL {
            assert_eq!(mode.as_str().parse::<Mode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_unknown_mode_rejected() {
        assert!("whatsnew".parse::<Mode>().is_err());
    }
}
