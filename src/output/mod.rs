//! Report output: plain lines, an aligned terminal table, or a CSV file.
//!
//! Each writer takes the finished [`Table`] and writes it in one step.

mod csv;
mod pretty;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::error::Result;
use crate::models::{Mode, OutputMode, Table};

pub use csv::write_csv;
pub use pretty::write_pretty;

/// Timestamp format used in result file names.
pub const FILE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Send `table` to the destination chosen by `output`.
///
/// Returns the written path for [`OutputMode::File`].
pub fn emit(
    table: &Table,
    mode: Mode,
    output: OutputMode,
    results_dir: &Path,
) -> Result<Option<PathBuf>> {
    match output {
        OutputMode::Plain => {
            let stdout = io::stdout();
            write_plain(&mut stdout.lock(), table)?;
            Ok(None)
        }
        OutputMode::Pretty => {
            let stdout = io::stdout();
            write_pretty(&mut stdout.lock(), table)?;
            Ok(None)
        }
        OutputMode::File => {
            let path = save_csv(table, mode, results_dir, Local::now())?;
            log::info!("Results saved: {}", path.display());
            Ok(Some(path))
        }
    }
}

/// One line per row, cells separated by a single space.
pub fn write_plain<W: Write>(w: &mut W, table: &Table) -> io::Result<()> {
    for row in table.all_rows() {
        writeln!(w, "{}", row.join(" "))?;
    }
    w.flush()
}

/// `<mode>_<YYYY-MM-DD_HH-MM-SS>.csv`
pub fn results_file_name(mode: Mode, at: DateTime<Local>) -> String {
    format!("{}_{}.csv", mode, at.format(FILE_TIMESTAMP_FORMAT))
}

/// Write `table` as CSV into `results_dir`, creating it if needed.
pub fn save_csv(
    table: &Table,
    mode: Mode,
    results_dir: &Path,
    at: DateTime<Local>,
) -> Result<PathBuf> {
    std::fs::create_dir_all(results_dir)?;
    let path = results_dir.join(results_file_name(mode, at));

    let mut buf: Vec<u8> = Vec::new();
    write_csv(&mut buf, table)?;
    std::fs::write(&path, buf)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn sample() -> Table {
        let mut table = Table::new(["Status", "Count"]);
        table.push(["Final", "3"]).unwrap();
        table.push(["Total", "3"]).unwrap();
        table
    }

    #[test]
    fn test_write_plain() {
        let mut out = Vec::new();
        write_plain(&mut out, &sample()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Status Count\nFinal 3\nTotal 3\n"
        );
    }

    #[test]
    fn test_results_file_name() {
        let at = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        assert_eq!(
            results_file_name(Mode::LatestVersions, at),
            "latest-versions_2024-03-09_07-05-01.csv"
        );
    }

    #[test]
    fn test_save_csv_creates_results_dir() {
        let dir = tempfile::tempdir().unwrap();
        let results = dir.path().join("results");
        let at = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();

        let path = save_csv(&sample(), Mode::Pep, &results, at).unwrap();

        assert_eq!(path, results.join("pep_2024-03-09_07-05-01.csv"));
        assert_eq!(
            std::fs::read_to_string(path).unwrap(),
            "\"Status\",\"Count\"\n\"Final\",\"3\"\n\"Total\",\"3\"\n"
        );
    }
}
