// src/output/csv.rs

use std::io::{self, Write};

use crate::models::Table;

/// Write one row with every field quoted, `"` doubled, `\n` terminated.
fn write_row<W: Write>(w: &mut W, row: &[String]) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first {
            w.write_all(b",")?;
        } else {
            first = false;
        }
        write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
    }
    w.write_all(b"\n")
}

/// Header and data rows as CSV.
pub fn write_csv<W: Write>(w: &mut W, table: &Table) -> io::Result<()> {
    for row in table.all_rows() {
        write_row(w, row)?;
    }
    w.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quotes_and_escapes() {
        let mut table = Table::new(["Article link", "Title"]);
        table
            .push(["https://x/3.12.html", "Say \"hi\", twice"])
            .unwrap();

        let mut out = Vec::new();
        write_csv(&mut out, &table).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\"Article link\",\"Title\"\n\"https://x/3.12.html\",\"Say \"\"hi\"\", twice\"\n"
        );
    }

    #[test]
    fn test_empty_cell_is_quoted() {
        let mut table = Table::new(["Version", "Status"]);
        table.push(["All versions", ""]).unwrap();

        let mut out = Vec::new();
        write_csv(&mut out, &table).unwrap();
        assert!(String::from_utf8(out).unwrap().ends_with("\"All versions\",\"\"\n"));
    }
}
