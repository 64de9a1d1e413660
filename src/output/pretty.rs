// src/output/pretty.rs

use std::io::{self, Write};

use unicode_segmentation::UnicodeSegmentation;

use crate::models::Table;

fn width(cell: &str) -> usize {
    cell.graphemes(true).count()
}

fn border(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for w in widths {
        line.push_str(&"-".repeat(w + 2));
        line.push('+');
    }
    line
}

fn write_cells<W: Write>(w: &mut W, row: &[String], widths: &[usize]) -> io::Result<()> {
    write!(w, "|")?;
    for (cell, col_width) in row.iter().zip(widths) {
        let pad = col_width - width(cell);
        write!(w, " {}{} |", cell, " ".repeat(pad))?;
    }
    writeln!(w)
}

/// Left-aligned boxed table.
pub fn write_pretty<W: Write>(w: &mut W, table: &Table) -> io::Result<()> {
    let mut widths: Vec<usize> = table.header().iter().map(|c| width(c)).collect();
    for row in table.rows() {
        for (col, cell) in row.iter().enumerate() {
            widths[col] = widths[col].max(width(cell));
        }
    }

    let line = border(&widths);
    writeln!(w, "{line}")?;
    write_cells(w, table.header(), &widths)?;
    writeln!(w, "{line}")?;
    for row in table.rows() {
        write_cells(w, row, &widths)?;
    }
    writeln!(w, "{line}")?;
    w.flush()
}
