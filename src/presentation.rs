// src/presentation.rs
use std::io::{self, Write};

use code_census_core::{Census, FileSize};

/// Writes the summary table: one row per observed file type, in
/// first-encounter order.
pub fn render_table(census: &Census, out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "{:<10} {:>9} {:>9} {:>9} {:>7} {:>12}",
        "Language", "Code", "Comment", "Blank", "Files", "Size"
    )?;
    writeln!(out, "-------------------------------------------------------------")?;

    for (kind, totals) in census.iter() {
        writeln!(
            out,
            "{:<10} {:>9} {:>9} {:>9} {:>7} {:>12}",
            kind,
            totals.code,
            totals.comments,
            totals.blank,
            totals.files,
            human_size(Some(FileSize::new(totals.size))),
        )?;
    }

    Ok(())
}

/// A size that never materialized renders as a fixed sentinel.
fn human_size(size: Option<FileSize>) -> String {
    size.map_or_else(|| "unknown size".to_owned(), FileSize::to_human)
}
