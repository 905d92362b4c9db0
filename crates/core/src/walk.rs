// crates/core/src/walk.rs
//! Recursive walk driving classification and analysis.

use std::fs;
use std::path::Path;

use ignore::WalkBuilder;

use crate::census::Census;
use crate::error::{CensusError, Result};
use crate::language::{self, FileType};

/// Walks every file under `root` and accumulates per-language totals.
///
/// Size and file count accumulate for every regular file regardless of its
/// type; line counts only for types with a registered analyzer, so files of
/// unrecognized types are never opened. The walker runs with standard
/// filters disabled (hidden files and ignore files are not special) and a
/// file-name sort, so first-encounter order is stable across runs.
///
/// # Errors
///
/// The first fault aborts the whole walk with no partial result: traversal
/// errors, unreadable files, and non-UTF-8 content in an analyzed file
/// (surfacing as an `InvalidData` read error) all propagate.
pub fn walk(root: &Path) -> Result<Census> {
    let mut census = Census::new();

    let mut builder = WalkBuilder::new(root);
    builder.standard_filters(false).sort_by_file_name(|a, b| a.cmp(b));

    for entry in builder.build() {
        let entry = entry?;
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        let kind = FileType::from_file_name(&name);

        let size = entry.metadata()?.len();
        census.entry_mut(kind).record_file(size);

        let Some(analyzer) = language::analyzer_for(kind) else {
            continue;
        };

        let path = entry.path();
        let content = fs::read_to_string(path).map_err(|e| CensusError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        // split_inclusive keeps the terminators and yields no phantom empty
        // final line, which is exactly the line sequence the analyzers expect.
        let lines: Vec<&str> = content.split_inclusive('\n').collect();
        *census.entry_mut(kind) += analyzer.analyze(&lines);
    }

    Ok(census)
}
