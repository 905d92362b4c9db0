// crates/core/src/census.rs
use crate::language::FileType;
use crate::stats::TotalStats;

/// Result of a walk: totals per observed file type.
///
/// Entries appear in first-encounter order and iteration replays that order,
/// so the rendered table is reproducible run to run. Only observed file
/// types have an entry; with four possible keys a vector beats a map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Census {
    entries: Vec<(FileType, TotalStats)>,
}

impl Census {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Totals slot for `kind`, created zeroed on first access.
    pub fn entry_mut(&mut self, kind: FileType) -> &mut TotalStats {
        let pos = match self.entries.iter().position(|(k, _)| *k == kind) {
            Some(pos) => pos,
            None => {
                self.entries.push((kind, TotalStats::default()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[pos].1
    }

    #[must_use]
    pub fn get(&self, kind: FileType) -> Option<&TotalStats> {
        self.entries.iter().find(|(k, _)| *k == kind).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FileType, &TotalStats)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
