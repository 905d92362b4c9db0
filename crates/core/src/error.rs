// crates/core/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Faults surfaced by a walk. There is no skip-and-continue path: the first
/// error aborts the whole run and no partial totals are reported.
#[derive(Debug, Error)]
pub enum CensusError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),
}

pub type Result<T> = std::result::Result<T, CensusError>;
