// crates/core/src/language/mod.rs
//! 拡張子による言語判定と、言語別アナライザへのディスパッチ

pub mod analyzers;

use std::fmt;

use crate::stats::FileStats;
use analyzers::{HtmlAnalyzer, JsonAnalyzer, PythonAnalyzer};

/// Language tag assigned to a file from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
    Python,
    Json,
    Html,
    Unknown,
}

impl FileType {
    /// Classifies a bare file name. Total function: anything unrecognized
    /// falls back to `Unknown`.
    ///
    /// The extension is the text after the last `.`. A name without a dot
    /// is looked up whole, a trailing dot yields the empty extension, and
    /// `.bashrc` yields `bashrc`. Lookup is case-sensitive, so `a.PY` is
    /// `Unknown`.
    #[must_use]
    pub fn from_file_name(name: &str) -> Self {
        let ext = name.rsplit('.').next().unwrap_or(name);
        match ext {
            "py" => Self::Python,
            "json" => Self::Json,
            "html" => Self::Html,
            _ => Self::Unknown,
        }
    }

    /// Label shown in the Language column.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Python => "Python",
            Self::Json => "Json",
            Self::Html => "html",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Per-language line analysis.
///
/// Input lines keep their original terminators. Every analyzer classifies a
/// line as blank exactly when it is `"\n"` or `"\r\n"` and as code
/// otherwise; comment heuristics stack on top of that split.
pub trait LineAnalyzer {
    fn analyze(&self, lines: &[&str]) -> FileStats;
}

/// 拡張子タグに応じたアナライザを返す（`Unknown` は対象外）
#[must_use]
pub fn analyzer_for(kind: FileType) -> Option<Box<dyn LineAnalyzer>> {
    match kind {
        FileType::Python => Some(Box::new(PythonAnalyzer)),
        FileType::Json => Some(Box::new(JsonAnalyzer)),
        FileType::Html => Some(Box::new(HtmlAnalyzer)),
        FileType::Unknown => None,
    }
}
