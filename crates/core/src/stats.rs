// crates/core/src/stats.rs
use std::fmt;
use std::ops::{Add, AddAssign};

/// Line classification counts for a single file, produced by one analyzer
/// pass and then folded into the per-language totals.
///
/// `code` and `comments` are not mutually exclusive: the analyzers count
/// comment markers independently of the blank/code split, so one line may
/// contribute to both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileStats {
    pub code: usize,
    pub comments: usize,
    pub blank: usize,
}

impl Add for FileStats {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            code: self.code + rhs.code,
            comments: self.comments + rhs.comments,
            blank: self.blank + rhs.blank,
        }
    }
}

impl AddAssign for FileStats {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Accumulated totals for one file type across an entire walk.
///
/// `size` and `files` grow for every encountered file of the type; the line
/// counts grow only when an analyzer is registered for it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TotalStats {
    pub code: usize,
    pub comments: usize,
    pub blank: usize,
    pub size: u64,
    pub files: usize,
}

impl TotalStats {
    pub fn record_file(&mut self, size: u64) {
        self.size += size;
        self.files += 1;
    }
}

impl AddAssign<FileStats> for TotalStats {
    fn add_assign(&mut self, rhs: FileStats) {
        self.code += rhs.code;
        self.comments += rhs.comments;
        self.blank += rhs.blank;
    }
}

/// Byte size with the base-1000 human rendering used by the summary table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
#[repr(transparent)]
pub struct FileSize(u64);

impl FileSize {
    pub const fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub const fn bytes(self) -> u64 {
        self.0
    }

    /// Base-1000 human readable representation, one decimal place.
    ///
    /// The bare-byte form carries a `B` suffix (`"999.0B"`); the scaled
    /// units do not (`"1.5Kb"`, `"2.0Mb"`, ... `"3.0Zb"`). Values past the
    /// `Zb` range fall through to `"{n}YbB"`.
    pub fn to_human(self) -> String {
        const UNITS: [&str; 8] = ["", "Kb", "Mb", "Gb", "Tb", "Pb", "Eb", "Zb"];

        let mut num = self.0 as f64;
        for unit in UNITS {
            if num < 1000.0 {
                if unit.is_empty() {
                    return format!("{num:.1}B");
                }
                return format!("{num:.1}{unit}");
            }
            num /= 1000.0;
        }
        format!("{num:.1}YbB")
    }
}

impl From<u64> for FileSize {
    fn from(bytes: u64) -> Self {
        Self::new(bytes)
    }
}

impl fmt::Display for FileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{}", self.to_human())
        } else {
            write!(f, "{}", self.0)
        }
    }
}
