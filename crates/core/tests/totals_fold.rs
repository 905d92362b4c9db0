// crates/core/tests/totals_fold.rs
use code_census_core::{FileStats, TotalStats};

#[test]
fn fold_is_additive() {
    let first = FileStats { code: 2, comments: 1, blank: 1 };
    let second = FileStats { code: 5, comments: 0, blank: 3 };

    let mut totals = TotalStats::default();
    totals += first;
    totals += second;

    let summed = first + second;
    assert_eq!(totals.code, summed.code);
    assert_eq!(totals.comments, summed.comments);
    assert_eq!(totals.blank, summed.blank);
}

#[test]
fn record_file_counts_every_file() {
    let mut totals = TotalStats::default();
    totals.record_file(100);
    totals.record_file(24);

    assert_eq!(totals.files, 2);
    assert_eq!(totals.size, 124);
    // record_file never touches the line counts
    assert_eq!(totals.code, 0);
    assert_eq!(totals.comments, 0);
    assert_eq!(totals.blank, 0);
}

#[test]
fn fold_never_touches_size_or_files() {
    let mut totals = TotalStats::default();
    totals += FileStats { code: 7, comments: 2, blank: 1 };

    assert_eq!(totals.files, 0);
    assert_eq!(totals.size, 0);
}

#[test]
fn file_stats_add_assign() {
    let mut stats = FileStats { code: 1, comments: 1, blank: 0 };
    stats += FileStats { code: 2, comments: 0, blank: 4 };
    assert_eq!(stats, FileStats { code: 3, comments: 1, blank: 4 });
}
