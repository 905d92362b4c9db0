// crates/core/src/language/analyzers/python.rs
//! Python のコメント処理
//!
//! 行単位のヒューリスティックのみ:
//! - 空白除去後に `"""` で始まる行はコメント +1
//!   (Docstring の開始行・終了行の両方が対象。範囲追跡はしない)
//! - 行内の `#` は出現ごとにコメント +1 (文字列内かどうかは区別しない)
//!
//! コメント加算と code/blank 判定は独立しており、同じ行が comments と
//! code の両方に数えられることがある。粗い見積もり用であって正確な
//! 字句解析ではない。

use super::is_terminator_only;
use crate::language::LineAnalyzer;
use crate::stats::FileStats;

/// Python スタイル (`#` / `"""`) の解析
#[derive(Debug, Default, Clone, Copy)]
pub struct PythonAnalyzer;

impl LineAnalyzer for PythonAnalyzer {
    fn analyze(&self, lines: &[&str]) -> FileStats {
        let mut stats = FileStats::default();
        for line in lines {
            if line.trim().starts_with("\"\"\"") {
                stats.comments += 1;
            }
            stats.comments += bytecount::count(line.as_bytes(), b'#');

            if is_terminator_only(line) {
                stats.blank += 1;
            } else {
                stats.code += 1;
            }
        }
        stats
    }
}
