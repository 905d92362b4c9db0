// crates/core/src/language/analyzers/json.rs
//! Json の行解析
//!
//! Json にはコメント構文がないため、code/blank の振り分けだけを行う。

use super::is_terminator_only;
use crate::language::LineAnalyzer;
use crate::stats::FileStats;

#[derive(Debug, Default, Clone, Copy)]
pub struct JsonAnalyzer;

impl LineAnalyzer for JsonAnalyzer {
    fn analyze(&self, lines: &[&str]) -> FileStats {
        let mut stats = FileStats::default();
        for line in lines {
            if is_terminator_only(line) {
                stats.blank += 1;
            } else {
                stats.code += 1;
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(lines: &[&str]) -> FileStats {
        JsonAnalyzer.analyze(lines)
    }

    #[test]
    fn splits_code_and_blank() {
        let stats = analyze(&["{\n", "  \"a\": 1\n", "\n", "}\n"]);
        assert_eq!(stats.code, 3);
        assert_eq!(stats.blank, 1);
    }

    #[test]
    fn comments_are_always_zero() {
        // コメント風の内容があっても comments は増えない
        let stats = analyze(&["// not a comment\n", "# neither\n", "\"\"\"\n"]);
        assert_eq!(stats.comments, 0);
        assert_eq!(stats.code, 3);
    }

    #[test]
    fn crlf_blank() {
        let stats = analyze(&["\r\n"]);
        assert_eq!(stats.blank, 1);
        assert_eq!(stats.code, 0);
    }
}
