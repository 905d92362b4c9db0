// crates/core/src/language/analyzers/mod.rs
pub mod html;
pub mod json;
pub mod python;

pub use html::HtmlAnalyzer;
pub use json::JsonAnalyzer;
pub use python::PythonAnalyzer;

/// 行が改行のみ (`"\n"` / `"\r\n"`) かどうか
///
/// 空白だけの行は改行単独ではないので code 扱いになる。
pub(crate) fn is_terminator_only(line: &str) -> bool {
    line == "\n" || line == "\r\n"
}
