//! Escaping for the generated C string literal

use crate::minifier::Minified;

/// Escape minified text for use inside a double-quoted C string literal.
///
/// Every `"` becomes `\"`. Nothing else is touched: minified stylesheets
/// carry no raw newlines, and backslashes are passed through so CSS escapes
/// like `\f101` reach the compiler unchanged. `Absent` escapes to `""`.
pub fn escape_c_string(input: &Minified) -> String {
    input.as_str().replace('"', "\\\"")
}

/// Number of `\"` sequences [`escape_c_string`] introduces for `text`.
pub fn escaped_quote_count(text: &str) -> usize {
    text.matches('"').count()
}
