// src/processing/tidy.rs

use super::filters::{
    strip_bom, strip_carriage_returns, trim_surrounding_whitespace, trim_trailing_whitespace,
};

/// Normalizes whitespace and line endings of a file's content.
///
/// The steps run in this order:
/// 1. remove every carriage return,
/// 2. remove one leading UTF-8 BOM,
/// 3. remove spaces and tabs at the end of each line,
/// 4. remove leading and trailing Unicode whitespace of the whole content,
/// 5. append a single line feed.
///
/// The transform is total and never inspects the content type; binary input
/// is processed like anything else.
///
/// # Examples
/// ```
/// use txtidy::tidy;
///
/// assert_eq!(tidy(b"hello\r\nworld\r\n"), b"hello\nworld\n");
/// assert_eq!(tidy(b""), b"\n");
/// ```
pub fn tidy(content: &[u8]) -> Vec<u8> {
    let content = strip_carriage_returns(content);
    let content = strip_bom(&content);
    let content = trim_trailing_whitespace(content);
    let content = trim_surrounding_whitespace(&content);

    let mut tidied = Vec::with_capacity(content.len() + 1);
    tidied.extend_from_slice(content);
    tidied.push(b'\n');
    tidied
}
