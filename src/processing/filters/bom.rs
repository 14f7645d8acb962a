use crate::constants::UTF8_BOM;

/// Removes a single leading UTF-8 byte order mark, if present.
///
/// Only the first three bytes are inspected; a second BOM directly after the
/// first one is kept.
///
/// # Examples
/// ```
/// use txtidy::processing::filters::strip_bom;
///
/// assert_eq!(strip_bom(b"\xEF\xBB\xBFhi"), b"hi");
/// assert_eq!(strip_bom(b"hi\xEF\xBB\xBF"), b"hi\xEF\xBB\xBF");
/// ```
pub fn strip_bom(content: &[u8]) -> &[u8] {
    content.strip_prefix(UTF8_BOM.as_slice()).unwrap_or(content)
}
