/// Removes every carriage return (`0x0D`) from the content.
///
/// CRLF becomes LF and a lone CR disappears; no state is tracked.
///
/// # Examples
/// ```
/// use txtidy::processing::filters::strip_carriage_returns;
///
/// assert_eq!(strip_carriage_returns(b"a\r\nb\rc"), b"a\nbc".to_vec());
/// ```
pub fn strip_carriage_returns(content: &[u8]) -> Vec<u8> {
    content.iter().copied().filter(|&b| b != b'\r').collect()
}
