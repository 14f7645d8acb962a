use once_cell::sync::Lazy;
use regex::bytes::Regex;

/// One or more spaces or tabs right before a line feed or the end of input.
static TRAILING_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)[\t ]+$").unwrap());

/// Removes runs of spaces and tabs at the end of every line.
///
/// Only `0x20` and `0x09` count here; vertical tab, form feed, NBSP and the
/// like are left in place. Works on arbitrary bytes, valid UTF-8 or not.
///
/// # Examples
/// ```
/// use txtidy::processing::filters::trim_trailing_whitespace;
///
/// assert_eq!(trim_trailing_whitespace(b"a \t\nb  "), b"a\nb".to_vec());
/// ```
pub fn trim_trailing_whitespace(content: &[u8]) -> Vec<u8> {
    TRAILING_WHITESPACE.replace_all(content, &b""[..]).into_owned()
}

/// Removes leading and trailing Unicode whitespace from the whole content.
///
/// Characters are decoded as UTF-8 from each end; trimming stops at the first
/// character that is not whitespace or at the first byte that does not start
/// a valid UTF-8 sequence.
///
/// # Examples
/// ```
/// use txtidy::processing::filters::trim_surrounding_whitespace;
///
/// assert_eq!(trim_surrounding_whitespace(b"\n\n  body\n\xC2\xA0\n"), b"body");
/// ```
pub fn trim_surrounding_whitespace(content: &[u8]) -> &[u8] {
    let start = leading_whitespace_len(content);
    let rest = &content[start..];
    let end = rest.len() - trailing_whitespace_len(rest);
    &rest[..end]
}

fn leading_whitespace_len(content: &[u8]) -> usize {
    // Only the valid UTF-8 prefix can be trimmed; an invalid byte stops us.
    let valid = match std::str::from_utf8(content) {
        Ok(s) => s,
        Err(e) => std::str::from_utf8(&content[..e.valid_up_to()]).unwrap_or_default(),
    };
    valid.len() - valid.trim_start().len()
}

fn trailing_whitespace_len(content: &[u8]) -> usize {
    let mut end = content.len();
    while let Some(c) = last_char(&content[..end]) {
        if !c.is_whitespace() {
            break;
        }
        end -= c.len_utf8();
    }
    content.len() - end
}

/// Decodes the last character of `content`, or `None` if it is empty or
/// does not end in a valid UTF-8 sequence.
fn last_char(content: &[u8]) -> Option<char> {
    let last = *content.last()?;
    if last.is_ascii() {
        return Some(char::from(last));
    }
    // Walk back over continuation bytes (10xxxxxx) to the lead byte.
    let floor = content.len().saturating_sub(4);
    let mut start = content.len() - 1;
    while start > floor && content[start] & 0xC0 == 0x80 {
        start -= 1;
    }
    std::str::from_utf8(&content[start..])
        .ok()
        .and_then(|s| s.chars().next_back())
        .filter(|c| c.len_utf8() == content.len() - start)
}
