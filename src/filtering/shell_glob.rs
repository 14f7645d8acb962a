// src/filtering/shell_glob.rs

//! Rewrites classical shell file name patterns into `glob::Pattern` syntax.
//!
//! `glob` is a path matcher: it reserves `**` for whole path components, only
//! knows `[!...]` for negated classes and has no escape character. File name
//! patterns follow the single-component shell rules instead:
//!
//! - runs of `*` mean the same as one `*`,
//! - a class is negated by `[^...]` as well as `[!...]`,
//! - `\x` matches `x` literally, inside a class too,
//! - a class may not start with an unescaped `]` or `-`, and a range may not
//!   end with one.

use glob::PatternError;

const ERROR_DANGLING_ESCAPE: &str = "pattern ends with an unfinished escape";
const ERROR_UNCLOSED_CLASS: &str = "character class is not closed";
const ERROR_BAD_CLASS_CHAR: &str = "unescaped '-' or ']' inside a character class";

/// Translates `pattern` into an equivalent `glob::Pattern` source string.
///
/// # Errors
/// Returns a `PatternError` for a trailing `\`, an unclosed `[`, or a class
/// member that is an unescaped `-` or `]`.
pub(super) fn to_glob_syntax(pattern: &str) -> Result<String, PatternError> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len());
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '*' => {
                while i < chars.len() && chars[i] == '*' {
                    i += 1;
                }
                out.push('*');
            }
            '?' => {
                out.push('?');
                i += 1;
            }
            '\\' => {
                let c = *chars.get(i + 1).ok_or(PatternError {
                    pos: i,
                    msg: ERROR_DANGLING_ESCAPE,
                })?;
                push_literal(&mut out, c);
                i += 2;
            }
            '[' => {
                let (class, next) = parse_class(&chars, i)?;
                out.push_str(&class.render());
                i = next;
            }
            c => {
                push_literal(&mut out, c);
                i += 1;
            }
        }
    }
    Ok(out)
}

/// A literal character; glob metacharacters are wrapped in a one-char class.
fn push_literal(out: &mut String, c: char) {
    if matches!(c, '*' | '?' | '[' | ']') {
        out.push('[');
        out.push(c);
        out.push(']');
    } else {
        out.push(c);
    }
}

#[derive(Debug, Default)]
struct CharClass {
    negated: bool,
    singles: Vec<char>,
    ranges: Vec<(char, char)>,
}

/// Parses the class starting at `chars[start] == '['`. Returns the class and
/// the index right after its closing `]`.
fn parse_class(chars: &[char], start: usize) -> Result<(CharClass, usize), PatternError> {
    let mut i = start + 1;
    let mut class = CharClass {
        negated: matches!(chars.get(i), Some('^') | Some('!')),
        ..CharClass::default()
    };
    if class.negated {
        i += 1;
    }

    loop {
        let is_empty = class.singles.is_empty() && class.ranges.is_empty();
        if chars.get(i) == Some(&']') && !is_empty {
            return Ok((class, i + 1));
        }

        let (lo, next) = class_char(chars, i, start)?;
        i = next;
        if chars.get(i) == Some(&'-') {
            let (hi, next) = class_char(chars, i + 1, start)?;
            i = next;
            class.ranges.push((lo, hi));
        } else {
            class.singles.push(lo);
        }
    }
}

fn class_char(chars: &[char], i: usize, start: usize) -> Result<(char, usize), PatternError> {
    match chars.get(i) {
        None => Err(PatternError {
            pos: start,
            msg: ERROR_UNCLOSED_CLASS,
        }),
        Some('\\') => match chars.get(i + 1) {
            Some(&c) => Ok((c, i + 2)),
            None => Err(PatternError {
                pos: i,
                msg: ERROR_DANGLING_ESCAPE,
            }),
        },
        Some('-') | Some(']') => Err(PatternError {
            pos: i,
            msg: ERROR_BAD_CLASS_CHAR,
        }),
        Some(&c) => Ok((c, i + 1)),
    }
}

impl CharClass {
    /// Renders the class for `glob`, which reads `]` as a member only in
    /// first position, `-` as a range operator between two members, and a
    /// leading `!` as negation.
    fn render(&self) -> String {
        let mut singles = self.singles.clone();
        let mut ranges = Vec::new();

        for &(mut lo, mut hi) in &self.ranges {
            if lo > hi {
                // Matches nothing; keep it inert.
                ranges.push(('b', 'a'));
                continue;
            }
            if lo == ']' {
                singles.push(']');
                lo = '^';
            }
            if hi == ']' {
                singles.push(']');
                hi = '\\';
            }
            if lo == '!' {
                singles.push('!');
                lo = '"';
            }
            if lo <= hi {
                ranges.push((lo, hi));
            }
        }

        singles.sort_unstable();
        singles.dedup();
        let has_bracket = take(&mut singles, ']');
        let has_bang = take(&mut singles, '!');
        let has_dash = take(&mut singles, '-');

        let mut body = String::new();
        if has_bracket {
            body.push(']');
        }
        for (lo, hi) in ranges {
            body.push(lo);
            body.push('-');
            body.push(hi);
        }
        body.extend(singles);

        match (body.is_empty(), has_bang, has_dash) {
            (true, true, true) => body.push_str("-!"),
            (true, true, false) if !self.negated => return "!".to_string(),
            _ => {
                if has_bang {
                    body.push('!');
                }
                if has_dash {
                    body.push('-');
                }
            }
        }

        if body.is_empty() {
            // Every range was empty.
            return if self.negated { "?" } else { "[b-a]" }.to_string();
        }
        if self.negated {
            format!("[!{}]", body)
        } else {
            format!("[{}]", body)
        }
    }
}

fn take(singles: &mut Vec<char>, c: char) -> bool {
    let before = singles.len();
    singles.retain(|&s| s != c);
    singles.len() != before
}
