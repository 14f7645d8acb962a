// src/filtering/pattern.rs

use super::shell_glob::to_glob_syntax;
use crate::errors::{Error, Result};
use glob::Pattern;
use log::trace;

/// A non-empty set of compiled shell-style glob patterns.
///
/// Patterns are matched against a single file name component with the
/// classical `*`, `?`, `[...]` and `[^...]` metacharacters. A backslash
/// makes the next character literal.
///
/// # Examples
///
/// ```
/// use txtidy::filtering::PatternSet;
///
/// let patterns = PatternSet::new(["*.md", "Makefile"]).unwrap();
/// assert!(patterns.matches("README.md"));
/// assert!(patterns.matches("Makefile"));
/// assert!(!patterns.matches("main.rs"));
/// ```
#[derive(Debug, Clone)]
pub struct PatternSet {
    sources: Vec<String>,
    patterns: Vec<Pattern>,
}

impl PatternSet {
    /// Compiles the given patterns.
    ///
    /// # Errors
    /// Returns `Error::NoPatterns` if no pattern is given, and
    /// `Error::InvalidPattern` for the first pattern that is not a valid glob.
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let sources: Vec<String> = patterns
            .into_iter()
            .map(|p| p.as_ref().to_string())
            .collect();
        if sources.is_empty() {
            return Err(Error::NoPatterns);
        }

        let patterns = sources
            .iter()
            .map(|p| compile_pattern(p))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { sources, patterns })
    }

    /// Returns `true` if at least one pattern matches `file_name`.
    ///
    /// Stops at the first matching pattern.
    pub fn matches(&self, file_name: &str) -> bool {
        let matched = self.patterns.iter().position(|p| p.matches(file_name));
        if let Some(index) = matched {
            trace!("'{}' matched pattern '{}'", file_name, self.sources[index]);
        }
        matched.is_some()
    }

    /// The patterns in the order they were given.
    pub fn as_strs(&self) -> impl Iterator<Item = &str> {
        self.sources.iter().map(String::as_str)
    }
}

fn compile_pattern(pattern: &str) -> Result<Pattern> {
    to_glob_syntax(pattern)
        .and_then(|translated| Pattern::new(&translated))
        .map_err(|source| Error::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}
