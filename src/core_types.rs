//! Defines core data structures used throughout a run.
//!
//! `FileRecord` captures what happened to a single matched file, and
//! `RunSummary` aggregates those records for the end-of-run log line.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// What happened to a matched file.
#[derive(Debug)]
pub enum FileOutcome {
    /// The file already satisfied the conventions and was not written.
    Unchanged,
    /// The file was rewritten with its tidied content.
    Fixed,
    /// The file could not be read. Nothing was written.
    ReadError(io::Error),
    /// The tidied content could not be written back.
    WriteError(io::Error),
}

impl FileOutcome {
    /// Returns `true` for `ReadError` and `WriteError`.
    pub fn is_error(&self) -> bool {
        matches!(self, FileOutcome::ReadError(_) | FileOutcome::WriteError(_))
    }
}

impl fmt::Display for FileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileOutcome::Unchanged => write!(f, "unchanged"),
            FileOutcome::Fixed => write!(f, "fixed"),
            FileOutcome::ReadError(e) => write!(f, "read error: {}", e),
            FileOutcome::WriteError(e) => write!(f, "write error: {}", e),
        }
    }
}

/// The transient record of a processed file.
///
/// # Examples
///
/// ```
/// use txtidy::core_types::{FileOutcome, FileRecord};
/// use std::path::PathBuf;
///
/// let record = FileRecord {
///     path: PathBuf::from("/project/README.md"),
///     original_len: 12,
///     tidied_len: 11,
///     outcome: FileOutcome::Fixed,
/// };
/// assert!(!record.outcome.is_error());
/// ```
#[derive(Debug)]
pub struct FileRecord {
    /// The absolute path of the file.
    pub path: PathBuf,
    /// Size of the content as read, in bytes (0 if the read failed).
    pub original_len: usize,
    /// Size of the tidied content, in bytes (0 if the read failed).
    pub tidied_len: usize,
    /// The result of processing.
    pub outcome: FileOutcome,
}

/// Counters collected over a whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of regular files whose name matched a pattern.
    pub matched: usize,
    /// Number of files rewritten.
    pub fixed: usize,
    /// Number of files left untouched because they were already tidy.
    pub unchanged: usize,
    /// Number of per-file read, write or walk errors.
    pub errors: usize,
}

impl RunSummary {
    /// Accounts for one processed file.
    pub fn record(&mut self, record: &FileRecord) {
        self.matched += 1;
        match record.outcome {
            FileOutcome::Unchanged => self.unchanged += 1,
            FileOutcome::Fixed => self.fixed += 1,
            FileOutcome::ReadError(_) | FileOutcome::WriteError(_) => self.errors += 1,
        }
    }
}
