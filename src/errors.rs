//! Defines application-specific error types.
//!
//! This module provides the `Error` enum, which categorizes the fatal errors
//! that abort a run before (or instead of) touching files. Per-file read and
//! write failures are not errors at this level: they are recorded as a
//! [`FileOutcome`](crate::core_types::FileOutcome) and the walk continues.

use thiserror::Error;

/// A crate-wide `Result` alias defaulting to [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Fatal errors used throughout `txtidy`.
#[derive(Error, Debug)]
pub enum Error {
    // --- Configuration / Environment Errors ---
    /// The current working directory could not be determined.
    #[error("could not determine current working directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    /// The root directory could not be turned into an absolute path.
    #[error("could not determine absolute path for '{path}': {source}")]
    AbsolutePath {
        /// The root directory as given by the caller.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// The root does not exist or is not a directory.
    #[error("the given root directory '{0}' could not be found.")]
    RootNotFound(String),

    /// No file pattern was supplied.
    #[error("no file patterns have been given.")]
    NoPatterns,

    /// A file pattern is not a valid glob.
    #[error("file pattern '{pattern}' is invalid.")]
    InvalidPattern {
        /// The offending pattern.
        pattern: String,
        /// The error reported by the glob parser.
        #[source]
        source: glob::PatternError,
    },

    // --- Traversal Errors ---
    /// The walk failed at the root itself (e.g. the root became inaccessible).
    #[error("failed to walk filesystem: {0}")]
    Walk(#[source] ignore::Error),

    /// The per-file report could not be written (e.g. stdout was closed).
    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),

    // --- Signal Handling ---
    /// The operation was cancelled by the user (e.g., Ctrl+C).
    #[error("Operation cancelled by user (Ctrl+C)")]
    Interrupted,
}
