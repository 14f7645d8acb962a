//! `txtidy` is a library and command-line tool that normalizes the whitespace
//! and line endings of text files in a directory tree, in place.
//!
//! For every file whose name matches one of the given glob patterns, the file
//! is rewritten so that it
//! - uses LF line endings (every CR byte is removed),
//! - does not start with a UTF-8 byte order mark,
//! - has no spaces or tabs at the end of a line,
//! - has no blank lines (or other whitespace) at the very start or end,
//! - ends with exactly one newline.
//!
//! Files that already satisfy these rules are not written at all.
//!
//! As a library, it exposes the two halves separately:
//! 1.  **Tidy**: [`tidy`], a pure bytes-to-bytes function.
//! 2.  **Walk**: [`tidy_tree`], which walks a directory, prunes excluded
//!     directories (`.git`, `node_modules`, ...) and tidies matching files.
//!
//! # Example: Library Usage
//!
//! ```
//! use txtidy::{tidy, tidy_tree, CancellationToken, ConfigBuilder};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! // The transform on its own.
//! assert_eq!(tidy(b"\xEF\xBB\xBFhi  \r\n\r\n"), b"hi\n");
//!
//! // A whole directory.
//! let temp_dir = tempdir().unwrap();
//! fs::write(temp_dir.path().join("a.txt"), "one  \ntwo\n\n\n").unwrap();
//! fs::write(temp_dir.path().join("b.rs"), "fn main() {}   ").unwrap();
//!
//! let config = ConfigBuilder::new()
//!     .root_dir(temp_dir.path())
//!     .patterns(vec!["*.txt".to_string()])
//!     .build()
//!     .unwrap();
//!
//! let mut output = Vec::<u8>::new();
//! let summary = tidy_tree(&config, &CancellationToken::new(), &mut output).unwrap();
//!
//! assert_eq!(summary.fixed, 1);
//! assert_eq!(fs::read_to_string(temp_dir.path().join("a.txt")).unwrap(), "one\ntwo\n");
//! // Not matched, so not touched.
//! assert_eq!(fs::read_to_string(temp_dir.path().join("b.rs")).unwrap(), "fn main() {}   ");
//! ```

pub mod cancellation;
pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod discovery;
pub mod errors;
pub mod filtering;
pub mod output;
pub mod processing;
pub mod signal;
pub mod version;

// Re-export key public types for easier use as a library
pub use cancellation::CancellationToken;
pub use config::{Config, ConfigBuilder, Options};
pub use core_types::{FileOutcome, FileRecord, RunSummary};
pub use discovery::tidy_tree;
pub use errors::{Error, Result};
pub use processing::tidy;

use std::io::Write;

/// Executes a complete run: walks `config.root` and tidies matching files,
/// writing the per-file lines to `writer`.
///
/// This is the entry point the `txtidy` binary uses, with `writer` set to
/// standard output. It is a thin wrapper around [`tidy_tree`].
///
/// # Errors
/// Returns an error if the walk fails at the root, the run is interrupted,
/// or `writer` fails. Per-file read and write errors are reported in the
/// output and counted in the returned `RunSummary` instead.
pub fn run(
    config: &Config,
    token: &CancellationToken,
    writer: &mut dyn Write,
) -> Result<RunSummary> {
    let summary = tidy_tree(config, token, writer)?;
    writer.flush().map_err(Error::Output)?;
    Ok(summary)
}
