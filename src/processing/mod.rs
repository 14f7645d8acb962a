//! Handles the per-file stage of a run.
//!
//! For a matched file this module reads the content, applies the tidy
//! transform, and writes the result back only if it differs from what was
//! read. Every outcome is reported through a [`FileReporter`].

use crate::core_types::{FileOutcome, FileRecord};
use crate::output::FileReporter;
use log::debug;
use std::io;
use std::path::Path;
use tracing::instrument;

mod content;
pub mod filters;
mod tidy;

pub use tidy::tidy;

/// Reads, tidies and (if needed) rewrites a single file.
///
/// Read and write failures are not returned as errors: they end up in the
/// record's [`FileOutcome`] and on the reporter's output line.
///
/// # Errors
/// Returns an error only if writing to the report output fails.
#[instrument(level = "debug", skip(path, out), fields(path = %path.display()))]
pub fn process_file(path: &Path, verbose: bool, out: &mut dyn io::Write) -> io::Result<FileRecord> {
    process_file_with(path, verbose, out, content::write_file_content)
}

/// Writes tidied content back to a file.
type WriteFn = fn(&Path, &[u8]) -> io::Result<()>;

fn process_file_with(
    path: &Path,
    verbose: bool,
    out: &mut dyn io::Write,
    write: WriteFn,
) -> io::Result<FileRecord> {
    let mut reporter = FileReporter::new(out, path, verbose);
    reporter.begin()?;

    let record = tidy_file(path, write);
    debug!("{}: {}", path.display(), record.outcome);

    reporter.finish(&record.outcome)?;
    Ok(record)
}

fn tidy_file(path: &Path, write: WriteFn) -> FileRecord {
    let original = match content::read_file_content(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            return FileRecord {
                path: path.to_path_buf(),
                original_len: 0,
                tidied_len: 0,
                outcome: FileOutcome::ReadError(e),
            }
        }
    };

    let tidied = tidy(&original);
    let outcome = if tidied == original {
        FileOutcome::Unchanged
    } else {
        match write(path, &tidied) {
            Ok(()) => FileOutcome::Fixed,
            Err(e) => FileOutcome::WriteError(e),
        }
    };

    FileRecord {
        path: path.to_path_buf(),
        original_len: original.len(),
        tidied_len: tidied.len(),
        outcome,
    }
}
