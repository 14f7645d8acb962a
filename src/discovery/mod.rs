//! Walks the root directory and tidies every matching file, one at a time.
use crate::cancellation::CancellationToken;
use crate::config::Config;
use crate::core_types::RunSummary;
use crate::errors::{Error, Result};
use crate::output::write_walk_error;
use crate::processing::process_file;
use ignore::DirEntry;
use log::{info, trace, warn};
use std::io::Write;
use std::path::Path;

mod walker;

use walker::build_walker;

/// Walks `config.root` and processes every regular file whose name matches
/// one of `config.patterns`.
///
/// Entries are handled in walk order (parents before children, siblings by
/// file name). Excluded directories are pruned unless `visit_all` is set.
/// Per-file read, write and walk errors are written to `out` and the walk
/// continues.
///
/// # Arguments
/// * `config` - The validated configuration of the run.
/// * `token` - A `CancellationToken`, checked before each entry.
/// * `out` - Where the per-file lines are written (stdout for the CLI).
///
/// # Errors
/// Returns `Error::Walk` if the root itself cannot be walked,
/// `Error::Interrupted` if the token was cancelled, and `Error::Output` if
/// writing to `out` fails.
///
/// # Examples
///
/// ```
/// use txtidy::{tidy_tree, CancellationToken, ConfigBuilder};
/// use std::fs;
/// use tempfile::tempdir;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let temp = tempdir()?;
/// fs::write(temp.path().join("notes.txt"), "hello  \r\n\r\n")?;
///
/// let config = ConfigBuilder::new()
///     .root_dir(temp.path())
///     .patterns(vec!["*.txt".to_string()])
///     .build()?;
///
/// let mut out = Vec::<u8>::new();
/// let summary = tidy_tree(&config, &CancellationToken::new(), &mut out)?;
///
/// assert_eq!(summary.fixed, 1);
/// assert_eq!(fs::read(temp.path().join("notes.txt"))?, b"hello\n");
/// # Ok(())
/// # }
/// ```
pub fn tidy_tree(
    config: &Config,
    token: &CancellationToken,
    out: &mut dyn Write,
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    for entry_result in build_walker(config) {
        token.check()?;

        let entry = match entry_result {
            Ok(entry) => entry,
            Err(err) => {
                report_walk_error(err, &config.root, out)?;
                summary.errors += 1;
                continue;
            }
        };

        if !is_candidate(&entry, config) {
            continue;
        }

        let record =
            process_file(entry.path(), config.options.verbose, out).map_err(Error::Output)?;
        summary.record(&record);
    }

    info!(
        "Done: {} matching files, {} fixed, {} unchanged, {} errors.",
        summary.matched, summary.fixed, summary.unchanged, summary.errors
    );
    Ok(summary)
}

/// A regular file whose base name satisfies the match predicate.
fn is_candidate(entry: &DirEntry, config: &Config) -> bool {
    let is_file = entry.file_type().map_or(false, |ft| ft.is_file());
    if !is_file {
        trace!("Skipping non-file entry: {}", entry.path().display());
        return false;
    }

    let file_name = entry.file_name().to_string_lossy();
    if !config.patterns.matches(&file_name) {
        trace!("Skipping non-matching file: {}", entry.path().display());
        return false;
    }
    true
}

/// Reports a walk error inline, or returns it as fatal if it concerns the root.
fn report_walk_error(err: ignore::Error, root: &Path, out: &mut dyn Write) -> Result<()> {
    let path = error_path(&err).unwrap_or(root).to_path_buf();
    if err.depth() == Some(0) || path == root {
        return Err(Error::Walk(err));
    }

    warn!("Walker error: {}", err);
    write_walk_error(out, &path, &error_message(&err)).map_err(Error::Output)
}

fn error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        ignore::Error::Loop { child, .. } => Some(child),
        _ => None,
    }
}

/// The error message without the path and depth wrappers.
fn error_message(err: &ignore::Error) -> String {
    match err {
        ignore::Error::WithPath { err, .. } | ignore::Error::WithDepth { err, .. } => {
            error_message(err)
        }
        other => other.to_string(),
    }
}
