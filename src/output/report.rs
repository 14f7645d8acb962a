// src/output/report.rs

use crate::constants::ELLIPSIS;
use crate::core_types::FileOutcome;
use std::io::{self, Write};
use std::path::Path;

/// Writes the output line for one matched file.
///
/// The `"{path} …"` prefix is written at most once. In verbose mode it goes
/// out eagerly via [`begin`](Self::begin), before any file I/O; otherwise it
/// is only written when the outcome produces output.
pub struct FileReporter<'a> {
    out: &'a mut dyn Write,
    path: &'a Path,
    verbose: bool,
    prefix_written: bool,
}

impl<'a> FileReporter<'a> {
    /// Creates a reporter for `path`. Nothing is written yet.
    pub fn new(out: &'a mut dyn Write, path: &'a Path, verbose: bool) -> Self {
        Self {
            out,
            path,
            verbose,
            prefix_written: false,
        }
    }

    /// Writes the prefix right away in verbose mode, and flushes it so it is
    /// visible while the file is being processed.
    pub fn begin(&mut self) -> io::Result<()> {
        if self.verbose {
            self.write_prefix()?;
            self.out.flush()?;
        }
        Ok(())
    }

    /// Completes the line for `outcome`.
    ///
    /// | outcome | output |
    /// |---|---|
    /// | unchanged, quiet | nothing |
    /// | unchanged, verbose | `{path} …\n` |
    /// | fixed | `{path} … fixed.\n` |
    /// | read/write error | `{path} … error: {message}\n` |
    pub fn finish(mut self, outcome: &FileOutcome) -> io::Result<()> {
        match outcome {
            FileOutcome::Unchanged => {
                if self.verbose {
                    self.write_prefix()?;
                    writeln!(self.out)?;
                }
            }
            FileOutcome::Fixed => {
                self.write_prefix()?;
                writeln!(self.out, " fixed.")?;
            }
            FileOutcome::ReadError(e) | FileOutcome::WriteError(e) => {
                self.write_prefix()?;
                writeln!(self.out, " error: {}", e)?;
            }
        }
        Ok(())
    }

    fn write_prefix(&mut self) -> io::Result<()> {
        if !self.prefix_written {
            write!(self.out, "{} {}", self.path.display(), ELLIPSIS)?;
            self.prefix_written = true;
        }
        Ok(())
    }
}

/// Writes the line for an entry the walker could not visit.
pub fn write_walk_error(out: &mut dyn Write, path: &Path, message: &str) -> io::Result<()> {
    writeln!(out, "{} {} error: {}", path.display(), ELLIPSIS, message)
}
