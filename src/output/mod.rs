//! Formats the per-file lines written to standard output.

mod report;

pub use report::{write_walk_error, FileReporter};
