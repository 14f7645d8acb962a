//! Defines the `Config` struct and related types for application configuration.
//!
//! This module consolidates all the settings parsed and validated from the CLI,
//! making them available to the rest of the application in a structured and
//! type-safe manner. A `Config` is immutable once built.

use crate::constants::DEFAULT_EXCLUDED_DIRS;
use crate::filtering::PatternSet;
use std::path::PathBuf;

pub use builder::ConfigBuilder;
mod builder;
pub mod path_resolve;

/// Options controlling the walk and the output (runtime flags).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Print every matching file, not only the modified ones.
    pub verbose: bool,
    /// Descend into excluded directories as well.
    pub visit_all: bool,
    /// Base names of directories whose subtrees are skipped. Treated as a set.
    pub excluded_dirs: Vec<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            verbose: false,
            visit_all: false,
            excluded_dirs: DEFAULT_EXCLUDED_DIRS.iter().map(|d| d.to_string()).collect(),
        }
    }
}

impl Options {
    /// Returns `true` if a directory named `name` must not be descended into.
    ///
    /// Always `false` when `visit_all` is set.
    pub fn is_excluded(&self, name: &str) -> bool {
        !self.visit_all && self.excluded_dirs.iter().any(|d| d == name)
    }
}

/// The validated configuration of a run.
///
/// Built through [`ConfigBuilder`], which guarantees that `root` is an
/// absolute path to an existing directory and `patterns` is non-empty.
#[derive(Debug, Clone)]
pub struct Config {
    /// Absolute path of the directory to walk.
    pub root: PathBuf,
    /// The compiled file name patterns.
    pub patterns: PatternSet,
    /// Walk and output options.
    pub options: Options,
}
