// src/config/builder.rs

use super::{path_resolve::resolve_root_dir, Config, Options};
use crate::cli::Cli;
use crate::errors::Result;
use crate::filtering::PatternSet;
use log::debug;
use std::path::{Path, PathBuf};

/// A builder for creating a `Config` instance programmatically.
///
/// This provides an API for library users who want to run `txtidy`'s logic
/// without going through command-line parsing.
///
/// # Examples
///
/// ```
/// use txtidy::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .root_dir(".")
///     .patterns(vec!["*.md".to_string(), "*.txt".to_string()])
///     .verbose(true)
///     .build()
///     .unwrap();
///
/// assert!(config.root.is_absolute());
/// assert!(config.options.verbose);
/// ```
#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    root_dir: Option<PathBuf>,
    patterns: Vec<String>,
    verbose: bool,
    visit_all: bool,
    excluded_dirs: Option<Vec<String>>,
}

impl ConfigBuilder {
    /// Creates a new `ConfigBuilder` with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a `ConfigBuilder` from the parsed command-line arguments.
    pub fn from_cli(cli: Cli) -> Self {
        let mut builder = Self::new()
            .patterns(cli.patterns)
            .verbose(cli.verbose)
            .visit_all(cli.all);
        if let Some(dir) = cli.dir {
            builder = builder.root_dir(dir);
        }
        builder
    }

    /// Sets the directory to walk. An empty path means the current directory.
    pub fn root_dir(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        self.root_dir = if path.as_os_str().is_empty() {
            None
        } else {
            Some(path.to_path_buf())
        };
        self
    }

    /// Sets the glob patterns matched against file names.
    pub fn patterns(mut self, patterns: Vec<String>) -> Self {
        self.patterns = patterns;
        self
    }

    /// Print every matching file, not only the modified ones.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Descend into excluded directories as well.
    pub fn visit_all(mut self, visit_all: bool) -> Self {
        self.visit_all = visit_all;
        self
    }

    /// Replaces the default list of excluded directory names.
    pub fn excluded_dirs(mut self, dirs: Vec<String>) -> Self {
        self.excluded_dirs = Some(dirs);
        self
    }

    /// Validates the settings and builds the final `Config`.
    ///
    /// The root is resolved and checked first, then the patterns are
    /// compiled. Nothing but the root itself is accessed on disk.
    ///
    /// # Errors
    /// Returns an error if the root cannot be resolved or is not a directory,
    /// if no pattern was given, or if a pattern is not a valid glob.
    pub fn build(self) -> Result<Config> {
        let root = resolve_root_dir(self.root_dir.as_deref())?;
        let patterns = PatternSet::new(&self.patterns)?;

        let mut options = Options {
            verbose: self.verbose,
            visit_all: self.visit_all,
            ..Options::default()
        };
        if let Some(dirs) = self.excluded_dirs {
            options.excluded_dirs = dirs;
        }

        let config = Config {
            root,
            patterns,
            options,
        };
        debug!("Configuration built: {:?}", config);
        Ok(config)
    }
}
