// src/cli.rs

use clap::Parser;

/// Normalizes whitespace and line endings of text files, in place.
///
/// txtidy walks a directory tree and rewrites every file whose name matches one
/// of the given glob patterns so that it uses LF line endings, has no UTF-8 BOM,
/// no trailing spaces or tabs, no leading or trailing blank lines, and ends with
/// exactly one newline. Files that are already tidy are not touched.
#[derive(Parser, Debug)]
#[command(name = "txtidy", about, long_about = None, disable_version_flag = true)]
pub struct Cli {
    /// Glob patterns matched against file names (e.g. '*.md'). At least one is required.
    #[arg(value_name = "PATTERN")]
    pub patterns: Vec<String>,

    /// Root directory to search files in [default: current directory].
    #[arg(short = 'd', long = "dir", value_name = "DIR")]
    pub dir: Option<String>,

    /// Print all visited matching files, not only the modified ones.
    #[arg(short = 'v', long, action = clap::ArgAction::SetTrue)]
    pub verbose: bool,

    /// Run on all files, i.e. do not exclude .git, .hg, .svn, node_modules, bower_components and vendor.
    #[arg(short = 'a', long, action = clap::ArgAction::SetTrue)]
    pub all: bool,

    /// Show version info and exit immediately.
    #[arg(short = 'V', long, action = clap::ArgAction::SetTrue)]
    pub version: bool,
}
