// src/config/path_resolve.rs

use crate::errors::{Error, Result};
use log::debug;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolves the root directory to an absolute path and checks that it is an
/// existing directory.
///
/// `None` means the current working directory. The path is made absolute
/// without resolving symlinks.
pub fn resolve_root_dir(root: Option<&Path>) -> Result<PathBuf> {
    let root = match root {
        Some(path) => path.to_path_buf(),
        None => env::current_dir().map_err(Error::CurrentDir)?,
    };

    let absolute = std::path::absolute(&root).map_err(|source| Error::AbsolutePath {
        path: root.display().to_string(),
        source,
    })?;
    debug!("Resolved root directory: {}", absolute.display());

    match fs::metadata(&absolute) {
        Ok(metadata) if metadata.is_dir() => Ok(absolute),
        _ => Err(Error::RootNotFound(absolute.display().to_string())),
    }
}
