// tests/common.rs

use std::fs;
use std::path::Path;
use std::process::Command;

// Helper function to get the binary command
#[allow(dead_code)] // Used by the CLI tests, not by the library-level ones.
pub fn txtidy_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("txtidy"))
}

/// Writes `content` to `root/relative_path`, creating parent directories.
#[allow(dead_code)]
pub fn create_file(root: &Path, relative_path: &str, content: &[u8]) -> std::io::Result<()> {
    let file_path = root.join(relative_path);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)
}

/// The `"{path} …"` prefix of a report line.
#[allow(dead_code)]
pub fn prefix(path: &Path) -> String {
    format!("{} \u{2026}", path.display())
}
