// src/filtering/excluded.rs

use crate::config::Options;
use ignore::DirEntry;

/// Decides whether the walker should skip `entry` and everything below it.
///
/// Only directories below the root are ever pruned, and only when their base
/// name is in the excluded set and `visit_all` is off.
pub(crate) fn is_pruned(entry: &DirEntry, options: &Options) -> bool {
    if entry.depth() == 0 {
        return false;
    }
    let is_dir = entry.file_type().map_or(false, |ft| ft.is_dir());
    if !is_dir {
        return false;
    }
    entry
        .file_name()
        .to_str()
        .map_or(false, |name| options.is_excluded(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Options;
    use ignore::WalkBuilder;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn entries(root: &Path) -> Vec<DirEntry> {
        WalkBuilder::new(root)
            .standard_filters(false)
            .build()
            .filter_map(|e| e.ok())
            .collect()
    }

    fn find<'a>(entries: &'a [DirEntry], name: &str) -> &'a DirEntry {
        entries
            .iter()
            .find(|e| e.file_name() == name)
            .unwrap_or_else(|| panic!("no entry named {}", name))
    }

    #[test]
    fn test_excluded_directory_is_pruned() -> std::io::Result<()> {
        let temp = tempdir()?;
        fs::create_dir(temp.path().join("node_modules"))?;
        fs::create_dir(temp.path().join("src"))?;
        let all = entries(temp.path());

        let options = Options::default();
        assert!(is_pruned(find(&all, "node_modules"), &options));
        assert!(!is_pruned(find(&all, "src"), &options));
        Ok(())
    }

    #[test]
    fn test_file_with_excluded_name_is_not_pruned() -> std::io::Result<()> {
        let temp = tempdir()?;
        fs::write(temp.path().join("vendor"), "not a directory")?;
        let all = entries(temp.path());

        assert!(!is_pruned(find(&all, "vendor"), &Options::default()));
        Ok(())
    }

    #[test]
    fn test_visit_all_disables_pruning() -> std::io::Result<()> {
        let temp = tempdir()?;
        fs::create_dir(temp.path().join(".git"))?;
        let all = entries(temp.path());

        let options = Options {
            visit_all: true,
            ..Options::default()
        };
        assert!(!is_pruned(find(&all, ".git"), &options));
        Ok(())
    }

    #[test]
    fn test_root_is_never_pruned() -> std::io::Result<()> {
        let temp = tempdir()?;
        let root = temp.path().join(".svn");
        fs::create_dir(&root)?;
        let all = entries(&root);

        let root_entry = all.iter().find(|e| e.depth() == 0).expect("root entry");
        assert!(!is_pruned(root_entry, &Options::default()));
        Ok(())
    }
}
