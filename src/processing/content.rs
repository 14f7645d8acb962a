// src/processing/content.rs

use log::trace;
use std::fs;
use std::io;
use std::path::Path;

/// Reads the entire content of a file as raw bytes.
pub(super) fn read_file_content(path: &Path) -> io::Result<Vec<u8>> {
    let content = fs::read(path)?;
    trace!("Read {} bytes from {}", content.len(), path.display());
    Ok(content)
}

/// Overwrites a file with `content`, keeping the permission bits it had
/// right before the write.
///
/// The content is written with a single call on the existing file; no
/// temporary file or rename is involved.
pub(super) fn write_file_content(path: &Path, content: &[u8]) -> io::Result<()> {
    let permissions = fs::metadata(path)?.permissions();
    fs::write(path, content)?;
    fs::set_permissions(path, permissions)?;
    trace!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_valid_file() -> io::Result<()> {
        let temp = tempdir()?;
        let file_path = temp.path().join("test.txt");
        fs::write(&file_path, b"Hello, txtidy!\r\n")?;

        let read_content = read_file_content(&file_path)?;
        assert_eq!(read_content, b"Hello, txtidy!\r\n");

        temp.close()?;
        Ok(())
    }

    #[test]
    fn test_read_empty_file() -> io::Result<()> {
        let temp = tempdir()?;
        let file_path = temp.path().join("empty.txt");
        fs::write(&file_path, "")?;

        assert!(read_file_content(&file_path)?.is_empty());

        temp.close()?;
        Ok(())
    }

    #[test]
    fn test_read_non_existent_file() {
        let path = Path::new("non_existent_file_for_txtidy_test.txt");
        let err = read_file_content(path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_write_replaces_content() -> io::Result<()> {
        let temp = tempdir()?;
        let file_path = temp.path().join("a.txt");
        fs::write(&file_path, b"old content that is longer\n")?;

        write_file_content(&file_path, b"new\n")?;
        assert_eq!(fs::read(&file_path)?, b"new\n");

        temp.close()?;
        Ok(())
    }

    #[test]
    #[cfg(unix)]
    fn test_write_keeps_mode_bits() -> io::Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempdir()?;
        let file_path = temp.path().join("script.sh");
        fs::write(&file_path, b"#!/bin/sh  \n")?;
        fs::set_permissions(&file_path, fs::Permissions::from_mode(0o751))?;

        write_file_content(&file_path, b"#!/bin/sh\n")?;

        let mode = fs::metadata(&file_path)?.permissions().mode() & 0o777;
        assert_eq!(mode, 0o751);

        temp.close()?;
        Ok(())
    }

    #[test]
    fn test_write_to_missing_file_fails() {
        let path = Path::new("missing_dir_for_txtidy_test/missing.txt");
        assert!(write_file_content(path, b"x\n").is_err());
    }
}
