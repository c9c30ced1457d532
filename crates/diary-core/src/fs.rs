//! Filesystem utilities for whole-file writes.

use std::fs;
use std::io;
use std::path::Path;

/// Write `contents` to `destination`, creating missing parent directories first.
///
/// Directory creation is idempotent. The write goes straight to the
/// destination (truncate then write), so a crash mid-write can leave a
/// truncated file behind.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the file
/// cannot be written.
pub fn write_with_parent_dirs(destination: &Path, contents: &[u8]) -> io::Result<()> {
    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|err| {
                io::Error::new(
                    err.kind(),
                    format!("Failed to create directory {}: {}", parent.display(), err),
                )
            })?;
        }
    }
    fs::write(destination, contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_creates_missing_dirs() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("nested").join("deeper").join("file.json");

        write_with_parent_dirs(&dest, b"test").unwrap();

        assert!(dest.exists());
        assert_eq!(fs::read_to_string(&dest).unwrap(), "test");
    }

    #[test]
    fn test_write_overwrites_existing() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("dest.txt");

        fs::write(&dest, b"old contents that are longer").unwrap();
        write_with_parent_dirs(&dest, b"new").unwrap();

        assert_eq!(fs::read_to_string(&dest).unwrap(), "new");
    }

    #[test]
    fn test_write_bare_filename() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("plain.txt");
        write_with_parent_dirs(&dest, b"ok").unwrap();
        // Existing parent is fine to "create" again.
        write_with_parent_dirs(&dest, b"ok again").unwrap();
        assert_eq!(fs::read_to_string(&dest).unwrap(), "ok again");
    }

    #[test]
    fn test_write_fails_when_parent_is_a_file() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"x").unwrap();

        let dest = blocker.join("file.json");
        assert!(write_with_parent_dirs(&dest, b"data").is_err());
    }
}
