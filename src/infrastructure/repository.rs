//! File system access for note files

use crate::domain::NoteProbe;
use crate::error::{DaylinkError, Result};
use std::fs;
use std::path::Path;

/// Note storage backed by the local file system
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSystemRepository;

impl FileSystemRepository {
    pub fn new() -> Self {
        FileSystemRepository
    }

    /// Read a note, failing with `FileNotFound` when it is missing
    pub fn read_note(&self, path: &Path) -> Result<String> {
        if !path.is_file() {
            return Err(DaylinkError::FileNotFound(path.to_path_buf()));
        }

        fs::read_to_string(path).map_err(DaylinkError::Io)
    }

    /// Write note content using a best-effort atomic replace:
    /// write to a temp file in the same directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so we remove the destination first.
    pub fn write_note_atomic(&self, path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_name = format!(
            "{}.daylink-tmp-{}",
            path.file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("note.md"),
            std::process::id()
        );
        let tmp_path = path.with_file_name(tmp_name);

        fs::write(&tmp_path, content)?;

        if cfg!(windows) && path.exists() {
            fs::remove_file(path)?;
        }

        fs::rename(&tmp_path, path)?;
        Ok(())
    }
}

impl NoteProbe for FileSystemRepository {
    fn dir_exists(&self, dir: &Path) -> bool {
        dir.is_dir()
    }

    fn file_exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_probe_distinguishes_files_and_dirs() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("2025-01-17.md"), "note").unwrap();
        fs::create_dir(temp.path().join("2025-01-18.md")).unwrap();

        let repo = FileSystemRepository::new();
        assert!(repo.dir_exists(temp.path()));
        assert!(!repo.dir_exists(&temp.path().join("missing")));
        assert!(repo.file_exists(&temp.path().join("2025-01-17.md")));
        assert!(!repo.file_exists(&temp.path().join("2025-01-18.md")));
        assert!(!repo.file_exists(&temp.path().join("2025-01-19.md")));
    }

    #[test]
    fn test_read_note_existing() {
        let temp = TempDir::new().unwrap();
        let content = "# My Note\n\n[Yesterday](2025-01-16)";
        let path = temp.path().join("2025-01-17.md");
        fs::write(&path, content).unwrap();

        let read_content = FileSystemRepository::new().read_note(&path).unwrap();
        assert_eq!(read_content, content);
    }

    #[test]
    fn test_read_note_missing() {
        let temp = TempDir::new().unwrap();
        let result = FileSystemRepository::new().read_note(&temp.path().join("nope.md"));

        match result {
            Err(DaylinkError::FileNotFound(_)) => {}
            other => panic!("Expected FileNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_write_note_atomic_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a.md");
        let repo = FileSystemRepository::new();

        fs::write(&path, "one").unwrap();
        repo.write_note_atomic(&path, "two").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "two");
        let leftovers: Vec<_> = fs::read_dir(temp.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().contains("daylink-tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_write_note_atomic_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("journal").join("2025-01-17.md");

        FileSystemRepository::new()
            .write_note_atomic(&path, "content")
            .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "content");
    }
}
