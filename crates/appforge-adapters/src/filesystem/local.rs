//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use appforge_core::{application::ports::Filesystem, error::ForgeResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> ForgeResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> ForgeResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove_dir_all(&self, path: &Path) -> ForgeResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> appforge_core::error::ForgeError {
    use appforge_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_and_detects_files() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();

        let nested = dir.path().join("a/b");
        fs.create_dir_all(&nested).unwrap();

        let file = nested.join("x.txt");
        fs.write_file(&file, "content").unwrap();

        assert!(fs.exists(&file));
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "content");

        fs.remove_dir_all(dir.path().join("a").as_path()).unwrap();
        assert!(!fs.exists(&file));
    }

    #[test]
    fn write_into_missing_parent_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let result = fs.write_file(&dir.path().join("missing/x.txt"), "content");
        assert!(result.is_err());
    }
}
