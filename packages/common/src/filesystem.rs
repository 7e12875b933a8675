use crate::error::CommonError;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File system abstraction for buffer imports and testing
pub trait FileSystem {
    /// Read the whole file as UTF-8 text
    fn read_to_string(&self, path: &Path) -> Result<String, CommonError>;
}

/// Real file system implementation
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String, CommonError> {
        std::fs::read_to_string(path).map_err(|source| CommonError::FileRead {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Mock file system for testing
pub struct MockFileSystem {
    pub files: HashMap<PathBuf, Vec<u8>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
        }
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) {
        self.files.insert(path.into(), contents.into());
    }
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String, CommonError> {
        let bytes = self.files.get(path).ok_or_else(|| CommonError::FileRead {
            path: path.to_path_buf(),
            source: std::io::Error::new(ErrorKind::NotFound, "no such file"),
        })?;

        String::from_utf8(bytes.clone()).map_err(|e| CommonError::FileRead {
            path: path.to_path_buf(),
            source: std::io::Error::new(ErrorKind::InvalidData, e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_reads_added_file() {
        let mut fs = MockFileSystem::new();
        fs.add_file("/tmp/index.html", "<p>hi</p>");

        assert_eq!(
            fs.read_to_string(Path::new("/tmp/index.html")).unwrap(),
            "<p>hi</p>"
        );
    }

    #[test]
    fn test_mock_missing_file_is_read_error() {
        let fs = MockFileSystem::new();
        let err = fs.read_to_string(Path::new("missing.css")).unwrap_err();
        assert!(matches!(err, CommonError::FileRead { .. }));
    }

    #[test]
    fn test_mock_rejects_invalid_utf8() {
        let mut fs = MockFileSystem::new();
        fs.add_file("bad.js", vec![0xff, 0xfe, 0x00]);

        let err = fs.read_to_string(Path::new("bad.js")).unwrap_err();
        assert!(err.to_string().contains("bad.js"));
    }
}
