use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a markdown document and return its content
pub fn read_document(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Read a markdown document from any reader, e.g. stdin
pub fn read_from(mut reader: impl Read) -> Result<String, IoError> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_existing_document() {
        // Given a markdown file on disk
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "# Title\n\n- item").unwrap();

        // When reading it
        let content = read_document(file.path()).unwrap();

        // Then the content is returned unchanged
        assert_eq!(content, "# Title\n\n- item");
    }

    #[test]
    fn test_missing_document_is_not_found() {
        let missing = PathBuf::from("/this/path/does/not/exist.md");
        match read_document(&missing) {
            Err(IoError::NotFound(path)) => assert_eq!(path, missing),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_utf8_is_io_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0xfd]).unwrap();
        assert!(matches!(read_document(file.path()), Err(IoError::Io(_))));
    }

    #[test]
    fn test_read_from_reader() {
        let content = read_from("> quoted".as_bytes()).unwrap();
        assert_eq!(content, "> quoted");
    }
}
