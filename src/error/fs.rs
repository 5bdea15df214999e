//! File system errors

use std::path::Path;

use super::JsmError;

/// Creates a read failure naming the file
pub fn read_failed(path: &Path, source: std::io::Error) -> JsmError {
    JsmError::IoError {
        message: format!("failed to read {}", path.display()),
        source: Some(source),
    }
}

/// Creates a write failure naming the file
pub fn write_failed(path: &Path, source: std::io::Error) -> JsmError {
    JsmError::IoError {
        message: format!("failed to write {}", path.display()),
        source: Some(source),
    }
}
