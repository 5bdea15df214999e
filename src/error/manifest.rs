//! Manifest errors

use super::JsmError;

/// Creates a manifest read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> JsmError {
    JsmError::ManifestReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a manifest parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> JsmError {
    JsmError::ManifestParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an empty script map error
pub fn no_scripts(file: impl Into<String>) -> JsmError {
    JsmError::NoScripts { file: file.into() }
}
