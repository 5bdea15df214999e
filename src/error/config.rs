//! Configuration errors

use super::JsmError;

/// Creates an invalid agent error; `origin` names where the value came from
pub fn invalid_agent(value: impl Into<String>, origin: impl Into<String>) -> JsmError {
    JsmError::InvalidAgent {
        value: value.into(),
        origin: origin.into(),
    }
}

/// Creates an invalid flag combination error
pub fn invalid_flags(message: impl Into<String>) -> JsmError {
    JsmError::InvalidFlags {
        message: message.into(),
    }
}

/// Creates a settings read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> JsmError {
    JsmError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a settings parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> JsmError {
    JsmError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
