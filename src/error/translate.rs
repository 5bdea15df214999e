//! Translation errors

use super::JsmError;

/// Creates a missing required argument error
pub fn missing_argument(message: impl Into<String>) -> JsmError {
    JsmError::MissingArgument {
        message: message.into(),
    }
}

/// Creates an unsupported verb, flag or argument error
pub fn unsupported(message: impl Into<String>) -> JsmError {
    JsmError::Unsupported {
        message: message.into(),
    }
}
