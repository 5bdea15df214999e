//! Package manager detection errors

use super::JsmError;

/// Creates the error returned once every detection stage, recovery included, came up empty
pub fn none_found() -> JsmError {
    JsmError::NoAgentFound
}
