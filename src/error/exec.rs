//! Process execution errors

use super::JsmError;

/// Creates a spawn failure, keeping the OS error as the source
pub fn spawn_failed(program: impl Into<String>, source: std::io::Error) -> JsmError {
    JsmError::SpawnFailed {
        program: program.into(),
        source,
    }
}

/// Creates a non-zero exit status error
pub fn exit_status(program: impl Into<String>, code: Option<i32>) -> JsmError {
    JsmError::ExitStatus {
        program: program.into(),
        code,
    }
}

/// Creates an error for a process whose output could not be captured
pub fn output_failed(program: impl Into<String>, reason: impl Into<String>) -> JsmError {
    JsmError::OutputFailed {
        program: program.into(),
        reason: reason.into(),
    }
}
