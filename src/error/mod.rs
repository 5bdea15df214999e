//! Error types and handling for jsm
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`config`]: Invalid overrides, flag combinations and settings files
//! - [`detect`]: Package manager detection errors
//! - [`translate`]: Verb translation errors
//! - [`manifest`]: `package.json` / `deno.json` errors
//! - [`exec`]: Process execution errors
//! - [`fs`]: File system errors
//!
//! Every message is a single lower-case line without trailing punctuation.

pub mod config;
pub mod detect;
pub mod exec;
pub mod fs;
pub mod manifest;
pub mod translate;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for jsm operations
#[derive(Error, Diagnostic, Debug)]
pub enum JsmError {
    // Configuration errors
    #[error("invalid agent \"{value}\" {origin}")]
    #[diagnostic(
        code(jsm::config::invalid_agent),
        help("Supported agents: npm, yarn, pnpm, bun, deno")
    )]
    InvalidAgent { value: String, origin: String },

    #[error("{message}")]
    #[diagnostic(code(jsm::config::invalid_flags))]
    InvalidFlags { message: String },

    #[error("failed to read settings file {path}")]
    #[diagnostic(code(jsm::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("failed to parse settings file {path}: {reason}")]
    #[diagnostic(
        code(jsm::config::parse_failed),
        help("Known keys: auto_install, volta, missing_dependency_limit")
    )]
    ConfigParseFailed { path: String, reason: String },

    // Detection errors
    #[error("no package manager found")]
    #[diagnostic(
        code(jsm::detect::none_found),
        help("Install one of npm, yarn, pnpm, bun or deno, or pass --agent")
    )]
    NoAgentFound,

    // Translation errors
    #[error("{message}")]
    #[diagnostic(code(jsm::translate::missing_argument))]
    MissingArgument { message: String },

    #[error("{message}")]
    #[diagnostic(code(jsm::translate::unsupported))]
    Unsupported { message: String },

    #[error("--eval is not supported by run use exec instead")]
    #[diagnostic(code(jsm::translate::eval_rejected), help("Try: jsm exec --eval <code>"))]
    EvalNotSupported,

    // Manifest errors
    #[error("failed to read {path}")]
    #[diagnostic(code(jsm::manifest::read_failed))]
    ManifestReadFailed { path: String, reason: String },

    #[error("failed to parse {path}: {reason}")]
    #[diagnostic(code(jsm::manifest::parse_failed))]
    ManifestParseFailed { path: String, reason: String },

    #[error("no scripts found in {file}")]
    #[diagnostic(
        code(jsm::manifest::no_scripts),
        help("Define scripts in package.json or tasks in deno.json")
    )]
    NoScripts { file: String },

    // Execution errors
    #[error("failed to run {program}: {source}")]
    #[diagnostic(code(jsm::exec::spawn_failed))]
    SpawnFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {}", status_text(*code))]
    #[diagnostic(code(jsm::exec::exit_status))]
    ExitStatus { program: String, code: Option<i32> },

    #[error("failed to read {program} output: {reason}")]
    #[diagnostic(code(jsm::exec::output_failed))]
    OutputFailed { program: String, reason: String },

    // Prompt errors
    #[error("prompt failed: {message}")]
    #[diagnostic(code(jsm::prompt::failed))]
    PromptFailed { message: String },

    // File system errors
    #[error("io error: {message}")]
    #[diagnostic(code(jsm::fs::io_error))]
    IoError {
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },
}

fn status_text(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "a signal".to_string(),
    }
}

impl JsmError {
    /// Exit code the binary should terminate with for this error
    ///
    /// A failing child process hands its own status through so scripts and CI see it
    /// unchanged; everything else exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            JsmError::ExitStatus {
                code: Some(code), ..
            } if *code != 0 => *code,
            _ => 1,
        }
    }
}

impl From<std::io::Error> for JsmError {
    fn from(err: std::io::Error) -> Self {
        JsmError::IoError {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl From<inquire::InquireError> for JsmError {
    fn from(err: inquire::InquireError) -> Self {
        JsmError::PromptFailed {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, JsmError>;
