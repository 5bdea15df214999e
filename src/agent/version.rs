//! Yarn version classification
//!
//! Yarn 1 ("classic") and yarn 2+ ("berry") take different commands for the same
//! verbs. The class is probed once per invocation from `yarn --version`.

use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

use crate::error::{Result, exec};

/// Behavioral class of an agent's installed version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VersionClass {
    /// yarn 1, and every agent without version-dependent behavior
    #[default]
    Classic,
    /// yarn 2 and later
    Modern,
}

/// Reports the version string of a program
pub trait VersionReport {
    /// Raw `<program> --version` output
    fn output(&self, program: &str) -> Result<String>;
}

/// Runs `<program> --version` in the project directory
///
/// The directory matters: berry projects pin their yarn release through `.yarnrc.yml`.
#[derive(Debug, Clone)]
pub struct CommandVersionReport {
    cwd: PathBuf,
}

impl CommandVersionReport {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self { cwd: cwd.into() }
    }
}

impl VersionReport for CommandVersionReport {
    fn output(&self, program: &str) -> Result<String> {
        let output = Command::new(program)
            .arg("--version")
            .current_dir(&self.cwd)
            .output()
            .map_err(|e| exec::spawn_failed(program, e))?;

        if !output.status.success() {
            return Err(exec::exit_status(program, output.status.code()));
        }

        String::from_utf8(output.stdout).map_err(|e| exec::output_failed(program, e.to_string()))
    }
}

/// Classify a yarn version string
///
/// Anything that does not start with a major version of 2 or more is classic.
pub fn classify(version: &str) -> VersionClass {
    let major = version
        .trim()
        .trim_start_matches('v')
        .split('.')
        .next()
        .and_then(|major| major.parse::<u32>().ok());

    match major {
        Some(major) if major >= 2 => VersionClass::Modern,
        _ => VersionClass::Classic,
    }
}

/// Probe yarn's version class, falling back to classic when the probe fails
pub fn probe_yarn(report: &dyn VersionReport) -> VersionClass {
    match report.output("yarn") {
        Ok(version) => {
            let class = classify(&version);
            debug!(version = version.trim(), ?class, "Classified yarn version");
            class
        }
        Err(e) => {
            debug!(error = %e, "Could not determine yarn version, assuming classic");
            VersionClass::Classic
        }
    }
}
