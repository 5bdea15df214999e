//! Process execution
//!
//! The single place where jsm spawns package managers. Children inherit stdio, so their
//! output reaches the terminal untouched; interrupts go to the child through the
//! shared process group.

use std::path::Path;

use tracing::debug;

use crate::agent::path::{ExecutableLookup, SearchPath};
use crate::error::{Result, exec};
use crate::translate::Command;

/// Runs commands to completion
pub trait ProcessRunner {
    /// Run `command` in `cwd`, failing on spawn errors and non-zero exits
    fn run(&self, command: &Command, cwd: &Path) -> Result<()>;
}

/// Spawns real processes
#[derive(Debug, Clone)]
pub struct SystemRunner {
    search: SearchPath,
}

impl SystemRunner {
    pub fn new(search: SearchPath) -> Self {
        Self { search }
    }
}

impl ProcessRunner for SystemRunner {
    fn run(&self, command: &Command, cwd: &Path) -> Result<()> {
        // Resolve through PATH ourselves so `.cmd` shims work on Windows.
        let program = self
            .search
            .resolve(&command.program)
            .map_or_else(|| command.program.clone().into(), std::path::PathBuf::into_os_string);

        debug!(%command, cwd = %cwd.display(), "Spawning");

        let status = std::process::Command::new(program)
            .args(&command.args)
            .current_dir(cwd)
            .status()
            .map_err(|e| exec::spawn_failed(&command.program, e))?;

        if status.success() {
            Ok(())
        } else {
            Err(exec::exit_status(&command.program, status.code()))
        }
    }
}
