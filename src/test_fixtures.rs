//! Test fixtures shared by unit tests
//!
//! Temp directories plus in-memory stand-ins for the seams the core talks through:
//! executable lookup, version probing, prompts and process spawning.
//!
//! ```ignore
//! use crate::test_fixtures::{FakePath, FakeRunner, create_temp_dir};
//!
//! let temp = create_temp_dir();
//! let lookup = FakePath::with(&["npm"]);
//! let runner = FakeRunner::new().installing(&lookup, "pnpm");
//! ```

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use tempfile::TempDir;

use crate::agent::path::ExecutableLookup;
use crate::agent::version::VersionReport;
use crate::error::{JsmError, Result, exec};
use crate::process::ProcessRunner;
use crate::translate::Command;
use crate::ui::Prompter;

/// Create a temp directory in the system temp location
///
/// A relative `TMPDIR` is ignored so test directories never land inside the repo.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    let base = std::env::temp_dir();
    let base = if base.is_absolute() {
        base
    } else {
        PathBuf::from("/tmp")
    };
    TempDir::new_in(base).expect("Failed to create temp directory")
}

/// Write `contents` to `dir/relative`, creating parent directories
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn write_file(dir: &Path, relative: &str, contents: &str) {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(&path, contents).expect("Failed to write file");
}

/// `PATH` stand-in; clones share the same set of installed programs
#[derive(Debug, Clone, Default)]
pub struct FakePath {
    installed: Rc<RefCell<HashSet<String>>>,
}

impl FakePath {
    pub fn with(names: &[&str]) -> Self {
        let lookup = Self::default();
        for name in names {
            lookup.install(name);
        }
        lookup
    }

    pub fn install(&self, name: &str) {
        self.installed.borrow_mut().insert(name.to_string());
    }
}

impl ExecutableLookup for FakePath {
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        self.installed
            .borrow()
            .contains(name)
            .then(|| PathBuf::from("/fake/bin").join(name))
    }
}

/// Scripted answers for every prompt, with call counters
#[derive(Debug, Default)]
pub struct FakePrompter {
    command: Option<String>,
    task: Option<String>,
    packages: Vec<String>,
    unavailable: bool,
    commands_asked: Cell<usize>,
    tasks_asked: Cell<usize>,
    package_options: RefCell<Vec<Vec<String>>>,
}

impl FakePrompter {
    /// Skips every prompt
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answering_command(mut self, answer: &str) -> Self {
        self.command = Some(answer.to_string());
        self
    }

    pub fn answering_task(mut self, answer: &str) -> Self {
        self.task = Some(answer.to_string());
        self
    }

    pub fn selecting_packages(mut self, names: &[&str]) -> Self {
        self.packages = names.iter().map(ToString::to_string).collect();
        self
    }

    /// Fails every prompt, as a terminal without a TTY does
    pub fn unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }

    pub fn commands_asked(&self) -> usize {
        self.commands_asked.get()
    }

    pub fn tasks_asked(&self) -> usize {
        self.tasks_asked.get()
    }

    /// Options offered by each package prompt, in order
    pub fn package_options(&self) -> Vec<Vec<String>> {
        self.package_options.borrow().clone()
    }
}

impl Prompter for FakePrompter {
    fn command(&self, _message: &str) -> Result<Option<String>> {
        self.commands_asked.set(self.commands_asked.get() + 1);
        if self.unavailable {
            return Err(JsmError::PromptFailed {
                message: "not a terminal".to_string(),
            });
        }
        Ok(self.command.clone())
    }

    fn task(&self, _tasks: &BTreeMap<String, String>) -> Result<Option<String>> {
        self.tasks_asked.set(self.tasks_asked.get() + 1);
        Ok(self.task.clone())
    }

    fn packages(&self, _message: &str, options: Vec<String>) -> Result<Vec<String>> {
        let chosen = self
            .packages
            .iter()
            .filter(|name| options.contains(name))
            .cloned()
            .collect();
        self.package_options.borrow_mut().push(options);
        Ok(chosen)
    }
}

/// Records commands instead of spawning them
#[derive(Debug, Default)]
pub struct FakeRunner {
    calls: RefCell<Vec<(Command, PathBuf)>>,
    installs: Option<(FakePath, String)>,
    exit_code: Option<i32>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every successful run puts `name` on `lookup`
    pub fn installing(mut self, lookup: &FakePath, name: &str) -> Self {
        self.installs = Some((lookup.clone(), name.to_string()));
        self
    }

    /// Every run fails with exit status `code`
    pub fn failing_with(mut self, code: i32) -> Self {
        self.exit_code = Some(code);
        self
    }

    pub fn calls(&self) -> Vec<(Command, PathBuf)> {
        self.calls.borrow().clone()
    }

    pub fn commands(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .map(|(command, _)| command.to_string())
            .collect()
    }
}

impl ProcessRunner for FakeRunner {
    fn run(&self, command: &Command, cwd: &Path) -> Result<()> {
        self.calls
            .borrow_mut()
            .push((command.clone(), cwd.to_path_buf()));

        if let Some(code) = self.exit_code {
            return Err(exec::exit_status(&command.program, Some(code)));
        }
        if let Some((lookup, name)) = &self.installs {
            lookup.install(name);
        }
        Ok(())
    }
}

/// Canned `--version` output
#[derive(Debug, Clone)]
pub struct FakeVersion {
    output: Option<String>,
}

impl FakeVersion {
    pub fn reporting(output: &str) -> Self {
        Self {
            output: Some(output.to_string()),
        }
    }

    pub fn failing() -> Self {
        Self { output: None }
    }
}

impl VersionReport for FakeVersion {
    fn output(&self, program: &str) -> Result<String> {
        self.output.clone().ok_or_else(|| {
            exec::spawn_failed(
                program,
                std::io::Error::new(std::io::ErrorKind::NotFound, "not installed"),
            )
        })
    }
}
