//! Common test utilities for jsm integration tests
//!
//! Every [`TestProject`] gets its own `bin/` directory that becomes the binary's whole
//! `PATH`, so only the fake package managers a test installs can be detected.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Environment variables that would leak the developer's setup into a test
const SCRUBBED_ENV: [&str; 5] = [
    "JSM_AGENT",
    "JSM_CWD",
    "JSM_NO_VOLTA",
    "JSM_NO_AUTO_INSTALL",
    "JSM_LOG",
];

/// A project directory plus a private `PATH`
pub struct TestProject {
    pub temp: TempDir,
    /// Project root, the binary's working directory
    pub path: PathBuf,
    /// Directory holding fake package managers
    pub bin: PathBuf,
}

impl TestProject {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join("project");
        let bin = temp.path().join("bin");
        std::fs::create_dir_all(&path).expect("Failed to create project directory");
        std::fs::create_dir_all(&bin).expect("Failed to create bin directory");
        Self { temp, path, bin }
    }

    /// Write a file in the project
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the project
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Put an executable shell script called `name` on the private `PATH`
    pub fn install_agent(&self, name: &str, body: &str) {
        let script = self.bin.join(name);
        std::fs::write(&script, format!("#!/bin/sh\n{body}\n")).expect("Failed to write script");
        make_executable(&script);
    }

    /// A manager that appends its arguments to `calls.log` and succeeds
    pub fn install_logging_agent(&self, name: &str) {
        self.install_agent(name, &format!("echo \"{name} $*\" >> calls.log"));
    }

    /// A yarn that reports `version` and logs everything else
    pub fn install_yarn(&self, version: &str) {
        self.install_agent(
            "yarn",
            &format!(
                "if [ \"$1\" = \"--version\" ]; then echo {version}; exit 0; fi\n\
                 echo \"yarn $*\" >> calls.log"
            ),
        );
    }

    /// Lines the logging managers wrote, in order
    pub fn calls(&self) -> Vec<String> {
        if !self.file_exists("calls.log") {
            return Vec::new();
        }
        self.read_file("calls.log")
            .lines()
            .map(ToString::to_string)
            .collect()
    }

    /// The jsm binary running in the project with only the private `PATH`
    pub fn jsm(&self) -> Command {
        let mut cmd = jsm_cmd();
        cmd.current_dir(&self.path)
            .env("PATH", &self.bin)
            .env("JSM_CONFIG", self.temp.path().join("config.yaml"));
        cmd
    }

    /// Write the settings file the binary reads
    pub fn write_settings(&self, yaml: &str) {
        std::fs::write(self.temp.path().join("config.yaml"), yaml)
            .expect("Failed to write settings");
    }
}

/// The jsm binary with the jsm environment scrubbed
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn jsm_cmd() -> Command {
    let mut cmd = Command::cargo_bin("jsm").expect("Failed to find jsm binary");
    for name in SCRUBBED_ENV {
        cmd.env_remove(name);
    }
    cmd
}

#[cfg(unix)]
fn make_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
        .expect("Failed to make script executable");
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) {}
