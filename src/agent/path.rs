//! Executable lookup on the search path

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::Agent;

/// Resolves program names to executables
pub trait ExecutableLookup {
    /// Absolute path of `name`, or `None` if it cannot be found
    fn resolve(&self, name: &str) -> Option<PathBuf>;
}

/// Lookup over the directories of a `PATH`-style variable
#[derive(Debug, Clone)]
pub struct SearchPath {
    dirs: Vec<PathBuf>,
}

impl SearchPath {
    /// Search path of the current process
    pub fn from_env() -> Self {
        Self::new(std::env::var_os("PATH").unwrap_or_default())
    }

    /// Search path from a `PATH`-style value
    pub fn new(value: impl Into<OsString>) -> Self {
        let value = value.into();
        Self {
            dirs: std::env::split_paths(&value).collect(),
        }
    }
}

impl ExecutableLookup for SearchPath {
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        self.dirs
            .iter()
            .filter(|dir| !dir.as_os_str().is_empty())
            .flat_map(|dir| candidates(dir, name))
            .find(|candidate| is_executable(candidate))
    }
}

#[cfg(windows)]
fn candidates(dir: &Path, name: &str) -> Vec<PathBuf> {
    let exts = std::env::var("PATHEXT").unwrap_or_else(|_| ".COM;.EXE;.BAT;.CMD".to_string());
    let mut out = vec![dir.join(name)];
    out.extend(
        exts.split(';')
            .filter(|ext| !ext.is_empty())
            .map(|ext| dir.join(format!("{name}{}", ext.to_lowercase()))),
    );
    out
}

#[cfg(not(windows))]
fn candidates(dir: &Path, name: &str) -> Vec<PathBuf> {
    vec![dir.join(name)]
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// First agent from [`Agent::PRIORITY`] that `lookup` can resolve
pub fn detect(lookup: &dyn ExecutableLookup) -> Option<Agent> {
    Agent::PRIORITY
        .into_iter()
        .find(|agent| lookup.resolve(agent.as_str()).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{FakePath, create_temp_dir};

    #[test]
    fn test_detect_nothing() {
        assert_eq!(detect(&FakePath::with(&[])), None);
    }

    #[test]
    fn test_detect_uses_priority_not_path_order() {
        let lookup = FakePath::with(&["npm", "yarn", "bun"]);
        assert_eq!(detect(&lookup), Some(Agent::Bun));
    }

    #[test]
    fn test_detect_single() {
        assert_eq!(detect(&FakePath::with(&["npm"])), Some(Agent::Npm));
    }

    #[cfg(unix)]
    #[test]
    fn test_search_path_requires_executable_bit() {
        use std::os::unix::fs::PermissionsExt;

        let temp = create_temp_dir();
        let plain = temp.path().join("pnpm");
        std::fs::write(&plain, "").expect("Failed to write file");
        let lookup = SearchPath::new(temp.path().as_os_str());
        assert_eq!(lookup.resolve("pnpm"), None);

        std::fs::set_permissions(&plain, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to chmod");
        assert_eq!(lookup.resolve("pnpm"), Some(plain));
    }

    #[test]
    fn test_search_path_skips_directories() {
        let temp = create_temp_dir();
        std::fs::create_dir(temp.path().join("deno")).expect("Failed to create dir");
        let lookup = SearchPath::new(temp.path().as_os_str());
        assert_eq!(lookup.resolve("deno"), None);
    }

    #[test]
    fn test_search_path_empty_value() {
        let lookup = SearchPath::new("");
        assert_eq!(lookup.resolve("npm"), None);
    }
}
