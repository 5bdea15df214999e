//! Auto-install preflight
//!
//! Before `dev` and `start`, decide whether installed dependencies are missing or stale.
//! The decision takes the first hit of, in order:
//!
//! 1. `node_modules` is missing (node agents without Plug'n'Play)
//! 2. deno imports that `deno.lock` does not resolve, or a configured but absent
//!    `node_modules`
//! 3. declared dependencies absent from `node_modules` (node agents without PnP)
//! 4. the dependency hash differs from the recorded one
//!
//! After an install the fresh hash is recorded inside `node_modules`.

pub mod deno;
pub mod hash;
pub mod record;

use std::fmt;
use std::path::Path;

use tracing::debug;

use crate::agent::Agent;
use crate::config::manifest::PackageManifest;
use crate::error::Result;
use record::NODE_MODULES;

/// Scripts that trigger the preflight
pub const SCRIPTS: [&str; 2] = ["dev", "start"];

/// Plug'n'Play loaders; their presence means there is no `node_modules` to inspect
pub const PNP_MARKERS: [&str; 2] = [".pnp.cjs", ".pnp.js"];

/// Why an install is needed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reason {
    ManifestUnavailable,
    MissingDependencyDir,
    UnresolvedImports(Vec<String>),
    MissingDependencies(Vec<String>),
    HashChanged,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::ManifestUnavailable => f.write_str("package.json could not be read"),
            Reason::MissingDependencyDir => f.write_str("node_modules is missing"),
            Reason::UnresolvedImports(specs) => {
                write!(f, "imports not in deno.lock: {}", specs.join(", "))
            }
            Reason::MissingDependencies(names) => {
                write!(f, "dependencies not installed: {}", names.join(", "))
            }
            Reason::HashChanged => f.write_str("dependency files changed since the last install"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Skip,
    Install(Reason),
}

/// Whether `script` gets a preflight at all
pub fn applies_to(script: &str) -> bool {
    SCRIPTS.contains(&script)
}

pub fn is_pnp(cwd: &Path) -> bool {
    PNP_MARKERS.iter().any(|marker| cwd.join(marker).is_file())
}

pub struct Preflight<'a> {
    cwd: &'a Path,
    agent: Agent,
    missing_limit: usize,
}

impl<'a> Preflight<'a> {
    pub fn new(cwd: &'a Path, agent: Agent, missing_limit: usize) -> Self {
        Self {
            cwd,
            agent,
            missing_limit: missing_limit.max(1),
        }
    }

    pub fn decide(&self) -> Result<Decision> {
        let reason = if self.agent.uses_node_modules() {
            self.check_node()?
        } else {
            deno::check(self.cwd)?
        };

        let decision = match reason {
            Some(reason) => Decision::Install(reason),
            None if self.hash_changed()? => Decision::Install(Reason::HashChanged),
            None => Decision::Skip,
        };

        debug!(agent = %self.agent, ?decision, "Preflight decision");
        Ok(decision)
    }

    /// Record the current hash; does nothing when `node_modules` does not exist
    pub fn record(&self) -> Result<()> {
        let hash = hash::dependency_hash(self.cwd, self.agent)?;
        if record::write(self.cwd, &hash)? {
            debug!(%hash, "Recorded dependency hash");
        }
        Ok(())
    }

    fn check_node(&self) -> Result<Option<Reason>> {
        let pnp = is_pnp(self.cwd);
        if !pnp && !self.cwd.join(NODE_MODULES).is_dir() {
            return Ok(Some(Reason::MissingDependencyDir));
        }

        let manifest = match PackageManifest::load(self.cwd) {
            Ok(Some(manifest)) => manifest,
            Ok(None) => return Ok(Some(Reason::ManifestUnavailable)),
            Err(e) => {
                debug!(error = %e, "Unreadable package.json");
                return Ok(Some(Reason::ManifestUnavailable));
            }
        };

        if pnp {
            return Ok(None);
        }

        let missing = self.missing_dependencies(&manifest);
        if missing.is_empty() {
            Ok(None)
        } else {
            Ok(Some(Reason::MissingDependencies(missing)))
        }
    }

    /// Declared names without a `node_modules/<name>` entry, up to the configured limit
    fn missing_dependencies(&self, manifest: &PackageManifest) -> Vec<String> {
        let node_modules = self.cwd.join(NODE_MODULES);
        manifest
            .declared_dependencies()
            .into_iter()
            .filter(|name| !node_modules.join(name).exists())
            .take(self.missing_limit)
            .collect()
    }

    fn hash_changed(&self) -> Result<bool> {
        if !self.cwd.join(NODE_MODULES).is_dir() {
            return Ok(false);
        }

        let current = hash::dependency_hash(self.cwd, self.agent)?;
        Ok(record::read(self.cwd).as_deref() != Some(current.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{create_temp_dir, write_file};

    const MANIFEST: &str = r#"{
        "scripts": { "dev": "vite" },
        "dependencies": { "react": "^18" },
        "devDependencies": { "@types/react": "^18", "vite": "^5" }
    }"#;

    fn install_all(dir: &Path) {
        for name in ["react", "@types/react", "vite"] {
            std::fs::create_dir_all(dir.join(NODE_MODULES).join(name)).unwrap();
        }
    }

    fn decide(dir: &Path, agent: Agent) -> Decision {
        Preflight::new(dir, agent, 10).decide().unwrap()
    }

    #[test]
    fn test_applies_to_dev_and_start_only() {
        assert!(applies_to("dev"));
        assert!(applies_to("start"));
        assert!(!applies_to("build"));
        assert!(!applies_to("test"));
    }

    #[test]
    fn test_missing_node_modules() {
        let temp = create_temp_dir();
        write_file(temp.path(), "package.json", MANIFEST);
        assert_eq!(
            decide(temp.path(), Agent::Npm),
            Decision::Install(Reason::MissingDependencyDir)
        );
    }

    #[test]
    fn test_missing_manifest() {
        let temp = create_temp_dir();
        std::fs::create_dir(temp.path().join(NODE_MODULES)).unwrap();
        assert_eq!(
            decide(temp.path(), Agent::Pnpm),
            Decision::Install(Reason::ManifestUnavailable)
        );
    }

    #[test]
    fn test_missing_dependencies_in_name_order() {
        let temp = create_temp_dir();
        write_file(temp.path(), "package.json", MANIFEST);
        std::fs::create_dir_all(temp.path().join("node_modules/react")).unwrap();
        assert_eq!(
            decide(temp.path(), Agent::Yarn),
            Decision::Install(Reason::MissingDependencies(vec![
                "@types/react".to_string(),
                "vite".to_string()
            ]))
        );
    }

    #[test]
    fn test_missing_dependency_scan_is_capped() {
        let temp = create_temp_dir();
        write_file(temp.path(), "package.json", MANIFEST);
        std::fs::create_dir(temp.path().join(NODE_MODULES)).unwrap();
        let decision = Preflight::new(temp.path(), Agent::Npm, 1).decide().unwrap();
        assert_eq!(
            decision,
            Decision::Install(Reason::MissingDependencies(vec!["@types/react".to_string()]))
        );
    }

    #[test]
    fn test_unrecorded_hash_then_recorded() {
        let temp = create_temp_dir();
        write_file(temp.path(), "package.json", MANIFEST);
        install_all(temp.path());

        let preflight = Preflight::new(temp.path(), Agent::Npm, 10);
        assert_eq!(
            preflight.decide().unwrap(),
            Decision::Install(Reason::HashChanged)
        );

        preflight.record().unwrap();
        assert_eq!(preflight.decide().unwrap(), Decision::Skip);

        write_file(temp.path(), "package-lock.json", "{}");
        assert_eq!(
            preflight.decide().unwrap(),
            Decision::Install(Reason::HashChanged)
        );
    }

    #[test]
    fn test_pnp_skips_node_modules_checks() {
        let temp = create_temp_dir();
        write_file(temp.path(), "package.json", MANIFEST);
        write_file(temp.path(), ".pnp.cjs", "");
        assert_eq!(decide(temp.path(), Agent::Yarn), Decision::Skip);
    }

    #[test]
    fn test_record_without_node_modules_writes_nothing() {
        let temp = create_temp_dir();
        write_file(temp.path(), "package.json", MANIFEST);
        Preflight::new(temp.path(), Agent::Bun, 10).record().unwrap();
        assert!(!temp.path().join(NODE_MODULES).exists());
    }

    #[test]
    fn test_deno_without_node_modules() {
        let temp = create_temp_dir();
        write_file(temp.path(), "deno.json", r#"{"tasks": {"dev": "deno run main.ts"}}"#);
        assert_eq!(decide(temp.path(), Agent::Deno), Decision::Skip);
    }

    #[test]
    fn test_deno_unresolved_imports() {
        let temp = create_temp_dir();
        write_file(temp.path(), "deno.json", r#"{"imports": {"chalk": "npm:chalk@^5"}}"#);
        assert_eq!(
            decide(temp.path(), Agent::Deno),
            Decision::Install(Reason::UnresolvedImports(vec!["npm:chalk@^5".to_string()]))
        );
    }

    #[test]
    fn test_reason_text() {
        assert_eq!(
            Reason::MissingDependencies(vec!["a".into(), "b".into()]).to_string(),
            "dependencies not installed: a, b"
        );
        assert_eq!(Reason::MissingDependencyDir.to_string(), "node_modules is missing");
    }
}
