//! BLAKE3 fingerprint of the files that decide what gets installed

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use blake3::Hasher;
use serde::Deserialize;
use tracing::{debug, warn};
use walkdir::WalkDir;
use wax::{CandidatePath, Glob, Pattern};

use crate::agent::Agent;
use crate::config::manifest::{self, PackageManifest};
use crate::error::{Result, fs};

/// Hash prefix for BLAKE3 hashes
pub const HASH_PREFIX: &str = "blake3:";

const PNPM_WORKSPACE: &str = "pnpm-workspace.yaml";

#[derive(Debug, Default, Deserialize)]
struct PnpmWorkspace {
    #[serde(default)]
    packages: Vec<String>,
}

/// Lock and config files of `agent` that feed the hash
pub fn agent_files(agent: Agent) -> &'static [&'static str] {
    match agent {
        Agent::Npm => &["package-lock.json", "npm-shrinkwrap.json"],
        Agent::Yarn => &["yarn.lock", ".yarnrc.yml"],
        Agent::Pnpm => &["pnpm-lock.yaml", PNPM_WORKSPACE],
        Agent::Bun => &["bun.lockb", "bun.lock"],
        Agent::Deno => &["deno.json", "deno.jsonc", "deno.lock"],
    }
}

/// Hash `package.json`, the agent's files and every workspace member manifest
///
/// Each present file contributes its relative path and contents, separated by NUL,
/// in path order. Absent files contribute nothing.
pub fn dependency_hash(cwd: &Path, agent: Agent) -> Result<String> {
    let mut files: BTreeSet<String> = BTreeSet::new();
    files.insert(manifest::FILE.to_string());
    files.extend(agent_files(agent).iter().map(ToString::to_string));
    files.extend(workspace_manifests(cwd));

    let mut hasher = Hasher::new();
    for relative in &files {
        let path = cwd.join(relative);
        if !path.is_file() {
            continue;
        }

        let contents = std::fs::read(&path).map_err(|e| fs::read_failed(&path, e))?;
        hasher.update(relative.as_bytes());
        hasher.update(b"\0");
        hasher.update(&contents);
        hasher.update(b"\0");
    }

    Ok(format!("{}{}", HASH_PREFIX, hasher.finalize().to_hex()))
}

/// Workspace globs from `package.json#workspaces` and `pnpm-workspace.yaml#packages`
fn workspace_patterns(cwd: &Path) -> Vec<String> {
    let mut patterns = Vec::new();

    match PackageManifest::load(cwd) {
        Ok(Some(manifest)) => patterns.extend_from_slice(manifest.workspace_patterns()),
        Ok(None) => {}
        Err(e) => debug!(error = %e, "Ignoring package.json workspaces"),
    }

    let pnpm = cwd.join(PNPM_WORKSPACE);
    if pnpm.is_file() {
        let parsed = std::fs::read_to_string(&pnpm)
            .map_err(|e| e.to_string())
            .and_then(|yaml| {
                serde_yaml::from_str::<Option<PnpmWorkspace>>(&yaml).map_err(|e| e.to_string())
            });
        match parsed {
            Ok(workspace) => patterns.extend(workspace.unwrap_or_default().packages),
            Err(e) => debug!(error = %e, "Ignoring {PNPM_WORKSPACE}"),
        }
    }

    patterns
}

/// Relative paths of member `package.json` files matched by the workspace globs
fn workspace_manifests(cwd: &Path) -> Vec<String> {
    let sources: Vec<String> = workspace_patterns(cwd)
        .iter()
        .filter(|pattern| !pattern.starts_with('!'))
        .map(|pattern| {
            let pattern = pattern.trim_start_matches("./").trim_end_matches('/');
            format!("{pattern}/{}", manifest::FILE)
        })
        .collect();

    let globs: Vec<Glob<'_>> = sources
        .iter()
        .filter_map(|source| match Glob::new(source) {
            Ok(glob) => Some(glob),
            Err(e) => {
                warn!("Ignoring workspace pattern {source}: {e}");
                None
            }
        })
        .collect();

    if globs.is_empty() {
        return Vec::new();
    }

    WalkDir::new(cwd)
        .min_depth(1)
        .into_iter()
        .filter_entry(|entry| {
            let name = entry.file_name().to_string_lossy();
            !(entry.file_type().is_dir() && (name == "node_modules" || name.starts_with('.')))
        })
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file() && entry.file_name() == manifest::FILE)
        .filter_map(|entry| relative_slash_path(cwd, entry.path()))
        .filter(|relative| relative != manifest::FILE)
        .filter(|relative| {
            let candidate = CandidatePath::from(relative.as_str());
            globs.iter().any(|glob| glob.matched(&candidate).is_some())
        })
        .collect()
}

fn relative_slash_path(base: &Path, path: &Path) -> Option<String> {
    let relative: PathBuf = path.strip_prefix(base).ok()?.to_path_buf();
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Some(parts.join("/"))
}
