//! `package.json` handling

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, manifest};

pub const FILE: &str = "package.json";

/// The parts of `package.json` jsm reads
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    #[serde(default)]
    pub scripts: BTreeMap<String, String>,

    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,

    #[serde(default)]
    pub dev_dependencies: BTreeMap<String, String>,

    #[serde(default)]
    pub workspaces: Option<Workspaces>,
}

/// `workspaces` is either a list of globs or yarn's `{ "packages": [...] }` form
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Workspaces {
    Globs(Vec<String>),
    Detailed {
        #[serde(default)]
        packages: Vec<String>,
    },
}

impl PackageManifest {
    /// Read `dir/package.json`; `None` when there is no such file
    pub fn load(dir: &Path) -> Result<Option<Self>> {
        let path = dir.join(FILE);
        if !path.is_file() {
            return Ok(None);
        }

        let json = std::fs::read_to_string(&path)
            .map_err(|e| manifest::read_failed(path.display().to_string(), e.to_string()))?;
        Self::from_json(&json, FILE).map(Some)
    }

    pub fn from_json(json: &str, origin: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| manifest::parse_failed(origin, e.to_string()))
    }

    /// Names from `dependencies` and `devDependencies`, sorted and deduplicated
    pub fn declared_dependencies(&self) -> Vec<String> {
        self.dependencies
            .keys()
            .chain(self.dev_dependencies.keys())
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Workspace member globs
    pub fn workspace_patterns(&self) -> &[String] {
        match &self.workspaces {
            Some(Workspaces::Globs(globs)) => globs,
            Some(Workspaces::Detailed { packages }) => packages,
            None => &[],
        }
    }
}
