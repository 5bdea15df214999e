//! Deno projects: imports that `deno.lock` does not resolve yet

use std::path::Path;

use super::Reason;
use super::record::NODE_MODULES;
use crate::config::deno::{self, DenoConfig};
use crate::error::Result;

pub fn check(cwd: &Path) -> Result<Option<Reason>> {
    let Some(config) = DenoConfig::load(cwd)? else {
        return Ok(None);
    };

    let locked = deno::locked_specifiers(cwd)?;
    let unresolved: Vec<String> = config
        .registry_imports()
        .into_iter()
        .filter(|spec| !locked.contains(*spec))
        .map(ToString::to_string)
        .collect();

    if !unresolved.is_empty() {
        return Ok(Some(Reason::UnresolvedImports(unresolved)));
    }

    if config.uses_node_modules_dir() && !cwd.join(NODE_MODULES).is_dir() {
        return Ok(Some(Reason::MissingDependencyDir));
    }

    Ok(None)
}
