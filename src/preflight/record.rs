//! The dependency hash recorded after a successful install
//!
//! Lives inside `node_modules` so deleting that directory also forgets the record.

use std::path::{Path, PathBuf};

use crate::error::{Result, fs};

pub const FILE: &str = ".jsm-deps-hash";

pub const NODE_MODULES: &str = "node_modules";

pub fn path(cwd: &Path) -> PathBuf {
    cwd.join(NODE_MODULES).join(FILE)
}

/// The recorded hash, if there is a readable record
pub fn read(cwd: &Path) -> Option<String> {
    std::fs::read_to_string(path(cwd))
        .ok()
        .map(|text| text.trim().to_string())
}

/// Record `hash`; returns `false` without writing when `node_modules` is absent
pub fn write(cwd: &Path, hash: &str) -> Result<bool> {
    if !cwd.join(NODE_MODULES).is_dir() {
        return Ok(false);
    }

    let path = path(cwd);
    std::fs::write(&path, hash).map_err(|e| fs::write_failed(&path, e))?;
    Ok(true)
}
