//! Lockfile-based agent detection
//!
//! The catalog order is the detection priority: when several markers coexist the
//! earliest entry wins.

use std::path::Path;

use super::Agent;

/// A marker file and the agent that owns it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockfileMarker {
    pub file: &'static str,
    pub agent: Agent,
}

/// Marker files in detection order
pub const MARKERS: [LockfileMarker; 8] = [
    LockfileMarker {
        file: "deno.json",
        agent: Agent::Deno,
    },
    LockfileMarker {
        file: "deno.jsonc",
        agent: Agent::Deno,
    },
    LockfileMarker {
        file: "deno.lock",
        agent: Agent::Deno,
    },
    LockfileMarker {
        file: "bun.lockb",
        agent: Agent::Bun,
    },
    LockfileMarker {
        file: "bun.lock",
        agent: Agent::Bun,
    },
    LockfileMarker {
        file: "pnpm-lock.yaml",
        agent: Agent::Pnpm,
    },
    LockfileMarker {
        file: "yarn.lock",
        agent: Agent::Yarn,
    },
    LockfileMarker {
        file: "package-lock.json",
        agent: Agent::Npm,
    },
];

/// Return the first catalog marker present in `dir`
pub fn detect(dir: &Path) -> Option<LockfileMarker> {
    MARKERS
        .iter()
        .copied()
        .find(|marker| dir.join(marker.file).is_file())
}
