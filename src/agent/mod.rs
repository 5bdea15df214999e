//! Package manager identities and detection
//!
//! - [`lockfile`]: ordered marker-file catalog and directory probing
//! - [`path`]: executable lookup on `PATH`
//! - [`version`]: yarn version classification
//! - [`resolver`]: the staged chain that picks one agent per invocation

pub mod lockfile;
pub mod path;
pub mod resolver;
pub mod version;

use std::fmt;
use std::str::FromStr;

pub use resolver::Resolver;
pub use version::VersionClass;

/// A supported package manager
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Agent {
    Npm,
    Yarn,
    Pnpm,
    Bun,
    Deno,
}

impl Agent {
    /// Detection priority shared by the lockfile and `PATH` probes
    pub const PRIORITY: [Agent; 5] = [
        Agent::Deno,
        Agent::Bun,
        Agent::Pnpm,
        Agent::Yarn,
        Agent::Npm,
    ];

    /// Executable name of the agent
    pub fn as_str(self) -> &'static str {
        match self {
            Agent::Npm => "npm",
            Agent::Yarn => "yarn",
            Agent::Pnpm => "pnpm",
            Agent::Bun => "bun",
            Agent::Deno => "deno",
        }
    }

    /// Whether the agent installs into `node_modules` and runs on an external Node.js
    ///
    /// Bun and deno bring their own runtime, so volta never wraps them.
    pub fn is_node_ecosystem(self) -> bool {
        match self {
            Agent::Npm | Agent::Yarn | Agent::Pnpm => true,
            Agent::Bun | Agent::Deno => false,
        }
    }

    /// Whether dependencies live in `node_modules` and `package.json`
    pub fn uses_node_modules(self) -> bool {
        match self {
            Agent::Npm | Agent::Yarn | Agent::Pnpm | Agent::Bun => true,
            Agent::Deno => false,
        }
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Agent {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Agent::PRIORITY
            .into_iter()
            .find(|agent| agent.as_str() == s)
            .ok_or(())
    }
}

/// Where the resolved agent came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentSource {
    Flag,
    Env,
    Lockfile,
    Path,
    UserInstalled,
}

impl fmt::Display for AgentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            AgentSource::Flag => "--agent",
            AgentSource::Env => "environment",
            AgentSource::Lockfile => "lockfile",
            AgentSource::Path => "PATH",
            AgentSource::UserInstalled => "user install",
        };
        f.write_str(text)
    }
}

/// The agent chosen for one invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedAgent {
    pub agent: Agent,
    pub source: AgentSource,
}
