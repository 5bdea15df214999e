//! `uninstall`: remove packages

use super::Command;
use crate::agent::{Agent, VersionClass};
use crate::error::{Result, config, translate};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UninstallFlags {
    pub global: bool,
    /// Packages were, or will be, picked from a prompt
    pub interactive: bool,
}

/// Flag combinations that are wrong for every agent
pub fn check_flags(flags: UninstallFlags) -> Result<()> {
    if flags.global && flags.interactive {
        return Err(config::invalid_flags(
            "--global and --interactive cannot be used together",
        ));
    }
    Ok(())
}

pub fn translate(
    agent: Agent,
    version: VersionClass,
    flags: UninstallFlags,
    packages: &[String],
) -> Result<Command> {
    check_flags(flags)?;
    if packages.is_empty() {
        return Err(translate::missing_argument(
            "one or more packages is required",
        ));
    }
    let global = flags.global;

    let command = match (agent, version) {
        (Agent::Npm, _) => Command::new("npm", ["uninstall"])
            .extend(packages)
            .push_if(global, "--global"),
        (Agent::Yarn, VersionClass::Classic) if global => {
            Command::new("yarn", ["global", "remove"]).extend(packages)
        }
        // Berry dropped global installs
        (Agent::Yarn, VersionClass::Modern) if global => {
            return translate(Agent::Npm, version, flags, packages);
        }
        (Agent::Yarn, _) => Command::new("yarn", ["remove"]).extend(packages),
        (Agent::Pnpm, _) => Command::new("pnpm", ["remove"])
            .extend(packages)
            .push_if(global, "--global"),
        (Agent::Bun, _) => Command::new("bun", ["remove"])
            .extend(packages)
            .push_if(global, "--global"),
        (Agent::Deno, _) if global => {
            Command::new("deno", ["uninstall", "--global"]).extend(packages)
        }
        (Agent::Deno, _) => Command::new("deno", ["remove"]).extend(packages),
    };

    Ok(command)
}
