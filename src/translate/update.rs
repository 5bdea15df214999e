//! `update`: upgrade dependencies within, or past, their declared ranges

use super::{Command, split_version};
use crate::agent::{Agent, VersionClass};
use crate::error::{Result, config, translate};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateFlags {
    pub global: bool,
    pub interactive: bool,
    /// Ignore declared ranges and move to the newest release
    pub latest: bool,
}

/// Whether the agent has its own interactive picker
///
/// For the rest the caller prompts and passes the chosen names as packages.
pub fn supports_interactive(agent: Agent) -> bool {
    match agent {
        Agent::Yarn | Agent::Pnpm | Agent::Bun => true,
        Agent::Npm | Agent::Deno => false,
    }
}

/// Flag combinations that are wrong for every agent
pub fn check_flags(flags: UpdateFlags) -> Result<()> {
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
    flags: UpdateFlags,
    packages: &[String],
) -> Result<Command> {
    check_flags(flags)?;
    let UpdateFlags {
        global,
        interactive,
        latest,
    } = flags;

    if interactive && !supports_interactive(agent) {
        return Err(translate::unsupported(format!(
            "{agent} does not support --interactive for update"
        )));
    }

    let command = match (agent, version) {
        (Agent::Npm, _) if latest => {
            if packages.is_empty() {
                return Err(translate::missing_argument(
                    "for npm --latest requires one or more packages",
                ));
            }
            Command::new("npm", ["install"])
                .extend(packages.iter().map(|p| format!("{}@latest", split_version(p).0)))
                .push_if(global, "--global")
        }
        (Agent::Npm, _) => Command::new("npm", ["update"])
            .extend(packages)
            .push_if(global, "--global"),
        (Agent::Yarn, VersionClass::Classic) if interactive => {
            reject_packages(packages)?;
            Command::new("yarn", ["upgrade-interactive"]).push_if(latest, "--latest")
        }
        (Agent::Yarn, VersionClass::Classic) => {
            let base: &[&str] = if global {
                &["global", "upgrade"]
            } else {
                &["upgrade"]
            };
            Command::new("yarn", base.iter().copied())
                .extend(packages)
                .push_if(latest, "--latest")
        }
        (Agent::Yarn, VersionClass::Modern) if interactive => {
            reject_packages(packages)?;
            Command::new("yarn", ["upgrade-interactive"])
        }
        // Berry dropped global installs
        (Agent::Yarn, VersionClass::Modern) if global => {
            return translate(Agent::Npm, version, flags, packages);
        }
        (Agent::Yarn, VersionClass::Modern) => {
            let command = Command::new("yarn", ["up"]);
            if packages.is_empty() {
                command.push("*")
            } else {
                command.extend(packages)
            }
        }
        (Agent::Pnpm, _) => Command::new("pnpm", ["update"])
            .extend(packages)
            .push_if(latest, "--latest")
            .push_if(global, "--global")
            .push_if(interactive, "--interactive"),
        (Agent::Bun, _) => Command::new("bun", ["update"])
            .extend(packages)
            .push_if(latest, "--latest")
            .push_if(global, "--global")
            .push_if(interactive, "--interactive"),
        (Agent::Deno, _) => {
            if global {
                return Err(translate::unsupported(
                    "deno does not support --global for update",
                ));
            }
            Command::new("deno", ["outdated", "--update"])
                .extend(packages)
                .push_if(latest, "--latest")
        }
    };

    Ok(command)
}

fn reject_packages(packages: &[String]) -> Result<()> {
    if packages.is_empty() {
        Ok(())
    } else {
        Err(config::invalid_flags(
            "yarn upgrade-interactive does not take package arguments",
        ))
    }
}
