//! `install`: add packages, or install everything declared

use super::{Command, deno_specifier};
use crate::agent::{Agent, VersionClass};
use crate::error::{Result, config, translate};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InstallFlags {
    pub dev: bool,
    pub global: bool,
    pub production: bool,
    pub frozen: bool,
    pub interactive: bool,
}

pub fn translate(
    agent: Agent,
    version: VersionClass,
    flags: InstallFlags,
    packages: &[String],
) -> Result<Command> {
    validate(agent, version, flags, packages)?;

    if packages.is_empty() {
        Ok(install_all(agent, version, flags))
    } else if flags.global {
        Ok(add_global(agent, version, packages))
    } else {
        Ok(add(agent, version, flags, packages))
    }
}

/// Plain install of everything declared, no flags
pub fn restore(agent: Agent) -> Command {
    Command::new(agent.as_str(), ["install"])
}

fn validate(
    agent: Agent,
    version: VersionClass,
    flags: InstallFlags,
    packages: &[String],
) -> Result<()> {
    if flags.dev && flags.production {
        return Err(config::invalid_flags(
            "--dev and --production cannot be used together",
        ));
    }
    if flags.dev && flags.global {
        return Err(config::invalid_flags(
            "--dev and --global cannot be used together",
        ));
    }
    if !packages.is_empty() && flags.production {
        return Err(config::invalid_flags(
            "--production cannot be used when adding packages",
        ));
    }
    if !packages.is_empty() && flags.frozen {
        return Err(config::invalid_flags(
            "--frozen cannot be used when adding packages",
        ));
    }
    if packages.is_empty() && flags.global {
        return Err(translate::missing_argument(
            "global install requires one or more packages",
        ));
    }
    if packages.is_empty() && flags.interactive {
        return Err(translate::missing_argument(
            "--interactive requires one or more packages",
        ));
    }
    if flags.interactive && !(agent == Agent::Yarn && version == VersionClass::Modern) {
        return Err(translate::unsupported(format!(
            "{agent} does not support --interactive for install"
        )));
    }
    if agent == Agent::Deno && flags.production {
        return Err(translate::unsupported("deno does not support --production"));
    }
    if agent == Agent::Deno && packages.is_empty() {
        return Err(translate::missing_argument(
            "for deno one or more packages is required",
        ));
    }
    Ok(())
}

fn install_all(agent: Agent, version: VersionClass, flags: InstallFlags) -> Command {
    let InstallFlags {
        production, frozen, ..
    } = flags;

    match (agent, version) {
        (Agent::Npm, _) if frozen => {
            Command::new("npm", ["ci"]).push_if(production, "--omit=dev")
        }
        (Agent::Npm, _) => Command::new("npm", ["install"]).push_if(production, "--omit=dev"),
        (Agent::Yarn, VersionClass::Classic) => Command::new("yarn", ["install"])
            .push_if(production, "--production")
            .push_if(frozen, "--frozen-lockfile"),
        (Agent::Yarn, VersionClass::Modern) if production => {
            Command::new("yarn", ["workspaces", "focus", "--all", "--production"])
        }
        (Agent::Yarn, VersionClass::Modern) => {
            Command::new("yarn", ["install"]).push_if(frozen, "--immutable")
        }
        (Agent::Pnpm, _) => Command::new("pnpm", ["install"])
            .push_if(production, "--prod")
            .push_if(frozen, "--frozen-lockfile"),
        (Agent::Bun, _) => Command::new("bun", ["install"])
            .push_if(production, "--production")
            .push_if(frozen, "--frozen-lockfile"),
        // Rejected by validation; kept total so the match stays exhaustive
        (Agent::Deno, _) => restore(Agent::Deno),
    }
}

fn add(agent: Agent, version: VersionClass, flags: InstallFlags, packages: &[String]) -> Command {
    let InstallFlags {
        dev, interactive, ..
    } = flags;

    match agent {
        Agent::Npm => Command::new("npm", ["install"])
            .extend(packages)
            .push_if(dev, "--save-dev"),
        Agent::Yarn => Command::new("yarn", ["add"])
            .extend(packages)
            .push_if(dev, "--dev")
            .push_if(interactive && version == VersionClass::Modern, "--interactive"),
        Agent::Pnpm => Command::new("pnpm", ["add"])
            .extend(packages)
            .push_if(dev, "--save-dev"),
        Agent::Bun => Command::new("bun", ["add"])
            .extend(packages)
            .push_if(dev, "--dev"),
        Agent::Deno => Command::new("deno", ["add"])
            .extend(packages.iter().map(|p| deno_specifier(p)))
            .push_if(dev, "--dev"),
    }
}

fn add_global(agent: Agent, version: VersionClass, packages: &[String]) -> Command {
    match (agent, version) {
        (Agent::Npm, _) => Command::new("npm", ["install"])
            .extend(packages)
            .push("--global"),
        (Agent::Yarn, VersionClass::Classic) => {
            Command::new("yarn", ["global", "add"]).extend(packages)
        }
        // Berry dropped global installs
        (Agent::Yarn, VersionClass::Modern) => add_global(Agent::Npm, version, packages),
        (Agent::Pnpm, _) => Command::new("pnpm", ["add"])
            .extend(packages)
            .push("--global"),
        (Agent::Bun, _) => Command::new("bun", ["add"])
            .extend(packages)
            .push("--global"),
        (Agent::Deno, _) => Command::new("deno", ["install", "--global"])
            .extend(packages.iter().map(|p| deno_specifier(p))),
    }
}
