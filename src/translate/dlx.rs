//! `dlx`: fetch a package and run its binary without adding it to the project

use super::{Command, deno_specifier};
use crate::agent::{Agent, VersionClass};
use crate::error::{Result, translate};

pub fn translate(agent: Agent, version: VersionClass, args: &[String]) -> Result<Command> {
    let (package, rest) = args
        .split_first()
        .ok_or_else(|| translate::missing_argument("a package name is required"))?;

    let command = match (agent, version) {
        (Agent::Npm, _) | (Agent::Yarn, VersionClass::Classic) => {
            Command::new("npx", [package.as_str()])
        }
        (Agent::Yarn, VersionClass::Modern) => Command::new("yarn", ["dlx", package.as_str()]),
        (Agent::Pnpm, _) => Command::new("pnpm", ["dlx", package.as_str()]),
        (Agent::Bun, _) => Command::new("bunx", [package.as_str()]),
        (Agent::Deno, _) => Command::new(
            "deno",
            ["run".to_string(), "--allow-all".to_string(), deno_specifier(package)],
        ),
    };

    Ok(command.extend(rest))
}
