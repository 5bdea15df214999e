//! `clean-install`: reproducible install from the lockfile, failing on drift

use super::Command;
use crate::agent::{Agent, VersionClass};

pub fn translate(agent: Agent, version: VersionClass) -> Command {
    match (agent, version) {
        (Agent::Npm, _) => Command::new("npm", ["ci"]),
        (Agent::Yarn, VersionClass::Classic) => {
            Command::new("yarn", ["install", "--frozen-lockfile"])
        }
        (Agent::Yarn, VersionClass::Modern) => Command::new("yarn", ["install", "--immutable"]),
        (Agent::Pnpm, _) => Command::new("pnpm", ["install", "--frozen-lockfile"]),
        (Agent::Bun, _) => Command::new("bun", ["install", "--frozen-lockfile"]),
        (Agent::Deno, _) => Command::new("deno", ["install", "--frozen"]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_install() {
        let classic = VersionClass::Classic;
        assert_eq!(translate(Agent::Npm, classic).to_string(), "npm ci");
        assert_eq!(
            translate(Agent::Yarn, classic).to_string(),
            "yarn install --frozen-lockfile"
        );
        assert_eq!(
            translate(Agent::Yarn, VersionClass::Modern).to_string(),
            "yarn install --immutable"
        );
        assert_eq!(
            translate(Agent::Pnpm, classic).to_string(),
            "pnpm install --frozen-lockfile"
        );
        assert_eq!(
            translate(Agent::Bun, classic).to_string(),
            "bun install --frozen-lockfile"
        );
        assert_eq!(translate(Agent::Deno, classic).to_string(), "deno install --frozen");
    }
}
