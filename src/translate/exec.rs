//! `exec`: run a binary that is already installed, or evaluate code

use super::Command;
use crate::agent::{Agent, VersionClass};
use crate::error::{Result, translate};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecFlags {
    /// Code to evaluate instead of running a binary
    pub eval: Option<String>,
}

const SCRIPT_EXTENSIONS: [&str; 8] = [
    ".ts", ".tsx", ".mts", ".cts", ".js", ".jsx", ".mjs", ".cjs",
];

pub fn translate(
    agent: Agent,
    version: VersionClass,
    flags: &ExecFlags,
    args: &[String],
) -> Result<Command> {
    if let Some(code) = &flags.eval {
        return Ok(eval(agent, code).extend(args));
    }

    let (binary, rest) = args
        .split_first()
        .ok_or_else(|| translate::missing_argument("a binary name is required"))?;

    let command = match (agent, version) {
        (Agent::Npm, _) => Command::new("npm", ["exec", "--", binary.as_str()]).extend(rest),
        (Agent::Yarn, VersionClass::Classic) => {
            Command::new("yarn", ["run", binary.as_str()]).extend(rest)
        }
        (Agent::Yarn, VersionClass::Modern) => {
            Command::new("yarn", ["exec", binary.as_str()]).extend(rest)
        }
        (Agent::Pnpm, _) => Command::new("pnpm", ["exec", binary.as_str()]).extend(rest),
        (Agent::Bun, _) => Command::new("bun", ["run", binary.as_str()]).extend(rest),
        (Agent::Deno, _) => {
            if !is_script_file(binary) {
                return Err(translate::unsupported(format!(
                    "deno cannot exec \"{binary}\" use dlx instead"
                )));
            }
            Command::new("deno", ["run", binary.as_str()]).extend(rest)
        }
    };

    Ok(command)
}

fn eval(agent: Agent, code: &str) -> Command {
    match agent {
        Agent::Npm | Agent::Yarn | Agent::Pnpm => Command::new("node", ["--eval", code]),
        Agent::Bun => Command::new("bun", ["--eval", code]),
        Agent::Deno => Command::new("deno", ["eval", code]),
    }
}

fn is_script_file(binary: &str) -> bool {
    SCRIPT_EXTENSIONS.iter().any(|ext| binary.ends_with(ext))
}
