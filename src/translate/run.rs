//! `run`: run a script declared by the project

use super::Command;
use crate::agent::Agent;
use crate::error::{JsmError, Result, translate};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunFlags {
    /// `--eval` was passed; rejected in favour of `exec --eval`
    pub eval: bool,
}

/// `args` is the script name followed by the arguments forwarded to it
pub fn translate(agent: Agent, flags: RunFlags, args: &[String]) -> Result<Command> {
    if flags.eval {
        return Err(JsmError::EvalNotSupported);
    }

    let (script, rest) = args
        .split_first()
        .ok_or_else(|| translate::missing_argument("a script name is required"))?;
    let rest = strip_separator(rest);

    let command = match agent {
        Agent::Npm => {
            let command = Command::new("npm", ["run", script.as_str()]);
            if rest.is_empty() {
                command
            } else {
                command.push("--").extend(rest)
            }
        }
        Agent::Yarn => Command::new("yarn", ["run", script.as_str()]).extend(rest),
        Agent::Pnpm => Command::new("pnpm", ["run", script.as_str()]).extend(rest),
        Agent::Bun => Command::new("bun", ["run", script.as_str()]).extend(rest),
        Agent::Deno => Command::new("deno", ["task", script.as_str()]).extend(rest),
    };

    Ok(command)
}

/// Drop a leading `--` the operator typed; npm gets exactly one back
fn strip_separator(args: &[String]) -> &[String] {
    match args.split_first() {
        Some((first, rest)) if first == "--" => rest,
        _ => args,
    }
}
