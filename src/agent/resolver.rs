//! Agent resolution
//!
//! Resolution is an ordered chain of stages. Each stage either produces a
//! [`ResolvedAgent`] or defers to the next one:
//!
//! 1. Explicit: `--agent`, then `JSM_AGENT`. Never second-guessed.
//! 2. Lockfile: a marker in the working directory, if its agent is on `PATH`.
//! 3. Path: the first agent found on `PATH`.
//! 4. Recovery: ask the operator for a command that installs some agent, run it,
//!    and probe `PATH` again.
//!
//! Every filesystem probe uses the resolver's working directory, never the
//! process's own.

use std::path::Path;

use tracing::{debug, warn};

use super::path::{self, ExecutableLookup};
use super::{Agent, AgentSource, ResolvedAgent, lockfile};
use crate::error::{Result, config, detect};
use crate::process::ProcessRunner;
use crate::translate::Command;
use crate::ui::Prompter;

/// Environment variable naming an explicit agent
pub const AGENT_ENV: &str = "JSM_AGENT";

const RECOVERY_MESSAGE: &str = "no package manager found, enter a command to install one";

/// Explicit agent selections supplied by the operator
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Value of `--agent`
    pub flag: Option<String>,
    /// Value of [`AGENT_ENV`]
    pub env: Option<String>,
}

impl Overrides {
    /// Overrides from a flag value and the process environment
    pub fn from_env(flag: Option<String>) -> Self {
        Self {
            flag,
            env: std::env::var(AGENT_ENV).ok(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Explicit,
    Lockfile,
    Path,
    Recovery,
}

const STAGES: [Stage; 4] = [Stage::Explicit, Stage::Lockfile, Stage::Path, Stage::Recovery];

/// Picks the agent for one invocation
pub struct Resolver<'a> {
    cwd: &'a Path,
    lookup: &'a dyn ExecutableLookup,
    prompter: &'a dyn Prompter,
    runner: &'a dyn ProcessRunner,
}

impl<'a> Resolver<'a> {
    pub fn new(
        cwd: &'a Path,
        lookup: &'a dyn ExecutableLookup,
        prompter: &'a dyn Prompter,
        runner: &'a dyn ProcessRunner,
    ) -> Self {
        Self {
            cwd,
            lookup,
            prompter,
            runner,
        }
    }

    /// Run the chain; the first stage that produces an agent wins
    pub fn resolve(&self, overrides: &Overrides) -> Result<ResolvedAgent> {
        for stage in STAGES {
            if let Some(resolved) = self.run_stage(stage, overrides)? {
                debug!(
                    agent = %resolved.agent,
                    source = %resolved.source,
                    "Resolved package manager"
                );
                return Ok(resolved);
            }
            debug!(?stage, "Detection stage deferred");
        }

        Err(detect::none_found())
    }

    fn run_stage(&self, stage: Stage, overrides: &Overrides) -> Result<Option<ResolvedAgent>> {
        match stage {
            Stage::Explicit => explicit(overrides),
            Stage::Lockfile => Ok(self.from_lockfile()),
            Stage::Path => Ok(self.from_path(AgentSource::Path)),
            Stage::Recovery => self.recover(),
        }
    }

    fn from_lockfile(&self) -> Option<ResolvedAgent> {
        let marker = lockfile::detect(self.cwd)?;

        if self.lookup.resolve(marker.agent.as_str()).is_some() {
            return Some(ResolvedAgent {
                agent: marker.agent,
                source: AgentSource::Lockfile,
            });
        }

        warn!(
            "{} points to {} but it is not installed, falling back to PATH detection",
            marker.file, marker.agent
        );
        None
    }

    fn from_path(&self, source: AgentSource) -> Option<ResolvedAgent> {
        path::detect(self.lookup).map(|agent| ResolvedAgent { agent, source })
    }

    fn recover(&self) -> Result<Option<ResolvedAgent>> {
        let input = match self.prompter.command(RECOVERY_MESSAGE) {
            Ok(Some(input)) => input,
            Ok(None) => return Ok(None),
            Err(e) => {
                warn!(error = %e, "Could not ask for an install command");
                return Ok(None);
            }
        };

        let Some(command) = install_command(&input) else {
            warn!("\"{}\" does not look like an install command", input.trim());
            return Ok(None);
        };

        self.runner.run(&command, self.cwd)?;

        Ok(self.from_path(AgentSource::UserInstalled))
    }
}

fn explicit(overrides: &Overrides) -> Result<Option<ResolvedAgent>> {
    if let Some(value) = &overrides.flag {
        return parse_agent(value, "given to --agent").map(|agent| {
            Some(ResolvedAgent {
                agent,
                source: AgentSource::Flag,
            })
        });
    }

    match overrides.env.as_deref().map(str::trim) {
        // An empty variable counts as unset
        None | Some("") => Ok(None),
        Some(value) => parse_agent(value, &format!("in {AGENT_ENV}")).map(|agent| {
            Some(ResolvedAgent {
                agent,
                source: AgentSource::Env,
            })
        }),
    }
}

fn parse_agent(value: &str, origin: &str) -> Result<Agent> {
    value
        .parse::<Agent>()
        .map_err(|()| config::invalid_agent(value, origin))
}

/// Split recovery input into a command
///
/// A real install invocation has at least a program, a sub-verb and a target.
fn install_command(input: &str) -> Option<Command> {
    let mut tokens = input.split_whitespace().map(str::to_string);
    let program = tokens.next()?;
    let args: Vec<String> = tokens.collect();
    if args.len() < 2 {
        return None;
    }
    Some(Command::new(program, args))
}
