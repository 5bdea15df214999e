//! Command translation engine
//!
//! Maps a uniform verb, its flags and positional arguments onto the program and
//! argument vector a specific agent expects. Translation is pure: it never touches the
//! filesystem, the network or the environment, so equal requests always produce equal
//! commands. Detection and probing happen before a request is built.
//!
//! One submodule per verb. Each one matches on [`Agent`] without a wildcard arm, so a
//! new agent cannot compile until every verb handles it.

pub mod agent;
pub mod clean_install;
pub mod create;
pub mod dlx;
pub mod exec;
pub mod install;
pub mod run;
pub mod uninstall;
pub mod update;

use std::fmt;

use crate::agent::{Agent, VersionClass};
use crate::error::Result;

pub use exec::ExecFlags;
pub use install::InstallFlags;
pub use run::RunFlags;
pub use uninstall::UninstallFlags;
pub use update::UpdateFlags;

/// A program and its argument vector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub program: String,
    pub args: Vec<String>,
}

impl Command {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    fn push(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    fn push_if(self, condition: bool, arg: &str) -> Self {
        if condition { self.push(arg) } else { self }
    }

    fn extend<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " '{}'", arg.replace('\'', "'\\''"))?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

/// A uniform verb and its flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verb {
    Install(InstallFlags),
    Run(RunFlags),
    Exec(ExecFlags),
    Dlx,
    Create,
    Update(UpdateFlags),
    Uninstall(UninstallFlags),
    CleanInstall,
    Agent,
}

/// Everything the engine needs for one translation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest<'a> {
    pub agent: Agent,
    pub version: VersionClass,
    /// Volta is installed and allowed to wrap installs
    pub volta: bool,
    pub verb: Verb,
    pub args: &'a [String],
}

/// Translate a request into the command to run
pub fn translate(request: &TranslationRequest<'_>) -> Result<Command> {
    let TranslationRequest {
        agent,
        version,
        volta,
        verb,
        args,
    } = request;
    let (agent, version) = (*agent, *version);

    match verb {
        Verb::Install(flags) => {
            install::translate(agent, version, *flags, args).map(|c| wrap_volta(c, *volta))
        }
        Verb::Run(flags) => run::translate(agent, *flags, args),
        Verb::Exec(flags) => exec::translate(agent, version, flags, args),
        Verb::Dlx => dlx::translate(agent, version, args),
        Verb::Create => create::translate(agent, version, args),
        Verb::Update(flags) => update::translate(agent, version, *flags, args),
        Verb::Uninstall(flags) => uninstall::translate(agent, version, *flags, args),
        Verb::CleanInstall => Ok(clean_install::translate(agent, version)),
        Verb::Agent => Ok(agent::translate(agent, args)),
    }
}

/// The bare "install everything declared" command used before scripts
pub fn restore(agent: Agent, volta: bool) -> Command {
    wrap_volta(install::restore(agent), volta)
}

/// Prefix node-ecosystem installs with `volta run` so volta picks the pinned toolchain
fn wrap_volta(command: Command, volta: bool) -> Command {
    let wrappable = command
        .program
        .parse::<Agent>()
        .is_ok_and(Agent::is_node_ecosystem);

    if volta && wrappable {
        Command::new("volta", ["run".to_string(), command.program]).extend(command.args)
    } else {
        command
    }
}

/// Turn a package argument into something `deno` accepts
///
/// Bare names are npm packages; `npm:`/`jsr:` specifiers, urls and paths pass through.
fn deno_specifier(package: &str) -> String {
    let qualified = package.starts_with("npm:")
        || package.starts_with("jsr:")
        || package.contains("://")
        || package.starts_with("./")
        || package.starts_with("../")
        || package.starts_with('/');

    if qualified {
        package.to_string()
    } else {
        format!("npm:{package}")
    }
}

/// Split `name@version` into the name and the `@version` suffix, scopes included
fn split_version(package: &str) -> (&str, &str) {
    let search_from = usize::from(package.starts_with('@'));
    match package[search_from..].find('@') {
        Some(pos) => package.split_at(pos + search_from),
        None => (package, ""),
    }
}
