//! Command implementations for jsm
//!
//! Every verb handler takes the shared [`Context`], resolves the [`Project`]'s agent
//! and hands a translated command to [`Project::execute`].

pub mod agent;
pub mod clean_install;
pub mod completions;
pub mod create;
pub mod dlx;
pub mod exec;
pub mod install;
pub mod run;
pub mod uninstall;
pub mod update;
pub mod version;

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::agent::path::ExecutableLookup;
use crate::agent::resolver::Overrides;
use crate::agent::version::{VersionReport, probe_yarn};
use crate::agent::{Agent, Resolver, VersionClass};
use crate::config::Settings;
use crate::config::deno::DenoConfig;
use crate::config::manifest::PackageManifest;
use crate::error::Result;
use crate::preflight::{Decision, Preflight};
use crate::process::ProcessRunner;
use crate::translate::{self, Command, TranslationRequest, Verb};
use crate::ui::{self, Prompter};

/// Invocation-wide switches from the command line and environment
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub overrides: Overrides,
    pub dry_run: bool,
    pub no_volta: bool,
    pub no_auto_install: bool,
}

/// Everything a handler needs before an agent is known
pub struct Context<'a> {
    pub cwd: PathBuf,
    pub settings: Settings,
    pub options: Options,
    pub lookup: &'a dyn ExecutableLookup,
    pub runner: &'a dyn ProcessRunner,
    pub prompter: &'a dyn Prompter,
    pub versions: &'a dyn VersionReport,
}

impl Context<'_> {
    /// Resolve the agent and probe what translation depends on
    pub fn resolve(&self) -> Result<Project<'_>> {
        let resolved = Resolver::new(&self.cwd, self.lookup, self.prompter, self.runner)
            .resolve(&self.options.overrides)?;
        let agent = resolved.agent;

        let version = match agent {
            Agent::Yarn => probe_yarn(self.versions),
            Agent::Npm | Agent::Pnpm | Agent::Bun | Agent::Deno => VersionClass::Classic,
        };

        let volta = self.settings.volta
            && !self.options.no_volta
            && agent.is_node_ecosystem()
            && self.lookup.resolve("volta").is_some();

        debug!(%agent, ?version, volta, "Project resolved");

        Ok(Project {
            ctx: self,
            agent,
            version,
            volta,
        })
    }

    pub fn auto_install_enabled(&self) -> bool {
        self.settings.auto_install && !self.options.no_auto_install
    }
}

/// A context with its agent resolved
pub struct Project<'c> {
    ctx: &'c Context<'c>,
    pub agent: Agent,
    pub version: VersionClass,
    pub volta: bool,
}

impl Project<'_> {
    pub fn cwd(&self) -> &Path {
        &self.ctx.cwd
    }

    pub fn prompter(&self) -> &dyn Prompter {
        self.ctx.prompter
    }

    pub fn translate(&self, verb: Verb, args: &[String]) -> Result<Command> {
        translate::translate(&TranslationRequest {
            agent: self.agent,
            version: self.version,
            volta: self.volta,
            verb,
            args,
        })
    }

    /// Echo and run `command`, or only print it under `--dry-run`
    pub fn execute(&self, command: &Command) -> Result<()> {
        if self.ctx.options.dry_run {
            ui::print_dry_run(command);
            return Ok(());
        }

        ui::print_command(command);
        self.ctx.runner.run(command, &self.ctx.cwd)
    }

    /// Translate and execute in one step
    pub fn run_verb(&self, verb: Verb, args: &[String]) -> Result<()> {
        let command = self.translate(verb, args)?;
        self.execute(&command)
    }

    /// Install first when dependencies are missing or stale, then record the hash
    pub fn auto_install(&self) -> Result<()> {
        if !self.ctx.auto_install_enabled() {
            debug!("Auto-install disabled");
            return Ok(());
        }

        let preflight = Preflight::new(
            &self.ctx.cwd,
            self.agent,
            self.ctx.settings.missing_dependency_limit,
        );

        let Decision::Install(reason) = preflight.decide()? else {
            return Ok(());
        };

        ui::print_auto_install(&reason.to_string());
        self.execute(&translate::restore(self.agent, self.volta))?;

        if !self.ctx.options.dry_run {
            preflight.record()?;
        }
        Ok(())
    }

    /// Dependency names the project declares, for interactive pickers
    pub fn declared_dependencies(&self) -> Result<Vec<String>> {
        let mut names = PackageManifest::load(self.cwd())?
            .map(|manifest| manifest.declared_dependencies())
            .unwrap_or_default();

        if self.agent == Agent::Deno {
            if let Some(config) = DenoConfig::load(self.cwd())? {
                names.extend(config.imports.into_keys());
            }
            names.sort();
            names.dedup();
        }

        Ok(names)
    }

    /// Ask which declared dependencies to act on; empty means the operator cancelled
    pub fn pick_dependencies(&self, message: &str) -> Result<Vec<String>> {
        let options = self.declared_dependencies()?;
        if options.is_empty() {
            warn!("No dependencies declared, nothing to select");
            return Ok(Vec::new());
        }
        self.prompter().packages(message, options)
    }
}
