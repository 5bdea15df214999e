//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - install: Install command arguments
//! - run: Run command arguments
//! - exec: Exec command arguments
//! - dlx: Dlx command arguments
//! - create: Create command arguments
//! - update: Update command arguments
//! - uninstall: Uninstall command arguments
//! - agent: Pass-through command arguments
//! - completions: Completions command arguments

use clap::builder::{FalseyValueParser, Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod agent;
pub mod completions;
pub mod create;
pub mod dlx;
pub mod exec;
pub mod install;
pub mod run;
pub mod uninstall;
pub mod update;

pub use agent::AgentArgs;
pub use completions::CompletionsArgs;
pub use create::CreateArgs;
pub use dlx::DlxArgs;
pub use exec::ExecArgs;
pub use install::InstallArgs;
pub use run::RunArgs;
pub use uninstall::UninstallArgs;
pub use update::UpdateArgs;

/// jsm - one command set for every JavaScript package manager
///
/// Detects npm, yarn, pnpm, bun or deno for the project and runs the equivalent command.
#[derive(Parser, Debug)]
#[command(
    name = "jsm",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "One command set for npm, yarn, pnpm, bun and deno",
    long_about = "One command set for npm, yarn, pnpm, bun and deno.\n\n\
                  jsm detects the package manager a project uses (lockfile, then PATH) \
                  and translates a uniform set of verbs into that manager's own \
                  commands. Before dev and start it installs missing or stale \
                  dependencies.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  jsm install                \x1b[90m# Install everything declared\x1b[0m\n   \
                  jsm install -D typescript  \x1b[90m# Add a dev dependency\x1b[0m\n   \
                  jsm run dev                \x1b[90m# Run a script, installing first\x1b[0m\n   \
                  jsm dlx cowsay hello       \x1b[90m# Run a package without installing\x1b[0m\n   \
                  jsm create vite my-app     \x1b[90m# Scaffold from create-vite\x1b[0m\n   \
                  jsm --agent pnpm ci        \x1b[90m# Force a manager\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Package manager to use instead of detecting one (npm, yarn, pnpm, bun, deno)
    #[arg(long, short = 'a', global = true)]
    pub agent: Option<String>,

    /// Working directory (defaults to current directory)
    #[arg(long, short = 'C', global = true, env = "JSM_CWD")]
    pub cwd: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Print the translated command instead of running it
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Never wrap installs with volta
    #[arg(
        long,
        global = true,
        env = "JSM_NO_VOLTA",
        value_parser = FalseyValueParser::new()
    )]
    pub no_volta: bool,

    /// Skip installing dependencies before dev and start
    #[arg(
        long,
        global = true,
        env = "JSM_NO_AUTO_INSTALL",
        value_parser = FalseyValueParser::new()
    )]
    pub no_auto_install: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install dependencies, or add packages
    #[command(visible_alias = "i")]
    Install(InstallArgs),

    /// Run a script from package.json or a deno task
    #[command(visible_alias = "r")]
    Run(RunArgs),

    /// Run a binary that is already installed
    #[command(visible_alias = "x")]
    Exec(ExecArgs),

    /// Download a package and run it without adding it to the project
    Dlx(DlxArgs),

    /// Scaffold a new project from a starter kit
    Create(CreateArgs),

    /// Update dependencies
    #[command(visible_alias = "up")]
    Update(UpdateArgs),

    /// Remove dependencies
    #[command(visible_alias = "un")]
    Uninstall(UninstallArgs),

    /// Install exactly what the lockfile records
    #[command(name = "clean-install", visible_alias = "ci")]
    CleanInstall,

    /// Pass arguments straight to the detected package manager
    Agent(AgentArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),

    /// Show version information
    #[command(hide = true)]
    Version,
}
