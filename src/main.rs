//! jsm - one command set for every JavaScript package manager
//!
//! Detects which of npm, yarn, pnpm, bun or deno governs a project, translates a
//! uniform verb into that manager's own invocation and runs it.

use clap::Parser;
use std::path::PathBuf;

mod agent;
mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod preflight;
mod process;
mod translate;
mod ui;

#[cfg(test)]
mod test_fixtures;

use agent::path::SearchPath;
use agent::resolver::Overrides;
use agent::version::CommandVersionReport;
use cli::{Cli, Commands};
use commands::{Context, Options};
use config::Settings;
use error::Result;
use process::SystemRunner;
use ui::InquirePrompter;

/// The directory every probe and spawn uses
///
/// An existing `--cwd` is canonicalized; a missing one is kept as given so the spawn
/// reports the OS error.
fn working_directory(cwd: Option<PathBuf>) -> Result<PathBuf> {
    match cwd {
        Some(dir) => Ok(dunce::canonicalize(&dir).unwrap_or(dir)),
        None => Ok(std::env::current_dir()?),
    }
}

fn run(cwd: Option<PathBuf>, options: Options, command: Commands) -> Result<()> {
    let cwd = working_directory(cwd)?;
    let settings = Settings::load()?;
    tracing::debug!(cwd = %cwd.display(), ?settings, "Starting");

    let search = SearchPath::from_env();
    let runner = SystemRunner::new(search.clone());
    let prompter = InquirePrompter;
    let versions = CommandVersionReport::new(&cwd);

    let ctx = Context {
        cwd,
        settings,
        options,
        lookup: &search,
        runner: &runner,
        prompter: &prompter,
        versions: &versions,
    };

    match command {
        Commands::Install(args) => commands::install::run(&ctx, args),
        Commands::Run(args) => commands::run::run(&ctx, args),
        Commands::Exec(args) => commands::exec::run(&ctx, args),
        Commands::Dlx(args) => commands::dlx::run(&ctx, args),
        Commands::Create(args) => commands::create::run(&ctx, args),
        Commands::Update(args) => commands::update::run(&ctx, args),
        Commands::Uninstall(args) => commands::uninstall::run(&ctx, args),
        Commands::CleanInstall => commands::clean_install::run(&ctx),
        Commands::Agent(args) => commands::agent::run(&ctx, args),
        Commands::Completions(_) | Commands::Version => Ok(()),
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let options = Options {
        overrides: Overrides::from_env(cli.agent),
        dry_run: cli.dry_run,
        no_volta: cli.no_volta,
        no_auto_install: cli.no_auto_install,
    };

    // Neither needs a project
    let result = match cli.command {
        Commands::Completions(args) => commands::completions::run(&args),
        Commands::Version => commands::version::run(),
        command => run(cli.cwd, options, command),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(e.exit_code());
    }
}
