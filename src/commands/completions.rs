//! Shell completions command

use std::io::Write;

use clap::CommandFactory;

use crate::cli::{Cli, CompletionsArgs};
use crate::error::Result;

/// Generate shell completions on stdout
pub fn run(args: &CompletionsArgs) -> Result<()> {
    generate(args, &mut std::io::stdout().lock())
}

fn generate(args: &CompletionsArgs, out: &mut dyn Write) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(args.shell, &mut cmd, "jsm", out);
    out.flush()?;
    Ok(())
}
