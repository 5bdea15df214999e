//! Exec command implementation

use super::Context;
use crate::cli::ExecArgs;
use crate::error::Result;
use crate::translate::{ExecFlags, Verb};

/// Run exec command
pub fn run(ctx: &Context<'_>, args: ExecArgs) -> Result<()> {
    let project = ctx.resolve()?;
    let flags = ExecFlags { eval: args.eval };
    project.run_verb(Verb::Exec(flags), &args.args)
}
