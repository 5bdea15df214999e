//! Dlx command implementation

use super::Context;
use crate::cli::DlxArgs;
use crate::error::Result;
use crate::translate::Verb;

/// Run dlx command
pub fn run(ctx: &Context<'_>, args: DlxArgs) -> Result<()> {
    ctx.resolve()?.run_verb(Verb::Dlx, &args.args)
}
