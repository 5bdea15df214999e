//! Create command implementation

use super::Context;
use crate::cli::CreateArgs;
use crate::error::Result;
use crate::translate::Verb;

/// Run create command
pub fn run(ctx: &Context<'_>, args: CreateArgs) -> Result<()> {
    ctx.resolve()?.run_verb(Verb::Create, &args.args)
}
