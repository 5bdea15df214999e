//! Agent command implementation: arguments go to the manager untouched

use super::Context;
use crate::cli::AgentArgs;
use crate::error::Result;
use crate::translate::Verb;

/// Run agent command
pub fn run(ctx: &Context<'_>, args: AgentArgs) -> Result<()> {
    ctx.resolve()?.run_verb(Verb::Agent, &args.args)
}
