//! Clean-install command implementation

use super::Context;
use crate::error::Result;
use crate::translate::Verb;

/// Run clean-install command
pub fn run(ctx: &Context<'_>) -> Result<()> {
    ctx.resolve()?.run_verb(Verb::CleanInstall, &[])
}
