//! Update command implementation
//!
//! npm and deno have no interactive upgrade of their own, so `--interactive` asks the
//! operator which declared dependencies to update and adds them to the named packages.

use tracing::debug;

use super::Context;
use crate::cli::UpdateArgs;
use crate::error::Result;
use crate::translate::update::{check_flags, supports_interactive};
use crate::translate::{UpdateFlags, Verb};

/// Run update command
pub fn run(ctx: &Context<'_>, args: UpdateArgs) -> Result<()> {
    let mut flags = UpdateFlags {
        global: args.global,
        interactive: args.interactive,
        latest: args.latest,
    };
    check_flags(flags)?;

    let project = ctx.resolve()?;
    let mut packages = args.packages;

    if flags.interactive && !supports_interactive(project.agent) {
        for name in project.pick_dependencies("Select dependencies to update")? {
            if !packages.contains(&name) {
                packages.push(name);
            }
        }
        if packages.is_empty() {
            debug!("No dependencies selected");
            return Ok(());
        }
        flags.interactive = false;
    }

    project.run_verb(Verb::Update(flags), &packages)
}
