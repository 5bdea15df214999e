//! Uninstall command implementation

use tracing::debug;

use super::Context;
use crate::cli::UninstallArgs;
use crate::error::Result;
use crate::translate::uninstall::check_flags;
use crate::translate::{UninstallFlags, Verb};

/// Run uninstall command
pub fn run(ctx: &Context<'_>, args: UninstallArgs) -> Result<()> {
    let flags = UninstallFlags {
        global: args.global,
        interactive: args.interactive,
    };
    check_flags(flags)?;

    let project = ctx.resolve()?;
    let mut packages = args.packages;

    if flags.interactive {
        for name in project.pick_dependencies("Select dependencies to remove")? {
            if !packages.contains(&name) {
                packages.push(name);
            }
        }
        if packages.is_empty() {
            debug!("No dependencies selected");
            return Ok(());
        }
    }

    project.run_verb(Verb::Uninstall(flags), &packages)
}
