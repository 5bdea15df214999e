//! Run command implementation
//!
//! Scripts come from `package.json#scripts`; deno projects add the tasks of
//! `deno.json(c)` on top. Without a script name the operator picks one.

use std::collections::BTreeMap;

use tracing::debug;

use super::{Context, Project};
use crate::agent::Agent;
use crate::cli::RunArgs;
use crate::config::deno::{self, DenoConfig};
use crate::config::manifest::{self, PackageManifest};
use crate::error::{JsmError, Result};
use crate::preflight;
use crate::translate::{RunFlags, Verb};

/// Run run command
pub fn run(ctx: &Context<'_>, args: RunArgs) -> Result<()> {
    if args.eval {
        return Err(JsmError::EvalNotSupported);
    }

    let project = ctx.resolve()?;
    let (if_present, forwarded) = args.split_if_present();
    let (scripts, file) = load_scripts(&project)?;
    if scripts.is_empty() {
        return Err(crate::error::manifest::no_scripts(file));
    }

    let script = match args.script {
        Some(script) => script,
        None => match project.prompter().task(&scripts)? {
            Some(script) => script,
            None => {
                debug!("No script selected");
                return Ok(());
            }
        },
    };

    if !scripts.contains_key(&script) {
        if if_present {
            debug!(%script, "Script not defined, skipping");
            return Ok(());
        }
        debug!(%script, "Script not defined, leaving it to {}", project.agent);
    }

    if preflight::applies_to(&script) {
        project.auto_install()?;
    }

    let mut run_args = Vec::with_capacity(forwarded.len() + 1);
    run_args.push(script);
    run_args.extend(forwarded);
    project.run_verb(Verb::Run(RunFlags::default()), &run_args)
}

/// Script name to command, and the file to name when there are none
fn load_scripts(project: &Project<'_>) -> Result<(BTreeMap<String, String>, &'static str)> {
    let mut scripts = PackageManifest::load(project.cwd())?
        .map(|manifest| manifest.scripts)
        .unwrap_or_default();

    if project.agent != Agent::Deno {
        return Ok((scripts, manifest::FILE));
    }

    let file = deno::config_file(project.cwd()).unwrap_or(deno::FILES[0]);
    if let Some(config) = DenoConfig::load(project.cwd())? {
        scripts.extend(config.task_commands());
    }
    Ok((scripts, file))
}
