//! Install command implementation
//!
//! Without packages this installs everything the project declares; with packages it
//! adds them. Installs are the only verb volta may wrap.

use tracing::debug;

use super::Context;
use crate::cli::InstallArgs;
use crate::error::Result;
use crate::translate::{InstallFlags, Verb};

/// Run install command
pub fn run(ctx: &Context<'_>, args: InstallArgs) -> Result<()> {
    let project = ctx.resolve()?;
    let flags = InstallFlags {
        dev: args.dev,
        global: args.global,
        production: args.production,
        frozen: args.frozen,
        interactive: args.interactive,
    };

    debug!(?flags, packages = args.packages.len(), "Install");
    project.run_verb(Verb::Install(flags), &args.packages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::context;
    use crate::error::JsmError;
    use crate::test_fixtures::{
        FakePath, FakePrompter, FakeRunner, FakeVersion, create_temp_dir, write_file,
    };

    fn args(packages: &[&str]) -> InstallArgs {
        InstallArgs {
            packages: packages.iter().map(ToString::to_string).collect(),
            dev: false,
            global: false,
            production: false,
            frozen: false,
            interactive: false,
        }
    }

    #[test]
    fn test_pnpm_add_dev() {
        let temp = create_temp_dir();
        write_file(temp.path(), "pnpm-lock.yaml", "");
        let lookup = FakePath::with(&["pnpm"]);
        let (runner, prompter) = (FakeRunner::new(), FakePrompter::new());
        let versions = FakeVersion::failing();
        let ctx = context(temp.path(), &lookup, &runner, &prompter, &versions);

        let mut install = args(&["typescript"]);
        install.dev = true;
        run(&ctx, install).unwrap();

        assert_eq!(runner.commands(), vec!["pnpm add typescript --save-dev"]);
    }

    #[test]
    fn test_volta_wraps_npm_install() {
        let temp = create_temp_dir();
        let lookup = FakePath::with(&["npm", "volta"]);
        let (runner, prompter) = (FakeRunner::new(), FakePrompter::new());
        let versions = FakeVersion::failing();
        let ctx = context(temp.path(), &lookup, &runner, &prompter, &versions);

        run(&ctx, args(&[])).unwrap();

        assert_eq!(runner.commands(), vec!["volta run npm install"]);
    }

    #[test]
    fn test_deno_without_packages_spawns_nothing() {
        let temp = create_temp_dir();
        let lookup = FakePath::with(&["deno"]);
        let (runner, prompter) = (FakeRunner::new(), FakePrompter::new());
        let versions = FakeVersion::failing();
        let ctx = context(temp.path(), &lookup, &runner, &prompter, &versions);

        let err = run(&ctx, args(&[])).unwrap_err();

        assert!(matches!(err, JsmError::MissingArgument { .. }));
        assert_eq!(err.to_string(), "for deno one or more packages is required");
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn test_failing_install_reports_status() {
        let temp = create_temp_dir();
        let lookup = FakePath::with(&["bun"]);
        let runner = FakeRunner::new().failing_with(3);
        let prompter = FakePrompter::new();
        let versions = FakeVersion::failing();
        let ctx = context(temp.path(), &lookup, &runner, &prompter, &versions);

        let err = run(&ctx, args(&["zod"])).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }
}
