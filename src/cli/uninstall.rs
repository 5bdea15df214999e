use clap::Parser;

/// Arguments for the uninstall command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Remove a dependency:\n    jsm uninstall lodash\n\n\
                  Remove a global tool:\n    jsm un -g serve\n\n\
                  Pick dependencies to remove:\n    jsm uninstall -i")]
pub struct UninstallArgs {
    /// Packages to remove
    pub packages: Vec<String>,

    /// Remove global packages
    #[arg(long, short = 'g')]
    pub global: bool,

    /// Pick dependencies to remove from package.json
    #[arg(long, short = 'i')]
    pub interactive: bool,
}

#[cfg(test)]
mod tests {
    use super::super::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn test_cli_parsing_uninstall() {
        let cli = Cli::try_parse_from(["jsm", "uninstall", "lodash", "chalk"]).unwrap();
        match cli.command {
            Commands::Uninstall(args) => {
                assert_eq!(args.packages, vec!["lodash", "chalk"]);
                assert!(!args.global);
                assert!(!args.interactive);
            }
            _ => panic!("Expected Uninstall command"),
        }
    }

    #[test]
    fn test_cli_parsing_uninstall_alias_interactive() {
        let cli = Cli::try_parse_from(["jsm", "un", "-i"]).unwrap();
        match cli.command {
            Commands::Uninstall(args) => {
                assert!(args.packages.is_empty());
                assert!(args.interactive);
            }
            _ => panic!("Expected Uninstall command"),
        }
    }
}
