use clap::Parser;

/// Arguments for the create command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Scaffold with create-vite:\n    jsm create vite my-app\n\n\
                  Pass options to the starter kit:\n    \
                  jsm create vite my-app -- --template react\n\n\
                  Scaffold a deno project from a url:\n    \
                  jsm --agent deno create https://fresh.deno.dev my-app")]
pub struct CreateArgs {
    /// Template (`vite`, `create-vite`, `@scope/create-x`, or a url for deno) and its arguments
    #[arg(
        required = true,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_name = "TEMPLATE"
    )]
    pub args: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::super::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn test_cli_parsing_create() {
        let cli = Cli::try_parse_from(["jsm", "create", "vite", "my-app", "--template", "react"])
            .unwrap();
        match cli.command {
            Commands::Create(args) => {
                assert_eq!(args.args, vec!["vite", "my-app", "--template", "react"]);
            }
            _ => panic!("Expected Create command"),
        }
    }

    #[test]
    fn test_cli_parsing_create_requires_template() {
        assert!(Cli::try_parse_from(["jsm", "create"]).is_err());
    }
}
