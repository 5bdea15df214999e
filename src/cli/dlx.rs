use clap::Parser;

/// Arguments for the dlx command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Run a package without installing it:\n    jsm dlx cowsay hello\n\n\
                  Pin a version:\n    jsm dlx prettier@3 --check .")]
pub struct DlxArgs {
    /// Package followed by the arguments for its binary
    #[arg(
        required = true,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_name = "PACKAGE"
    )]
    pub args: Vec<String>,
}
