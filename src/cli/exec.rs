use clap::Parser;

/// Arguments for the exec command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Run an installed binary:\n    jsm exec eslint --fix .\n\n\
                  Evaluate code with the project's runtime:\n    \
                  jsm exec --eval \"console.log(process.version)\"")]
pub struct ExecArgs {
    /// Evaluate code instead of running a binary
    #[arg(long, short = 'e', value_name = "CODE")]
    pub eval: Option<String>,

    /// Binary followed by its arguments
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "BINARY")]
    pub args: Vec<String>,
}
