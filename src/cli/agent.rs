use clap::Parser;

/// Arguments for the agent command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show the detected manager's version:\n    jsm agent --version\n\n\
                  Use a manager-specific command:\n    jsm agent config get registry")]
pub struct AgentArgs {
    /// Arguments passed to the package manager unchanged
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}
