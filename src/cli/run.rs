use clap::Parser;

/// Arguments for the run command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Run a script:\n    jsm run build\n\n\
                  Forward arguments to the script:\n    jsm run test --watch\n\n\
                  Succeed quietly when the script is missing:\n    jsm run lint --if-present\n\n\
                  Pick a script interactively:\n    jsm run")]
pub struct RunArgs {
    /// Do nothing when the script is not defined
    #[arg(long)]
    pub if_present: bool,

    /// Not supported here; use `jsm exec --eval`
    #[arg(long, hide = true)]
    pub eval: bool,

    /// Script to run (if omitted, shows interactive menu)
    pub script: Option<String>,

    /// Arguments forwarded to the script
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl RunArgs {
    /// Whether `--if-present` was given, before or after the script name
    ///
    /// Returns the forwarded arguments with every `--if-present` before a `--`
    /// removed; anything after the separator belongs to the script.
    pub fn split_if_present(&self) -> (bool, Vec<String>) {
        let mut trailing = false;
        let mut separated = false;
        let mut args = Vec::with_capacity(self.args.len());
        for arg in &self.args {
            if !separated && arg == "--if-present" {
                trailing = true;
                continue;
            }
            separated |= arg == "--";
            args.push(arg.clone());
        }
        (self.if_present || trailing, args)
    }
}
