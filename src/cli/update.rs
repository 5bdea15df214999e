use clap::Parser;

/// Arguments for the update command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Update within declared ranges:\n    jsm update\n\n\
                  Move packages to their newest release:\n    jsm up --latest react react-dom\n\n\
                  Pick packages interactively:\n    jsm update -i")]
pub struct UpdateArgs {
    /// Packages to update (if omitted, updates everything)
    pub packages: Vec<String>,

    /// Update global packages
    #[arg(long, short = 'g')]
    pub global: bool,

    /// Pick packages interactively
    #[arg(long, short = 'i')]
    pub interactive: bool,

    /// Ignore declared ranges and update to the newest release
    #[arg(long)]
    pub latest: bool,
}
