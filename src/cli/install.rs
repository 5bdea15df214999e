use clap::Parser;

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Install everything declared:\n    jsm install\n\n\
                  Add packages:\n    jsm install react react-dom\n\n\
                  Add a dev dependency:\n    jsm install -D typescript\n\n\
                  Install a global tool:\n    jsm install -g serve\n\n\
                  Install production dependencies from the lockfile:\n    jsm install -P --frozen")]
pub struct InstallArgs {
    /// Packages to add (if omitted, installs everything declared)
    pub packages: Vec<String>,

    /// Add packages as dev dependencies
    #[arg(long, short = 'D')]
    pub dev: bool,

    /// Install packages globally
    #[arg(long, short = 'g')]
    pub global: bool,

    /// Skip dev dependencies
    #[arg(long, short = 'P')]
    pub production: bool,

    /// Fail instead of updating the lockfile
    #[arg(long)]
    pub frozen: bool,

    /// Pick versions interactively (yarn 2+ only)
    #[arg(long, short = 'i')]
    pub interactive: bool,
}
