use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    \
                  jsm completions bash > ~/.bash_completion.d/jsm\n\n\
                  Generate zsh completions:\n    jsm completions zsh > ~/.zfunc/_jsm\n\n\
                  Generate fish completions:\n    \
                  jsm completions fish > ~/.config/fish/completions/jsm.fish\n\n\
                  Generate PowerShell completions:\n    jsm completions powershell")]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(value_enum)]
    pub shell: Shell,
}
