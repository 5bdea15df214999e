//! Terminal presentation layer
//!
//! This module handles:
//! - Echoing translated commands before they run
//! - Interactive prompts (see [`prompts`])
//!
//! Everything is written to stderr so a child's stdout stays clean for pipes.

pub mod prompts;

use console::Style;

use crate::translate::Command;

pub use prompts::{InquirePrompter, Prompter};

/// Echo a command that is about to run
pub fn print_command(command: &Command) {
    eprintln!(
        "{} {}",
        Style::new().dim().apply_to("$"),
        Style::new().dim().apply_to(command)
    );
}

/// Print a command that `--dry-run` would have run
pub fn print_dry_run(command: &Command) {
    println!("{command}");
}

/// Note why the preflight is installing before a script
pub fn print_auto_install(reason: &str) {
    eprintln!(
        "{} {}",
        Style::new().bold().yellow().apply_to("auto-install:"),
        reason
    );
}
