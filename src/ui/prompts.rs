//! Interactive prompts
//!
//! The [`Prompter`] trait keeps the resolver and verb handlers testable; the real
//! implementation uses `inquire`. A skipped prompt (ESC) is reported as `None` or an
//! empty selection rather than an error.

use std::collections::BTreeMap;
use std::fmt;

use inquire::{MultiSelect, Select, Text};

use crate::error::Result;

/// Interactive questions the core may ask the operator
pub trait Prompter {
    /// Ask for a free-text command
    fn command(&self, message: &str) -> Result<Option<String>>;

    /// Pick one script/task by name
    fn task(&self, tasks: &BTreeMap<String, String>) -> Result<Option<String>>;

    /// Pick any number of packages from `options`
    fn packages(&self, message: &str, options: Vec<String>) -> Result<Vec<String>>;
}

/// Script shown in the task picker
struct TaskChoice {
    name: String,
    command: String,
}

impl fmt::Display for TaskChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const MAX: usize = 60;
        if self.command.chars().count() > MAX {
            let short: String = self.command.chars().take(MAX - 3).collect();
            write!(f, "{:<16} {short}...", self.name)
        } else {
            write!(f, "{:<16} {}", self.name, self.command)
        }
    }
}

/// Prompts on the terminal using `inquire`
#[derive(Debug, Default, Clone, Copy)]
pub struct InquirePrompter;

impl Prompter for InquirePrompter {
    fn command(&self, message: &str) -> Result<Option<String>> {
        Ok(Text::new(message)
            .with_help_message("e.g. npm install --global pnpm, ESC to cancel")
            .prompt_skippable()?)
    }

    fn task(&self, tasks: &BTreeMap<String, String>) -> Result<Option<String>> {
        let items: Vec<TaskChoice> = tasks
            .iter()
            .map(|(name, command)| TaskChoice {
                name: name.clone(),
                command: command.clone(),
            })
            .collect();

        let Some(selection) = Select::new("Select a script to run", items)
            .with_starting_cursor(0)
            .with_page_size(10)
            .with_help_message("↑↓ to move, type to filter, ENTER to select, ESC to cancel")
            .prompt_skippable()?
        else {
            return Ok(None);
        };

        Ok(Some(selection.name))
    }

    fn packages(&self, message: &str, options: Vec<String>) -> Result<Vec<String>> {
        if options.is_empty() {
            return Ok(vec![]);
        }

        let selection = MultiSelect::new(message, options)
            .with_page_size(10)
            .with_help_message("↑↓ to move, SPACE to select, ENTER to confirm, ESC to cancel")
            .prompt_skippable()?;

        Ok(selection.unwrap_or_default())
    }
}
