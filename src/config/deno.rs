//! `deno.json` / `deno.jsonc` and `deno.lock` handling

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, manifest};

/// Config file names, in lookup order
pub const FILES: [&str; 2] = ["deno.json", "deno.jsonc"];

pub const LOCK_FILE: &str = "deno.lock";

/// The parts of `deno.json` jsm reads
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DenoConfig {
    #[serde(default)]
    pub tasks: BTreeMap<String, DenoTask>,

    #[serde(default)]
    pub imports: BTreeMap<String, String>,

    /// `true`/`false` in deno 1, `"auto"`, `"manual"` or `"none"` in deno 2
    #[serde(default)]
    pub node_modules_dir: Option<serde_json::Value>,
}

/// A task is a command string or an object with a `command`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DenoTask {
    Command(String),
    Detailed {
        #[serde(default)]
        command: Option<String>,
    },
}

impl DenoConfig {
    /// Read the first config file present in `dir`
    pub fn load(dir: &Path) -> Result<Option<Self>> {
        let Some(file) = config_file(dir) else {
            return Ok(None);
        };

        let path = dir.join(file);
        let text = std::fs::read_to_string(&path)
            .map_err(|e| manifest::read_failed(path.display().to_string(), e.to_string()))?;
        Self::from_jsonc(&text, file).map(Some)
    }

    /// Parse JSON with comments and trailing commas
    pub fn from_jsonc(text: &str, origin: &str) -> Result<Self> {
        let json = strip_trailing_commas(&strip_comments(text));
        serde_json::from_str(&json).map_err(|e| manifest::parse_failed(origin, e.to_string()))
    }

    /// Task names mapped to their commands
    pub fn task_commands(&self) -> BTreeMap<String, String> {
        self.tasks
            .iter()
            .map(|(name, task)| {
                let command = match task {
                    DenoTask::Command(command) => command.clone(),
                    DenoTask::Detailed { command } => command.clone().unwrap_or_default(),
                };
                (name.clone(), command)
            })
            .collect()
    }

    /// `npm:` and `jsr:` specifiers from the import map
    pub fn registry_imports(&self) -> Vec<&str> {
        self.imports
            .values()
            .map(String::as_str)
            .filter(|spec| spec.starts_with("npm:") || spec.starts_with("jsr:"))
            .collect()
    }

    /// Whether packages are materialized into a local `node_modules`
    pub fn uses_node_modules_dir(&self) -> bool {
        match &self.node_modules_dir {
            Some(serde_json::Value::Bool(enabled)) => *enabled,
            Some(serde_json::Value::String(mode)) => mode != "none",
            _ => false,
        }
    }
}

/// Name of the config file in `dir`, if any
pub fn config_file(dir: &Path) -> Option<&'static str> {
    FILES.into_iter().find(|file| dir.join(file).is_file())
}

/// Specifiers recorded in `deno.lock`; empty when there is no lock
///
/// Lock v4 keeps them at the top level, v3 under `packages`.
pub fn locked_specifiers(dir: &Path) -> Result<BTreeSet<String>> {
    let path = dir.join(LOCK_FILE);
    if !path.is_file() {
        return Ok(BTreeSet::new());
    }

    let text = std::fs::read_to_string(&path)
        .map_err(|e| manifest::read_failed(path.display().to_string(), e.to_string()))?;
    let lock: serde_json::Value =
        serde_json::from_str(&text).map_err(|e| manifest::parse_failed(LOCK_FILE, e.to_string()))?;

    let specifiers = lock
        .get("specifiers")
        .or_else(|| lock.get("packages").and_then(|p| p.get("specifiers")))
        .and_then(serde_json::Value::as_object);

    Ok(specifiers
        .map(|map| map.keys().cloned().collect())
        .unwrap_or_default())
}

/// Remove `//` and `/* */` comments outside of strings
fn strip_comments(content: &str) -> String {
    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();
    let mut in_string = false;
    let mut escaped = false;

    while let Some(c) = chars.next() {
        if in_string {
            result.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match (c, chars.peek().copied()) {
            ('/', Some('/')) => {
                for c in chars.by_ref() {
                    if c == '\n' {
                        result.push(c);
                        break;
                    }
                }
            }
            ('/', Some('*')) => {
                chars.next();
                let mut prev = '\0';
                for c in chars.by_ref() {
                    if prev == '*' && c == '/' {
                        break;
                    }
                    prev = c;
                }
            }
            ('"', _) => {
                in_string = true;
                result.push(c);
            }
            _ => result.push(c),
        }
    }

    result
}

/// Remove commas that directly precede `}` or `]`, ignoring whitespace
fn strip_trailing_commas(content: &str) -> String {
    let chars: Vec<char> = content.chars().collect();
    let mut result = String::with_capacity(content.len());
    let mut in_string = false;
    let mut escaped = false;

    for (i, &c) in chars.iter().enumerate() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
        } else if c == '"' {
            in_string = true;
        } else if c == ',' {
            let next = chars[i + 1..].iter().find(|c| !c.is_whitespace());
            if matches!(next, Some('}' | ']')) {
                continue;
            }
        }
        result.push(c);
    }

    result
}
