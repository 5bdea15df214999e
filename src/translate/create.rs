//! `create`: scaffold a project from a starter kit
//!
//! Node agents take a template name (`vite`, `create-vite`, `@scope/create-x`) and
//! deno takes a url. Template names are normalized to the `create-*` package that
//! npm's `init` convention would resolve.

use super::{Command, split_version};
use crate::agent::{Agent, VersionClass};
use crate::error::{Result, translate};

pub fn translate(agent: Agent, version: VersionClass, args: &[String]) -> Result<Command> {
    let (template, rest) = args
        .split_first()
        .ok_or_else(|| translate::missing_argument("a template name is required"))?;

    let command = match (agent, version) {
        (Agent::Deno, _) => {
            if !is_url(template) {
                return Err(translate::missing_argument("for deno a url is required"));
            }
            Command::new("deno", ["run", "--allow-all", template.as_str()]).extend(rest)
        }
        (Agent::Npm, _) => {
            let name = package_name(agent, template)?;
            // npm exec stops parsing its own flags at the first `--`; any more would
            // reach the starter kit literally
            Command::new("npm", ["exec", "--yes", "--", name.as_str()])
                .extend(rest.iter().filter(|arg| *arg != "--"))
        }
        (Agent::Yarn, VersionClass::Classic) => {
            let name = package_name(agent, template)?;
            Command::new("npx", [name]).extend(rest)
        }
        (Agent::Yarn, VersionClass::Modern) => {
            let name = package_name(agent, template)?;
            Command::new("yarn", ["dlx".to_string(), name]).extend(rest)
        }
        (Agent::Pnpm, _) => {
            let name = package_name(agent, template)?;
            Command::new("pnpm", ["dlx".to_string(), name]).extend(rest)
        }
        (Agent::Bun, _) => {
            let name = package_name(agent, template)?;
            Command::new("bunx", [name]).extend(rest)
        }
    };

    Ok(command)
}

fn package_name(agent: Agent, template: &str) -> Result<String> {
    if is_url(template) {
        return Err(translate::unsupported(format!(
            "{agent} does not support creating from a url"
        )));
    }
    Ok(normalize(template))
}

/// `vite` → `create-vite`, `vite@5` → `create-vite@5`; scoped and `create-*` names unchanged
fn normalize(template: &str) -> String {
    if template.starts_with('@') {
        return template.to_string();
    }

    let (name, version) = split_version(template);
    if name.starts_with("create-") {
        template.to_string()
    } else {
        format!("create-{name}{version}")
    }
}

fn is_url(template: &str) -> bool {
    template.contains("://")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::JsmError;
    use crate::translate::tests::strings;

    fn create(agent: Agent, version: VersionClass, args: &[&str]) -> Result<Command> {
        translate(agent, version, &strings(args))
    }

    #[test]
    fn test_npm_create_single_separator() {
        let command = create(
            Agent::Npm,
            VersionClass::Classic,
            &["vite", "my-app", "--", "--template", "react"],
        )
        .unwrap();
        assert_eq!(command.program, "npm");
        assert_eq!(
            command.args,
            strings(&[
                "exec",
                "--yes",
                "--",
                "create-vite",
                "my-app",
                "--template",
                "react"
            ])
        );
        assert_eq!(command.args.iter().filter(|a| *a == "--").count(), 1);
    }

    #[test]
    fn test_yarn_create_depends_on_version() {
        let args = ["react-app", "my-app"];
        assert_eq!(
            create(Agent::Yarn, VersionClass::Classic, &args)
                .unwrap()
                .to_string(),
            "npx create-react-app my-app"
        );
        assert_eq!(
            create(Agent::Yarn, VersionClass::Modern, &args)
                .unwrap()
                .to_string(),
            "yarn dlx create-react-app my-app"
        );
    }

    #[test]
    fn test_other_node_agents() {
        assert_eq!(
            create(Agent::Pnpm, VersionClass::Classic, &["vite", "app"])
                .unwrap()
                .to_string(),
            "pnpm dlx create-vite app"
        );
        assert_eq!(
            create(Agent::Bun, VersionClass::Classic, &["vite"])
                .unwrap()
                .to_string(),
            "bunx create-vite"
        );
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("vite"), "create-vite");
        assert_eq!(normalize("vite@5.1.0"), "create-vite@5.1.0");
        assert_eq!(normalize("create-vite"), "create-vite");
        assert_eq!(normalize("create-vite@latest"), "create-vite@latest");
        assert_eq!(normalize("@vitejs/create-app"), "@vitejs/create-app");
    }

    #[test]
    fn test_prefixed_and_bare_templates_agree() {
        let pairs = [
            (["react-app", "my-app"], ["create-react-app", "my-app"]),
            (["vite@5", "my-app"], ["create-vite@5", "my-app"]),
        ];
        for agent in Agent::PRIORITY {
            if agent == Agent::Deno {
                continue;
            }
            for version in [VersionClass::Classic, VersionClass::Modern] {
                for (bare, prefixed) in &pairs {
                    assert_eq!(
                        create(agent, version, bare).unwrap(),
                        create(agent, version, prefixed).unwrap(),
                        "{agent} {version:?} {bare:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_deno_requires_url() {
        let err = create(Agent::Deno, VersionClass::Classic, &["vite"]).unwrap_err();
        assert!(matches!(err, JsmError::MissingArgument { .. }));
        assert_eq!(err.to_string(), "for deno a url is required");

        let command = create(
            Agent::Deno,
            VersionClass::Classic,
            &["https://fresh.deno.dev", "my-app"],
        )
        .unwrap();
        assert_eq!(
            command.to_string(),
            "deno run --allow-all https://fresh.deno.dev my-app"
        );
    }

    #[test]
    fn test_node_agents_reject_urls() {
        let err = create(Agent::Pnpm, VersionClass::Classic, &["https://x.dev"]).unwrap_err();
        assert!(matches!(err, JsmError::Unsupported { .. }));
        assert_eq!(
            err.to_string(),
            "pnpm does not support creating from a url"
        );
    }

    #[test]
    fn test_template_required() {
        for agent in Agent::PRIORITY {
            let err = create(agent, VersionClass::Classic, &[]).unwrap_err();
            assert_eq!(err.to_string(), "a template name is required");
        }
    }
}
