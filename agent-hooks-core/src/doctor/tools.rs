use std::fmt;
use std::path::Path;

use tracing::debug;

use super::validators::{Validator, current_swift_version};
use crate::exec::ToolEnv;
use crate::technology::Technology;
use crate::utils::{bracketed, first_line};

/// outcome of a single check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckStatus {
    Passed,
    Warning,
    Failed,
}

impl CheckStatus {
    /// Failed for required checks, Warning for optional ones
    pub fn problem(required: bool) -> Self {
        if required {
            CheckStatus::Failed
        } else {
            CheckStatus::Warning
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
}

impl CheckResult {
    pub fn new(name: impl Into<String>, status: CheckStatus, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status,
            message: message.into(),
        }
    }

    pub fn is_problem(&self) -> bool {
        self.status != CheckStatus::Passed
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            f.write_str(&self.name)
        } else {
            write!(f, "{}: {}", self.name, self.message)
        }
    }
}

/// a development tool the doctor knows how to check
///
/// tools without a command are meta-tools, satisfied through their validator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolDefinition {
    pub name: &'static str,
    pub command: Option<&'static str>,
    pub validator: Option<Validator>,
    pub url: &'static str,
}

impl ToolDefinition {
    pub fn command(name: &'static str, url: &'static str) -> Self {
        Self {
            name,
            command: Some(name),
            validator: None,
            url,
        }
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }

    pub fn meta(name: &'static str, validator: Validator, url: &'static str) -> Self {
        Self {
            name,
            command: None,
            validator: Some(validator),
            url,
        }
    }

    pub fn is_meta(&self) -> bool {
        self.command.is_none()
    }
}

// sorted alphabetically by name, keep it that way
pub fn builtin_tools() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::command("agent-hooks", "https://github.com/brandonbloom/agent-hooks"),
        ToolDefinition::command("biome", "https://biomejs.dev"),
        ToolDefinition::command("black", "https://black.readthedocs.io"),
        ToolDefinition::command("cargo", "https://doc.rust-lang.org/cargo/"),
        ToolDefinition::command("clojure", "https://clojure.org"),
        ToolDefinition::command("direnv", "https://direnv.net")
            .with_validator(Validator::ShellIntegration),
        ToolDefinition::command("foreman", "https://github.com/ddollar/foreman"),
        ToolDefinition::command("gem", "https://rubygems.org"),
        ToolDefinition::command("git", "https://git-scm.com"),
        ToolDefinition::command("go", "https://go.dev"),
        ToolDefinition::command("gofmt", "https://pkg.go.dev/cmd/gofmt"),
        ToolDefinition::command(
            "goimports",
            "https://pkg.go.dev/golang.org/x/tools/cmd/goimports",
        ),
        ToolDefinition::command("hivemind", "https://github.com/DarthSim/hivemind"),
        ToolDefinition::command("hurl", "https://hurl.dev"),
        ToolDefinition::command("java", "https://dev.java"),
        ToolDefinition::command("javac", "https://dev.java"),
        ToolDefinition::command("lein", "https://leiningen.org"),
        ToolDefinition::command("ng", "https://angular.dev/tools/cli"),
        ToolDefinition::command("node", "https://nodejs.org"),
        ToolDefinition::command("npm", "https://www.npmjs.com"),
        ToolDefinition::command("npx", "https://docs.npmjs.com/cli/commands/npx"),
        ToolDefinition::command("overmind", "https://github.com/DarthSim/overmind"),
        ToolDefinition::command("pip", "https://pip.pypa.io"),
        ToolDefinition::command("prettier", "https://prettier.io"),
        ToolDefinition::meta(
            "procfile-runner",
            Validator::OneOf {
                group: "procfile-runner",
                technology: Technology::Procfile,
                candidates: vec!["foreman", "hivemind", "overmind"],
            },
            "https://devcenter.heroku.com/articles/procfile",
        ),
        ToolDefinition::command("python", "https://www.python.org"),
        ToolDefinition::command("ruby", "https://www.ruby-lang.org"),
        ToolDefinition::command("ruff", "https://docs.astral.sh/ruff"),
        ToolDefinition::command("rustc", "https://www.rust-lang.org"),
        ToolDefinition::command("rustfmt", "https://github.com/rust-lang/rustfmt"),
        ToolDefinition::command("swift", "https://swift.org")
            .with_validator(Validator::VersionCompatibility),
        ToolDefinition::command("transcript", "https://github.com/deref/transcript"),
    ]
}

/// tools checked for every project, always as required
pub fn builtin_core_tools() -> Vec<&'static str> {
    vec!["agent-hooks", "git"]
}

// sorted alphabetically by command, keep it that way
fn version_args(command: &str) -> Option<&'static [&'static str]> {
    let args: &'static [&'static str] = match command {
        "agent-hooks" => &["--version"],
        "biome" => &["--version"],
        "black" => &["--version"],
        "cargo" => &["--version"],
        "direnv" => &["version"],
        "gem" => &["--version"],
        "git" => &["--version"],
        "go" => &["version"],
        "hurl" => &["--version"],
        "java" => &["-version"],
        "javac" => &["-version"],
        "node" => &["--version"],
        "npm" => &["--version"],
        "pip" => &["--version"],
        "python" => &["--version"],
        "ruby" => &["--version"],
        "ruff" => &["--version"],
        "rustc" => &["--version"],
        "rustfmt" => &["--version"],
        "swift" => &["--version"],
        "transcript" => &["--version"],
        _ => return None,
    };
    Some(args)
}

/// best-effort version string, None for tools without a known version flag
pub fn tool_version<E: ToolEnv + ?Sized>(env: &E, command: &str, dir: &Path) -> Option<String> {
    if command == "swift" {
        return current_swift_version(env, dir);
    }

    let args: Vec<String> = version_args(command)?.iter().map(|a| a.to_string()).collect();
    let output = env.run(command, &args, dir).ok()?;
    if !output.success {
        debug!("{command} {args:?} exited unsuccessfully");
        return None;
    }

    // java and friends print their version to stderr
    let text = if output.stdout.trim().is_empty() {
        output.stderr
    } else {
        output.stdout
    };
    let line = first_line(&text)?;

    let version = match command {
        "git" => line.strip_prefix("git version ").unwrap_or(line).to_string(),
        "go" => line
            .split_whitespace()
            .nth(2)
            .filter(|_| line.starts_with("go version "))
            .unwrap_or(line)
            .to_string(),
        _ => line.to_string(),
    };
    Some(version)
}

/// availability checks for tool definitions in a project directory
pub struct ToolChecker<'a, E: ToolEnv + ?Sized> {
    env: &'a E,
    dir: &'a Path,
}

impl<'a, E: ToolEnv + ?Sized> ToolChecker<'a, E> {
    pub fn new(env: &'a E, dir: &'a Path) -> Self {
        Self { env, dir }
    }

    /// classify a tool; `required` comes from the context asking, not the tool
    pub fn check_tool(&self, tool: &ToolDefinition, required: bool, verbose: bool) -> CheckResult {
        let mut result = CheckResult::new(tool.name, CheckStatus::Passed, "");

        if let Some(command) = tool.command {
            if !self.env.is_available(command) {
                result.status = CheckStatus::problem(required);
                result.message = if required {
                    format!("{command} command not found")
                } else {
                    format!("{command} command not found (optional)")
                };
                return result;
            }

            if verbose {
                result.message = match tool_version(self.env, command, self.dir) {
                    Some(version) => format!("{command} is installed ({version})"),
                    None => format!("{command} is installed"),
                };
            }
        }

        if let Some(validator) = &tool.validator {
            if let Err(err) = validator.validate(self.env, self.dir) {
                result.status = CheckStatus::problem(required);
                result.message = format!("{}: {err}", tool.name);
                return result;
            }
        }

        result
    }
}

/// passes when at least one of `tools` resolves
pub fn check_for_one_tool_of<E: ToolEnv + ?Sized>(
    env: &E,
    technology: Technology,
    tools: &[&str],
    group: &str,
    required: bool,
    verbose: bool,
) -> CheckResult {
    let name = format!("{group} ({technology})");
    let available: Vec<&str> = tools
        .iter()
        .copied()
        .filter(|tool| env.is_available(tool))
        .collect();

    if available.is_empty() {
        let need = if required { "required" } else { "optional" };
        return CheckResult::new(
            name,
            CheckStatus::problem(required),
            format!(
                "No {group} tools found ({need} for {technology}). Available options: {}",
                bracketed(tools)
            ),
        );
    }

    let message = if verbose {
        format!("{group} satisfied by: {}", bracketed(&available))
    } else {
        String::new()
    };
    CheckResult::new(name, CheckStatus::Passed, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::CommandOutput;
    use crate::test_support::FakeEnv;
    use tempfile::TempDir;

    fn git() -> ToolDefinition {
        ToolDefinition::command("git", "https://git-scm.com")
    }

    #[test]
    fn missing_required_command_fails() {
        let dir = TempDir::new().unwrap();
        let env = FakeEnv::new();
        let result = ToolChecker::new(&env, dir.path()).check_tool(&git(), true, false);
        assert_eq!(result.status, CheckStatus::Failed);
        assert_eq!(result.message, "git command not found");
    }

    #[test]
    fn missing_optional_command_only_warns() {
        let dir = TempDir::new().unwrap();
        let env = FakeEnv::new();
        let result = ToolChecker::new(&env, dir.path()).check_tool(&git(), false, true);
        assert_eq!(result.status, CheckStatus::Warning);
        assert_eq!(result.message, "git command not found (optional)");
    }

    #[test]
    fn verbose_pass_reports_version() {
        let dir = TempDir::new().unwrap();
        let mut env = FakeEnv::with_tools(&["git"]);
        env.respond("git --version", CommandOutput::success("git version 2.43.0\n"));
        let checker = ToolChecker::new(&env, dir.path());

        let quiet = checker.check_tool(&git(), true, false);
        assert_eq!(quiet.status, CheckStatus::Passed);
        assert!(quiet.message.is_empty());

        let verbose = checker.check_tool(&git(), true, true);
        assert_eq!(verbose.message, "git is installed (2.43.0)");
    }

    #[test]
    fn tools_without_version_flag_still_pass() {
        let dir = TempDir::new().unwrap();
        let env = FakeEnv::with_tools(&["lein"]);
        let tool = ToolDefinition::command("lein", "https://leiningen.org");
        let result = ToolChecker::new(&env, dir.path()).check_tool(&tool, true, true);
        assert_eq!(result.status, CheckStatus::Passed);
        assert_eq!(result.message, "lein is installed");
    }

    #[test]
    fn go_version_is_the_third_field() {
        let dir = TempDir::new().unwrap();
        let mut env = FakeEnv::with_tools(&["go"]);
        env.respond(
            "go version",
            CommandOutput::success("go version go1.22.1 linux/amd64\n"),
        );
        assert_eq!(
            tool_version(&env, "go", dir.path()),
            Some("go1.22.1".to_string())
        );
    }

    #[test]
    fn meta_tool_runs_validator_without_command() {
        let dir = TempDir::new().unwrap();
        let tool = builtin_tools()
            .into_iter()
            .find(|t| t.name == "procfile-runner")
            .unwrap();
        assert!(tool.is_meta());

        let none = FakeEnv::new();
        let result = ToolChecker::new(&none, dir.path()).check_tool(&tool, false, false);
        assert_eq!(result.status, CheckStatus::Warning);
        assert_eq!(
            result.message,
            "procfile-runner: no procfile runner found, install one of: [foreman, hivemind, overmind]"
        );

        let hivemind = FakeEnv::with_tools(&["hivemind"]);
        let result = ToolChecker::new(&hivemind, dir.path()).check_tool(&tool, true, false);
        assert_eq!(result.status, CheckStatus::Passed);
    }

    #[test]
    fn one_of_fails_only_when_nothing_resolves() {
        let env = FakeEnv::with_tools(&["pnpm"]);
        let passed = check_for_one_tool_of(
            &env,
            Technology::NodeJs,
            &["npm", "yarn", "pnpm"],
            "package-manager",
            true,
            true,
        );
        assert_eq!(passed.status, CheckStatus::Passed);
        assert_eq!(passed.name, "package-manager (nodejs)");
        assert_eq!(passed.message, "package-manager satisfied by: [pnpm]");

        let empty = FakeEnv::new();
        let failed = check_for_one_tool_of(
            &empty,
            Technology::NodeJs,
            &["npm", "yarn"],
            "package-manager",
            true,
            false,
        );
        assert_eq!(failed.status, CheckStatus::Failed);
        assert_eq!(
            failed.message,
            "No package-manager tools found (required for nodejs). Available options: [npm, yarn]"
        );

        let optional = check_for_one_tool_of(
            &empty,
            Technology::NodeJs,
            &["npm"],
            "package-manager",
            false,
            false,
        );
        assert_eq!(optional.status, CheckStatus::Warning);
    }
}
