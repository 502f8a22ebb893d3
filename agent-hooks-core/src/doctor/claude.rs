use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::tools::{CheckResult, CheckStatus};

const SETTINGS_CHECK: &str = "Claude settings file";
const HOOK_CHECK: &str = "Claude hook configuration";

#[derive(Debug, Default, Deserialize)]
struct ClaudeSettings {
    #[serde(default)]
    hooks: ClaudeHooks,
}

#[derive(Debug, Default, Deserialize)]
struct ClaudeHooks {
    #[serde(rename = "PostToolUse", default)]
    post_tool_use: Vec<ClaudeHook>,
}

#[derive(Debug, Deserialize)]
struct ClaudeHook {
    #[serde(default)]
    matcher: String,
    #[serde(default)]
    hooks: Vec<HookConfig>,
}

#[derive(Debug, Deserialize)]
struct HookConfig {
    #[serde(default)]
    command: String,
}

/// `~/.claude/settings.json`, None when there is no home directory
pub fn claude_settings_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".claude").join("settings.json"))
}

/// check the settings file and that agent-hooks is registered as a PostToolUse hook
pub fn run_claude_checks(settings_path: Option<&Path>) -> Vec<CheckResult> {
    let Some(path) = settings_path else {
        return vec![CheckResult::new(
            SETTINGS_CHECK,
            CheckStatus::Failed,
            "Cannot locate home directory for Claude settings",
        )];
    };

    let settings = match load_settings(path) {
        Ok(settings) => settings,
        Err(result) => return vec![result],
    };

    vec![
        CheckResult::new(
            SETTINGS_CHECK,
            CheckStatus::Passed,
            format!("Claude settings file found at {}", path.display()),
        ),
        check_hook_configuration(&settings),
    ]
}

fn load_settings(path: &Path) -> Result<ClaudeSettings, CheckResult> {
    let failed = |message: String| CheckResult::new(SETTINGS_CHECK, CheckStatus::Failed, message);

    if !path.exists() {
        return Err(failed(format!(
            "Claude settings file missing at {}",
            path.display()
        )));
    }
    let data = fs::read_to_string(path)
        .map_err(|err| failed(format!("Cannot read Claude settings file: {err}")))?;
    serde_json::from_str(&data)
        .map_err(|err| failed(format!("Invalid JSON in Claude settings file: {err}")))
}

fn check_hook_configuration(settings: &ClaudeSettings) -> CheckResult {
    let hook = settings.hooks.post_tool_use.iter().find(|hook| {
        hook.hooks
            .iter()
            .any(|config| is_agent_hooks_command(&config.command))
    });

    let Some(hook) = hook else {
        return CheckResult::new(
            HOOK_CHECK,
            CheckStatus::Warning,
            "agent-hooks not configured in Claude hooks",
        );
    };

    let matcher = &hook.matcher;
    if !(matcher.contains("Write") && matcher.contains("Edit") && matcher.contains("MultiEdit")) {
        return CheckResult::new(
            HOOK_CHECK,
            CheckStatus::Warning,
            "agent-hooks hook matcher should include 'Write|Edit|MultiEdit'",
        );
    }

    CheckResult::new(
        HOOK_CHECK,
        CheckStatus::Passed,
        "agent-hooks properly configured in Claude PostToolUse hooks",
    )
}

fn is_agent_hooks_command(command: &str) -> bool {
    command.contains("agent-hooks format") || command.contains("agent-hooks post-tool-use")
}
