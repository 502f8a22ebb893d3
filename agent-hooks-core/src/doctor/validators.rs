use std::fs;
use std::path::Path;

use anyhow::{Result, bail};
use tracing::debug;

use super::tools::{CheckStatus, check_for_one_tool_of};
use crate::exec::ToolEnv;
use crate::technology::Technology;
use crate::utils::{
    bracketed, is_swift_version_compatible, parse_swift_tools_version, parse_swift_version,
};

/// structural checks a tool can carry besides being on PATH
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validator {
    /// direnv must be hooked into the shell and the project's .envrc allowed
    ShellIntegration,
    /// satisfied when any one of several alternative executables is present
    OneOf {
        group: &'static str,
        technology: Technology,
        candidates: Vec<&'static str>,
    },
    /// the swift toolchain must satisfy the swift-tools-version of Package.swift
    VersionCompatibility,
}

impl Validator {
    pub fn validate<E: ToolEnv + ?Sized>(&self, env: &E, dir: &Path) -> Result<()> {
        match self {
            Validator::ShellIntegration => validate_direnv_setup(env, dir),
            Validator::OneOf {
                group,
                technology,
                candidates,
            } => {
                let result = check_for_one_tool_of(env, *technology, candidates, group, false, false);
                if result.status == CheckStatus::Passed {
                    return Ok(());
                }
                bail!(
                    "no {} found, install one of: {}",
                    group.replace('-', " "),
                    bracketed(candidates)
                )
            }
            Validator::VersionCompatibility => validate_swift_toolchain_version(env, dir),
        }
    }
}

fn validate_direnv_setup<E: ToolEnv + ?Sized>(env: &E, dir: &Path) -> Result<()> {
    if !dir.join(".envrc").exists() {
        return Ok(());
    }

    let output = match env.run("direnv", &["status".to_string()], dir) {
        Ok(output) if output.success => output,
        _ => bail!("direnv status failed - shell integration may not be setup"),
    };

    // direnv < 2.33 prints "allowed false", newer releases print 1 (not allowed) or 2 (denied)
    let status = output.stdout;
    if status.contains("Found RC allowed false")
        || status.contains("Found RC allowed 1")
        || status.contains("Found RC allowed 2")
    {
        bail!(".envrc file found but not allowed - run 'direnv allow' to trust it");
    }
    Ok(())
}

fn validate_swift_toolchain_version<E: ToolEnv + ?Sized>(env: &E, dir: &Path) -> Result<()> {
    let manifest_path = dir.join("Package.swift");
    if !manifest_path.exists() {
        return Ok(());
    }

    let manifest = match fs::read_to_string(&manifest_path) {
        Ok(manifest) => manifest,
        Err(err) => bail!("failed to read Package.swift: {err}"),
    };

    let Some(required) = parse_swift_tools_version(&manifest) else {
        debug!("Package.swift declares no swift-tools-version");
        return Ok(());
    };

    let Some(current) = current_swift_version(env, dir) else {
        bail!("failed to get current Swift toolchain version");
    };

    if !is_swift_version_compatible(&current, &required) {
        bail!(
            "Swift toolchain version mismatch: Package.swift requires {required}, but current toolchain is {current}"
        );
    }
    Ok(())
}

pub(crate) fn current_swift_version<E: ToolEnv + ?Sized>(env: &E, dir: &Path) -> Option<String> {
    let output = env.run("swift", &["--version".to_string()], dir).ok()?;
    if !output.success {
        return None;
    }
    parse_swift_version(&output.combined())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::CommandOutput;
    use crate::test_support::{FakeEnv, write_file};
    use tempfile::TempDir;

    fn procfile_runner() -> Validator {
        Validator::OneOf {
            group: "procfile-runner",
            technology: Technology::Procfile,
            candidates: vec!["foreman", "hivemind", "overmind"],
        }
    }

    #[test]
    fn one_of_passes_with_any_candidate() {
        let dir = TempDir::new().unwrap();
        let env = FakeEnv::with_tools(&["overmind"]);
        assert!(procfile_runner().validate(&env, dir.path()).is_ok());
    }

    #[test]
    fn one_of_fails_listing_candidates() {
        let dir = TempDir::new().unwrap();
        let err = procfile_runner().validate(&FakeEnv::new(), dir.path()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "no procfile runner found, install one of: [foreman, hivemind, overmind]"
        );
    }

    #[test]
    fn direnv_is_only_checked_when_envrc_exists() {
        let dir = TempDir::new().unwrap();
        let env = FakeEnv::new();
        assert!(Validator::ShellIntegration.validate(&env, dir.path()).is_ok());
        assert!(env.invocations().is_empty());
    }

    #[test]
    fn direnv_reports_disallowed_envrc() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), ".envrc", "use flake\n");
        let mut env = FakeEnv::with_tools(&["direnv"]);
        env.respond(
            "direnv status",
            CommandOutput::success("Found RC path /p/.envrc\nFound RC allowed false\n"),
        );

        let err = Validator::ShellIntegration.validate(&env, dir.path()).unwrap_err();
        assert!(err.to_string().contains("direnv allow"));
    }

    #[test]
    fn direnv_status_failure_means_missing_shell_integration() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), ".envrc", "use flake\n");
        let mut env = FakeEnv::with_tools(&["direnv"]);
        env.fail("direnv");

        let err = Validator::ShellIntegration.validate(&env, dir.path()).unwrap_err();
        assert!(err.to_string().contains("shell integration"));
    }

    #[test]
    fn swift_toolchain_must_satisfy_tools_version() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "Package.swift", "// swift-tools-version:5.9\n");
        let mut env = FakeEnv::with_tools(&["swift"]);
        env.respond(
            "swift --version",
            CommandOutput::success("Swift version 5.8.1 (swift-5.8.1-RELEASE)\n"),
        );

        let err = Validator::VersionCompatibility
            .validate(&env, dir.path())
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Swift toolchain version mismatch: Package.swift requires 5.9, but current toolchain is 5.8.1"
        );
    }

    #[test]
    fn swift_projects_without_tools_version_pass() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "Package.swift", "import PackageDescription\n");
        assert!(Validator::VersionCompatibility
            .validate(&FakeEnv::new(), dir.path())
            .is_ok());
    }
}
