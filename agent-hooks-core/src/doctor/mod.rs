// development environment checks: core tools, project requirements, claude integration

pub mod claude;
pub mod project;
pub mod requirements;
pub mod tools;
pub mod validators;

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

pub use claude::{claude_settings_path, run_claude_checks};
pub use project::{check_project_tool, run_project_checks};
pub use requirements::{ToolRequirement, builtin_requirements, requirements_for};
pub use tools::{
    CheckResult, CheckStatus, ToolChecker, ToolDefinition, builtin_core_tools, builtin_tools,
    check_for_one_tool_of, tool_version,
};
pub use validators::Validator;

use crate::catalog::Catalog;
use crate::exec::ToolEnv;

/// core tools, checked as required for every project
pub fn run_tool_checks<E: ToolEnv + ?Sized>(
    catalog: &Catalog,
    env: &E,
    dir: &Path,
    verbose: bool,
) -> Vec<CheckResult> {
    let checker = ToolChecker::new(env, dir);
    catalog
        .core_tools
        .iter()
        .map(|name| match catalog.tool(name) {
            Some(tool) => checker.check_tool(tool, true, verbose),
            None => CheckResult::new(
                *name,
                CheckStatus::Failed,
                format!("Tool definition not found: {name}"),
            ),
        })
        .collect()
}

/// runs every check group and collects the results in order
pub struct Doctor<'a, E: ToolEnv + ?Sized> {
    catalog: &'a Catalog,
    env: &'a E,
    dir: PathBuf,
    verbose: bool,
    claude_settings: Option<PathBuf>,
    check_claude: bool,
}

impl<'a, E: ToolEnv + ?Sized> Doctor<'a, E> {
    pub fn new(catalog: &'a Catalog, env: &'a E, dir: impl Into<PathBuf>) -> Self {
        Self {
            catalog,
            env,
            dir: dir.into(),
            verbose: false,
            claude_settings: claude_settings_path(),
            check_claude: true,
        }
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn claude_settings(mut self, path: impl Into<PathBuf>) -> Self {
        self.claude_settings = Some(path.into());
        self
    }

    pub fn skip_claude_checks(mut self) -> Self {
        self.check_claude = false;
        self
    }

    pub fn run(&self) -> DoctorReport {
        let mut results = run_tool_checks(self.catalog, self.env, &self.dir, self.verbose);
        results.extend(run_project_checks(
            self.catalog,
            self.env,
            &self.dir,
            self.verbose,
        ));
        if self.check_claude {
            results.extend(run_claude_checks(self.claude_settings.as_deref()));
        }

        let report = DoctorReport { results };
        debug!(summary = %report.summary(), "doctor checks finished");
        report
    }
}

/// ordered results of a doctor run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DoctorReport {
    pub results: Vec<CheckResult>,
}

impl DoctorReport {
    pub fn has_problems(&self) -> bool {
        self.results.iter().any(CheckResult::is_problem)
    }

    pub fn summary(&self) -> Summary {
        let mut summary = Summary::default();
        for result in &self.results {
            match result.status {
                CheckStatus::Passed => summary.passed += 1,
                CheckStatus::Warning => summary.warnings += 1,
                CheckStatus::Failed => summary.failed += 1,
            }
        }
        summary
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub passed: usize,
    pub warnings: usize,
    pub failed: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Summary: {} passed", self.passed)?;
        if self.failed > 0 {
            write!(f, ", {} failed", self.failed)?;
        }
        if self.warnings > 0 {
            write!(f, ", {} warnings", self.warnings)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeEnv, write_file};
    use tempfile::TempDir;

    #[test]
    fn core_tools_are_always_required() {
        let dir = TempDir::new().unwrap();
        let catalog = Catalog::builtin();
        let env = FakeEnv::with_tools(&["git"]);

        let results = run_tool_checks(&catalog, &env, dir.path(), false);
        let summary: Vec<(&str, CheckStatus)> = results
            .iter()
            .map(|r| (r.name.as_str(), r.status))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("agent-hooks", CheckStatus::Failed),
                ("git", CheckStatus::Passed),
            ]
        );
    }

    #[test]
    fn report_aggregates_all_groups() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "Gemfile", "source 'https://rubygems.org'\n");
        let catalog = Catalog::builtin();
        let env = FakeEnv::with_tools(&["agent-hooks", "git", "ruby"]);

        let report = Doctor::new(&catalog, &env, dir.path())
            .skip_claude_checks()
            .run();

        let names: Vec<&str> = report.results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["agent-hooks", "git", "Project Detection", "ruby (ruby)", "gem (ruby)"]
        );
        assert!(report.has_problems());
        assert_eq!(
            report.summary(),
            Summary {
                passed: 4,
                warnings: 1,
                failed: 0
            }
        );
        assert_eq!(report.summary().to_string(), "Summary: 4 passed, 1 warnings");
    }

    #[test]
    fn healthy_report_has_no_problems() {
        let dir = TempDir::new().unwrap();
        let settings = write_file(
            dir.path(),
            "claude/settings.json",
            r#"{"hooks":{"PostToolUse":[{"matcher":"Write|Edit|MultiEdit","hooks":[{"type":"command","command":"agent-hooks post-tool-use"}]}]}}"#,
        );
        let project = dir.path().join("project");
        std::fs::create_dir_all(&project).unwrap();
        let catalog = Catalog::builtin();
        let env = FakeEnv::with_tools(&["agent-hooks", "git"]);

        let report = Doctor::new(&catalog, &env, &project)
            .claude_settings(settings)
            .verbose(true)
            .run();
        assert!(!report.has_problems(), "{:?}", report.results);
        assert_eq!(report.summary().to_string(), "Summary: 5 passed");
    }
}
