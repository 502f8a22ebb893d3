use std::path::Path;

use super::requirements::{ToolRequirement, requirements_for};
use super::tools::{CheckResult, CheckStatus, ToolChecker};
use crate::catalog::Catalog;
use crate::detect::Detector;
use crate::exec::ToolEnv;
use crate::utils::bracketed;
use crate::vcs;

const PROJECT_DETECTION: &str = "Project Detection";

/// detect the project's technologies and check every tool they require
pub fn run_project_checks<E: ToolEnv + ?Sized>(
    catalog: &Catalog,
    env: &E,
    dir: &Path,
    verbose: bool,
) -> Vec<CheckResult> {
    let mut results = Vec::new();

    let project_info = match vcs::find_project_root(dir) {
        Some(root) => format!("project root: {}", root.display()),
        None => format!("current directory: {}", dir.display()),
    };

    let technologies = match Detector::new(catalog).detect(dir) {
        Ok(technologies) => technologies,
        Err(err) => {
            results.push(CheckResult::new(
                PROJECT_DETECTION,
                CheckStatus::Warning,
                format!("Failed to detect technologies: {err}"),
            ));
            return results;
        }
    };

    if technologies.is_empty() {
        results.push(CheckResult::new(
            PROJECT_DETECTION,
            CheckStatus::Passed,
            format!("No specific technologies detected (generic project) - {project_info}"),
        ));
        return results;
    }

    let names: Vec<&str> = technologies.iter().map(|tech| tech.as_str()).collect();
    results.push(CheckResult::new(
        PROJECT_DETECTION,
        CheckStatus::Passed,
        format!("Detected technologies: {} - {project_info}", bracketed(&names)),
    ));

    let checker = ToolChecker::new(env, dir);
    for tech in technologies {
        for req in requirements_for(&catalog.requirements, tech) {
            results.push(check_project_tool(catalog, &checker, req, verbose));
        }
    }

    results
}

/// check a requirement's tool with the requirement's own required flag
pub fn check_project_tool<E: ToolEnv + ?Sized>(
    catalog: &Catalog,
    checker: &ToolChecker<'_, E>,
    req: &ToolRequirement,
    verbose: bool,
) -> CheckResult {
    let name = format!("{} ({})", req.tool, req.technology);
    let Some(tool) = catalog.tool(req.tool) else {
        return CheckResult::new(
            name,
            CheckStatus::Failed,
            format!("Tool definition not found: {}", req.tool),
        );
    };

    let mut result = checker.check_tool(tool, req.required, verbose);
    result.name = name;
    result
}
