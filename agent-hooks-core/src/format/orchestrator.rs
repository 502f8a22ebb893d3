use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::formatters::{Formatter, FormattingToolSupport};
use crate::catalog::Catalog;
use crate::detect::Detector;
use crate::exec::{CommandOutput, ToolEnv};
use crate::technology::Technology;
use crate::utils::bracketed;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// report what would be formatted without running any formatter
    pub dry_run: bool,
    pub verbose: bool,
}

/// outcome of one formatting run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatResult {
    pub formatted_files: Vec<String>,
    pub skipped_files: Vec<String>,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl FormatResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// picks a formatter per extension group and runs it over the group's files
pub struct FormatOrchestrator<'a, E: ToolEnv + ?Sized> {
    catalog: &'a Catalog,
    env: &'a E,
    dir: PathBuf,
    detected: Vec<Technology>,
}

impl<'a, E: ToolEnv + ?Sized> FormatOrchestrator<'a, E> {
    /// `detected` drives configuration-aware selection; formatters run in `dir`
    pub fn new(
        catalog: &'a Catalog,
        env: &'a E,
        dir: impl Into<PathBuf>,
        detected: Vec<Technology>,
    ) -> Self {
        Self {
            catalog,
            env,
            dir: dir.into(),
            detected,
        }
    }

    pub fn format_files(&self, files: &[String], options: Options) -> FormatResult {
        let mut result = FormatResult::default();

        for support in &self.catalog.formatting {
            let matching: Vec<&String> = files.iter().filter(|f| support.handles(f)).collect();
            if matching.is_empty() {
                continue;
            }

            if let Err(err) = self.format_group(support, &matching, options, &mut result) {
                result.errors.push(format!(
                    "Formatting failed for {}: {err}",
                    bracketed(&support.extensions)
                ));
            }
        }

        for file in self.unsupported_files(files) {
            if options.verbose {
                result
                    .warnings
                    .push(format!("No formatter available for: {file}"));
            } else {
                result.skipped_files.push(file.clone());
            }
        }

        result
    }

    /// candidates in effective preference order: a lone configured tool moves to the front
    pub fn candidates(&self, support: &FormattingToolSupport) -> Vec<&'a Formatter> {
        let mut candidates: Vec<&'a Formatter> = support
            .tools
            .iter()
            .filter_map(|tool| {
                let formatter = self.catalog.formatter(tool);
                if formatter.is_none() {
                    warn!("no formatter defined for {tool}");
                }
                formatter
            })
            .collect();

        let configured: Vec<usize> = candidates
            .iter()
            .enumerate()
            .filter(|(_, f)| f.is_configured(&self.detected))
            .map(|(i, _)| i)
            .collect();
        if let [index] = configured[..] {
            let preferred = candidates.remove(index);
            candidates.insert(0, preferred);
        }

        candidates
    }

    fn select(&self, support: &FormattingToolSupport) -> Option<&'a Formatter> {
        self.candidates(support).into_iter().find(|formatter| {
            let usable = formatter.is_eligible(&self.detected)
                && self.env.is_available(formatter.executable);
            debug!(tool = formatter.tool, usable, "formatter candidate");
            usable
        })
    }

    fn format_group(
        &self,
        support: &FormattingToolSupport,
        files: &[&String],
        options: Options,
        result: &mut FormatResult,
    ) -> Result<(), String> {
        let Some(formatter) = self.select(support) else {
            return Err(format!(
                "no formatter available for extensions {} - available tools: {}",
                bracketed(&support.extensions),
                bracketed(&support.tools)
            ));
        };

        for file in files {
            if options.dry_run {
                result.formatted_files.push(file.to_string());
                continue;
            }

            let args = formatter.command_args(file);
            match self.env.run(formatter.executable, &args, &self.dir) {
                Ok(output) if output.success => result.formatted_files.push(file.to_string()),
                Ok(output) => {
                    return Err(format_failure(
                        file,
                        formatter.tool,
                        &exit_cause(&output),
                        &output.combined(),
                    ));
                }
                Err(err) => {
                    return Err(format_failure(file, formatter.tool, &err.to_string(), ""));
                }
            }
        }

        Ok(())
    }

    /// existing regular files with an extension no group handles
    fn unsupported_files<'f>(&self, files: &'f [String]) -> Vec<&'f String> {
        files
            .iter()
            .filter(|file| {
                has_extension(file)
                    && !self.catalog.formatting.iter().any(|s| s.handles(file))
                    && self.dir.join(file.as_str()).is_file()
            })
            .collect()
    }
}

/// any dot in the file name counts, so `.gitignore` has the extension `.gitignore`
fn has_extension(file: &str) -> bool {
    Path::new(file)
        .file_name()
        .is_some_and(|name| name.to_string_lossy().contains('.'))
}

fn exit_cause(output: &CommandOutput) -> String {
    match output.code {
        Some(code) => format!("exit status {code}"),
        None => "terminated by signal".to_string(),
    }
}

fn format_failure(file: &str, tool: &str, cause: &str, output: &str) -> String {
    format!("failed to format {file} with {tool}: {cause}\nOutput: {output}")
}

/// detect the project's technologies, then format `files` with the builtin selection rules
pub fn format_in_directory<E: ToolEnv + ?Sized>(
    catalog: &Catalog,
    env: &E,
    dir: &Path,
    files: &[String],
    options: Options,
) -> FormatResult {
    let detected = match Detector::new(catalog).detect(dir) {
        Ok(detected) => detected,
        Err(err) => {
            return FormatResult {
                errors: vec![format!("Failed to detect technologies: {err}")],
                ..FormatResult::default()
            };
        }
    };

    FormatOrchestrator::new(catalog, env, dir, detected).format_files(files, options)
}
