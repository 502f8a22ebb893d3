use std::path::Path;

use agent_hooks_core::{
    Catalog, Context, FormatOptions, Result, SystemEnv, Vcs, changed_files, detect_vcs,
    find_project_root, format_in_directory, list_tracked_files, load_config,
};
use anyhow::{anyhow, bail};
use tracing::debug;

use super::current_dir;
use crate::cli::FormatArgs;

pub fn run(args: &FormatArgs) -> Result<()> {
    if args.all_files && !args.files.is_empty() {
        bail!("cannot use --all-files with specific file arguments");
    }

    let cwd = current_dir()?;
    let vcs = detect_vcs(&cwd);
    if vcs != Vcs::Git {
        bail!("formatting is only supported in Git repositories, detected: {vcs}");
    }
    let root = find_project_root(&cwd).context("failed to find project root")?;

    let files = if !args.files.is_empty() {
        args.files.clone()
    } else if args.all_files {
        list_tracked_files(&root).context("failed to get tracked files")?
    } else {
        changed_files(&cwd).context("failed to get changed files")?
    };

    if files.is_empty() {
        if args.verbose {
            println!("No files to format");
        }
        return Ok(());
    }

    let files = resolve_paths(&root, files);
    debug!(count = files.len(), root = %root.display(), "formatting files");

    let options = FormatOptions {
        dry_run: args.dry_run,
        verbose: args.verbose,
    };
    let result = format_in_directory(&Catalog::builtin(), &SystemEnv, &cwd, &files, options);

    if args.verbose {
        let action = if args.dry_run { "Would format" } else { "Formatted" };
        for file in &result.formatted_files {
            println!("{action}: {file}");
        }
        for file in &result.skipped_files {
            println!("Skipped: {file} (no formatter available)");
        }
    } else if args.dry_run {
        for file in &result.formatted_files {
            println!("Would format: {file}");
        }
    }

    for warning in &result.warnings {
        eprintln!("Warning: {warning}");
    }

    if result.has_errors() {
        // the first failure decides the exit status
        return Err(anyhow!(result.errors[0].clone()));
    }
    Ok(())
}

/// the hook entry point: `format`, unless `.agenthooks` disables it
pub fn run_post_tool_use(args: &FormatArgs) -> Result<()> {
    let cwd = current_dir()?;
    let config = load_config(&cwd).context("failed to load configuration")?;
    if config.disable {
        debug!("hooks disabled by configuration");
        return Ok(());
    }
    run(args)
}

/// relative paths are taken from the project root
fn resolve_paths(root: &Path, files: Vec<String>) -> Vec<String> {
    files
        .into_iter()
        .map(|file| {
            if Path::new(&file).is_absolute() {
                file
            } else {
                root.join(&file).to_string_lossy().into_owned()
            }
        })
        .collect()
}
