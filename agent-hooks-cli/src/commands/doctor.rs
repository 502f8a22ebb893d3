use std::time::Duration;

use agent_hooks_core::{
    Catalog, CheckStatus, Doctor, ProgressBar, ProgressStyle, Result, SystemEnv, style,
};
use anyhow::bail;

use super::current_dir;

pub fn run(verbose: bool) -> Result<()> {
    let catalog = Catalog::builtin();
    let env = SystemEnv;
    let cwd = current_dir()?;

    // spinner draws on stderr and hides itself when stderr is not a terminal
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner} checking environment...")?,
    );
    spinner.enable_steady_tick(Duration::from_millis(120));

    let report = Doctor::new(&catalog, &env, &cwd).verbose(verbose).run();

    spinner.finish_and_clear();

    for result in &report.results {
        match result.status {
            CheckStatus::Passed => {
                if verbose {
                    println!("{} {result}", style("✓").green());
                }
            }
            CheckStatus::Warning => {
                eprintln!("{} {}", style("Warning:").yellow().bold(), result.message);
            }
            CheckStatus::Failed => {
                eprintln!("{} {}", style("Error:").red().bold(), result.message);
            }
        }
    }

    if verbose && !report.results.is_empty() {
        println!("\n{}", report.summary());
    }

    if report.has_problems() {
        bail!("found issues in environment setup");
    }
    Ok(())
}
