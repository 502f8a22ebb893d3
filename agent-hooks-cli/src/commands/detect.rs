use agent_hooks_core::{Catalog, Context, Detector, Result, style};

use super::current_dir;

pub fn run(verbose: bool) -> Result<()> {
    let catalog = Catalog::builtin();
    let cwd = current_dir()?;
    let mut detector = Detector::new(&catalog);

    if verbose {
        let evidence = detector
            .detect_with_evidence(&cwd)
            .context("failed to detect technologies")?;

        println!("Checking detection rules in {}:", cwd.display());
        for ev in evidence {
            if ev.found {
                println!(
                    "{} {}: {}",
                    style("✓").green(),
                    ev.technology,
                    ev.format_evidence()
                );
            } else {
                println!("{} {}: not detected", style("✗").dim(), ev.technology);
            }
        }
        return Ok(());
    }

    let technologies = detector
        .detect(&cwd)
        .context("failed to detect technologies")?;
    for tech in technologies {
        println!("{tech}");
    }

    Ok(())
}
