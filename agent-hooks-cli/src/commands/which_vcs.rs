use agent_hooks_core::{Result, detect_vcs, is_under_version_control};
use anyhow::bail;

use super::current_dir;

pub fn run() -> Result<()> {
    let cwd = current_dir()?;
    if !is_under_version_control(&cwd) {
        bail!("unsupported or unknown version control system");
    }
    println!("{}", detect_vcs(&cwd));
    Ok(())
}
