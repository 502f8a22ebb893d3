pub mod about;
pub mod detect;
pub mod doctor;
pub mod format;
pub mod version;
pub mod which_vcs;

use std::path::PathBuf;

use agent_hooks_core::{Context, Result};

pub(crate) fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().context("failed to get current directory")
}
