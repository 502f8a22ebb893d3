// agent-hooks-core/src/lib.rs

// declare modules
pub mod catalog;
pub mod config;
pub mod detect;
pub mod doctor;
pub mod error;
pub mod exec;
pub mod format;
pub mod technology;
pub mod utils;
pub mod vcs;

#[cfg(test)]
mod test_support;

// re-export key structs/functions for external use by the cli crate
pub use anyhow::{Context, Result}; // re-export for convenience
pub use console::style; // re-export for the cli, which does all the printing
pub use indicatif::{ProgressBar, ProgressStyle};

pub use crate::catalog::{Catalog, CatalogError};
pub use crate::config::{Config, load_config};
pub use crate::detect::{DetectionEvidence, Detector, Method, detect_in_current_directory, detect_in_directory};
pub use crate::doctor::{CheckResult, CheckStatus, Doctor, DoctorReport, Summary};
pub use crate::error::Error;
pub use crate::exec::{CommandOutput, SystemEnv, ToolEnv};
pub use crate::format::{FormatOrchestrator, FormatResult, Options as FormatOptions, changed_files, format_in_directory};
pub use crate::technology::Technology;
pub use crate::vcs::{
    Vcs, detect_vcs, find_project_root, is_under_version_control, list_tracked_files,
};
