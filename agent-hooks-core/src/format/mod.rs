// formatter selection and execution for changed or explicitly named files

pub mod formatters;
pub mod orchestrator;

use std::path::Path;

pub use formatters::{
    Formatter, FormattingToolSupport, builtin_formatters, builtin_formatting_support,
};
pub use orchestrator::{FormatOrchestrator, FormatResult, Options, format_in_directory};

use crate::error::Result;
use crate::vcs;

/// working-tree changes worth formatting, relative to the repository root
///
/// deleted entries are dropped since there is nothing left to format
pub fn changed_files(dir: &Path) -> Result<Vec<String>> {
    let changes = vcs::working_tree_changes(dir)?;
    Ok(changes
        .into_iter()
        .filter(|change| !change.is_deleted())
        .map(|change| change.path)
        .collect())
}
