use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

/// captured result of an external command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(stdout: &str) -> Self {
        Self {
            success: true,
            code: Some(0),
            stdout: stdout.to_string(),
            stderr: String::new(),
        }
    }

    pub fn failure(code: i32, stdout: &str, stderr: &str) -> Self {
        Self {
            success: false,
            code: Some(code),
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
        }
    }

    /// stdout followed by stderr
    pub fn combined(&self) -> String {
        let mut combined = self.stdout.clone();
        if !self.stderr.is_empty() {
            if !combined.is_empty() && !combined.ends_with('\n') {
                combined.push('\n');
            }
            combined.push_str(&self.stderr);
        }
        combined
    }
}

/// executable lookup and process spawning
pub trait ToolEnv {
    /// resolve a command on the executable search path
    fn resolve(&self, command: &str) -> Option<PathBuf>;

    fn is_available(&self, command: &str) -> bool {
        self.resolve(command).is_some()
    }

    /// run `program` with `args` in `cwd`, blocking until it exits
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> io::Result<CommandOutput>;
}

/// the real environment of the current process
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEnv;

impl ToolEnv for SystemEnv {
    fn resolve(&self, command: &str) -> Option<PathBuf> {
        match which::which(command) {
            Ok(path) => {
                debug!("{command} resolved to {}", path.display());
                Some(path)
            }
            Err(_) => {
                debug!("{command} not found on PATH");
                None
            }
        }
    }

    fn run(&self, program: &str, args: &[String], cwd: &Path) -> io::Result<CommandOutput> {
        debug!(program, ?args, cwd = %cwd.display(), "running command");
        let output = Command::new(program).args(args).current_dir(cwd).output()?;
        Ok(CommandOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combined_output_joins_streams() {
        let output = CommandOutput::failure(2, "partial", "boom\n");
        assert_eq!(output.combined(), "partial\nboom\n");
        assert_eq!(CommandOutput::success("ok\n").combined(), "ok\n");
    }

    #[test]
    fn missing_executables_do_not_resolve() {
        assert!(!SystemEnv.is_available("agent-hooks-definitely-not-installed"));
    }
}
