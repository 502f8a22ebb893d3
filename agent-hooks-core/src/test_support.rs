//! shared fixtures for unit tests

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use git2::{Repository, Signature};

use crate::exec::{CommandOutput, ToolEnv};

pub fn init_repo(dir: &Path) -> Repository {
    Repository::init(dir).unwrap()
}

pub fn write_file(dir: &Path, relative: &str, content: &str) -> PathBuf {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

/// stage paths (relative to the repository root) in the index
pub fn track(repo: &Repository, paths: &[&str]) {
    let mut index = repo.index().unwrap();
    for path in paths {
        index.add_path(Path::new(path)).unwrap();
    }
    index.write().unwrap();
}

pub fn commit_all(repo: &Repository) {
    let mut index = repo.index().unwrap();
    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let sig = Signature::now("test", "test@example.com").unwrap();
    let parents = match repo.head() {
        Ok(head) => vec![head.peel_to_commit().unwrap()],
        Err(_) => Vec::new(),
    };
    let parent_refs: Vec<&git2::Commit<'_>> = parents.iter().collect();
    repo.commit(Some("HEAD"), &sig, &sig, "test commit", &tree, &parent_refs)
        .unwrap();
}

/// a recorded command invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

/// deterministic stand-in for the executable search path and process spawning
#[derive(Default)]
pub struct FakeEnv {
    available: HashSet<String>,
    outputs: HashMap<String, CommandOutput>,
    failing: HashSet<String>,
    spawn_errors: HashSet<String>,
    invocations: RefCell<Vec<Invocation>>,
}

impl FakeEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tools(tools: &[&str]) -> Self {
        let mut env = Self::new();
        for tool in tools {
            env.install(tool);
        }
        env
    }

    pub fn install(&mut self, tool: &str) {
        self.available.insert(tool.to_string());
    }

    /// canned output for `program` joined with its args by spaces
    pub fn respond(&mut self, command_line: &str, output: CommandOutput) {
        self.outputs.insert(command_line.to_string(), output);
    }

    /// every invocation of `program` exits non-zero
    pub fn fail(&mut self, program: &str) {
        self.failing.insert(program.to_string());
    }

    /// this exact command line cannot be started even though the program resolves
    pub fn spawn_error(&mut self, command_line: &str) {
        self.spawn_errors.insert(command_line.to_string());
    }

    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.borrow().clone()
    }
}

impl ToolEnv for FakeEnv {
    fn resolve(&self, command: &str) -> Option<PathBuf> {
        self.available
            .contains(command)
            .then(|| PathBuf::from("/usr/bin").join(command))
    }

    fn run(&self, program: &str, args: &[String], _cwd: &Path) -> io::Result<CommandOutput> {
        self.invocations.borrow_mut().push(Invocation {
            program: program.to_string(),
            args: args.to_vec(),
        });
        if !self.available.contains(program) {
            return Err(io::Error::new(io::ErrorKind::NotFound, format!("{program} not found")));
        }

        let command_line = std::iter::once(program.to_string())
            .chain(args.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ");
        if self.spawn_errors.contains(&command_line) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("{program}: permission denied"),
            ));
        }
        if let Some(output) = self.outputs.get(&command_line) {
            return Ok(output.clone());
        }
        if self.failing.contains(program) {
            return Ok(CommandOutput::failure(1, "", &format!("{program}: failed")));
        }
        Ok(CommandOutput::success(""))
    }
}
