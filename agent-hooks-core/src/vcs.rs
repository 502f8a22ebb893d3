use std::fmt;
use std::path::{Path, PathBuf};

use git2::{Repository, Status, StatusEntry, StatusOptions};
use tracing::debug;

use crate::error::{Error, Result};

/// version control system a directory lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vcs {
    Git,
    Unknown,
}

impl Vcs {
    pub fn as_str(self) -> &'static str {
        match self {
            Vcs::Git => "git",
            Vcs::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Vcs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// kind of change reported by the working tree status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeStatus {
    Added,
    Modified,
    Deleted,
    Renamed,
    TypeChange,
    Conflicted,
    Untracked,
}

impl ChangeStatus {
    /// porcelain style status code
    pub fn code(self) -> &'static str {
        match self {
            ChangeStatus::Added => "A",
            ChangeStatus::Modified => "M",
            ChangeStatus::Deleted => "D",
            ChangeStatus::Renamed => "R",
            ChangeStatus::TypeChange => "T",
            ChangeStatus::Conflicted => "U",
            ChangeStatus::Untracked => "??",
        }
    }

    fn from_git(status: Status) -> Option<Self> {
        if status.is_ignored() || status.is_empty() {
            return None;
        }
        let change = if status.is_conflicted() {
            ChangeStatus::Conflicted
        } else if status.is_index_deleted() || status.is_wt_deleted() {
            ChangeStatus::Deleted
        } else if status.is_index_renamed() || status.is_wt_renamed() {
            ChangeStatus::Renamed
        } else if status.is_index_new() {
            ChangeStatus::Added
        } else if status.is_index_typechange() || status.is_wt_typechange() {
            ChangeStatus::TypeChange
        } else if status.is_index_modified() || status.is_wt_modified() {
            ChangeStatus::Modified
        } else if status.is_wt_new() {
            ChangeStatus::Untracked
        } else {
            return None;
        };
        Some(change)
    }
}

/// a changed path relative to the repository root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStatus {
    pub path: String,
    pub status: ChangeStatus,
}

impl FileStatus {
    pub fn is_deleted(&self) -> bool {
        self.status == ChangeStatus::Deleted
    }
}

/// walk `dir` and its ancestors looking for a `.git` directory or file
pub fn find_project_root(dir: &Path) -> Option<PathBuf> {
    dir.ancestors()
        .find(|candidate| {
            std::fs::metadata(candidate.join(".git"))
                .map(|meta| meta.is_dir() || meta.is_file())
                .unwrap_or(false)
        })
        .map(Path::to_path_buf)
}

pub fn detect_vcs(dir: &Path) -> Vcs {
    if find_project_root(dir).is_some() {
        Vcs::Git
    } else {
        Vcs::Unknown
    }
}

pub fn is_under_version_control(dir: &Path) -> bool {
    detect_vcs(dir) == Vcs::Git
}

/// list every tracked path below `dir`, relative to `dir`, in index order
pub fn list_tracked_files(dir: &Path) -> Result<Vec<String>> {
    let repo = open(dir)?;
    let workdir = workdir(&repo)?;
    let prefix = relative_prefix(&workdir, dir);
    let index = repo.index().map_err(Error::TrackedFiles)?;

    let mut files: Vec<String> = Vec::with_capacity(index.len());
    for entry in index.iter() {
        let path = String::from_utf8_lossy(&entry.path);
        let relative = if prefix.is_empty() {
            path.as_ref()
        } else {
            match path.strip_prefix(prefix.as_str()).and_then(|rest| rest.strip_prefix('/')) {
                Some(rest) => rest,
                None => continue,
            }
        };
        // conflicted entries appear once per stage
        if files.last().map(String::as_str) == Some(relative) {
            continue;
        }
        files.push(relative.to_string());
    }

    debug!(count = files.len(), prefix = %prefix, "listed tracked files");
    Ok(files)
}

/// changed and untracked paths of the working tree, relative to the repository root
pub fn working_tree_changes(dir: &Path) -> Result<Vec<FileStatus>> {
    let repo = open(dir)?;

    let mut opts = StatusOptions::new();
    opts.include_untracked(true)
        .recurse_untracked_dirs(true)
        .include_ignored(false)
        .renames_head_to_index(true);

    let statuses = repo.statuses(Some(&mut opts)).map_err(Error::Status)?;
    let mut changes = Vec::new();
    for entry in statuses.iter() {
        let Some(status) = ChangeStatus::from_git(entry.status()) else {
            continue;
        };
        let Some(path) = entry_path(&entry, status) else {
            continue;
        };
        changes.push(FileStatus { path, status });
    }
    Ok(changes)
}

fn entry_path(entry: &StatusEntry<'_>, status: ChangeStatus) -> Option<String> {
    if status == ChangeStatus::Renamed {
        let renamed = entry
            .head_to_index()
            .or_else(|| entry.index_to_workdir())
            .and_then(|delta| delta.new_file().path().map(|p| p.to_string_lossy().to_string()));
        if renamed.is_some() {
            return renamed;
        }
    }
    entry.path().map(str::to_string)
}

fn open(dir: &Path) -> Result<Repository> {
    if find_project_root(dir).is_none() {
        return Err(Error::NotARepository);
    }
    Repository::discover(dir).map_err(Error::OpenRepository)
}

fn workdir(repo: &Repository) -> Result<PathBuf> {
    repo.workdir()
        .map(Path::to_path_buf)
        .ok_or_else(|| Error::BareRepository(repo.path().to_path_buf()))
}

/// posix style path of `dir` relative to `root`, empty when they are the same
fn relative_prefix(root: &Path, dir: &Path) -> String {
    let root = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
    let dir = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
    match dir.strip_prefix(&root) {
        Ok(rest) => rest
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/"),
        Err(_) => String::new(),
    }
}
