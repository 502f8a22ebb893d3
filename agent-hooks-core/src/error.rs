use std::io;
use std::path::PathBuf;

/// environment errors that abort a whole operation
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to get current directory: {0}")]
    CurrentDir(#[source] io::Error),

    #[error("not in a git repository")]
    NotARepository,

    #[error("failed to open git repository: {0}")]
    OpenRepository(#[source] git2::Error),

    #[error("git repository at {0} has no working directory")]
    BareRepository(PathBuf),

    #[error("failed to get tracked files: {0}")]
    TrackedFiles(#[source] git2::Error),

    #[error("failed to get git status: {0}")]
    Status(#[source] git2::Error),

    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
