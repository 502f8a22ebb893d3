use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

pub const CONFIG_FILE: &str = ".agenthooks";

/// contents of a `.agenthooks` file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// turns the post-tool-use hook into a no-op
    pub disable: bool,
}

/// nearest `.agenthooks` in `dir` or one of its ancestors
pub fn find_config_file(dir: &Path) -> Option<PathBuf> {
    dir.ancestors()
        .map(|candidate| candidate.join(CONFIG_FILE))
        .find(|path| path.exists())
}

/// load the nearest config, defaults when there is none
pub fn load_config(dir: &Path) -> Result<Config> {
    let Some(path) = find_config_file(dir) else {
        debug!("no {CONFIG_FILE} found from {}", dir.display());
        return Ok(Config::default());
    };

    let data = fs::read_to_string(&path).map_err(|source| Error::ConfigRead {
        path: path.clone(),
        source,
    })?;
    if data.trim().is_empty() {
        return Ok(Config::default());
    }

    let config: Config = serde_yaml::from_str(&data).map_err(|source| Error::ConfigParse {
        path: path.clone(),
        source,
    })?;
    debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::write_file;
    use tempfile::TempDir;

    #[test]
    fn missing_config_means_defaults() {
        let dir = TempDir::new().unwrap();
        assert_eq!(load_config(dir.path()).unwrap(), Config::default());
    }

    #[test]
    fn config_is_found_in_an_ancestor() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), ".agenthooks", "disable: true\n");
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        assert!(load_config(&nested).unwrap().disable);
    }

    #[test]
    fn nearest_config_wins() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), ".agenthooks", "disable: true\n");
        write_file(dir.path(), "sub/.agenthooks", "disable: false\n");

        assert!(!load_config(&dir.path().join("sub")).unwrap().disable);
    }

    #[test]
    fn empty_file_and_unknown_keys_use_defaults() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "empty/.agenthooks", "");
        write_file(dir.path(), "other/.agenthooks", "format: always\n");

        assert!(!load_config(&dir.path().join("empty")).unwrap().disable);
        assert!(!load_config(&dir.path().join("other")).unwrap().disable);
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), ".agenthooks", "disable: [unclosed\n");

        let err = load_config(dir.path()).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
        assert!(err.to_string().starts_with("failed to parse config file"));
    }
}
