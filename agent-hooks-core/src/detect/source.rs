use std::collections::HashSet;
use std::fs;
use std::path::Path;

use globset::{GlobBuilder, GlobMatcher};
use tracing::debug;

use super::evidence::{DetectionEvidence, Method};
use super::rules::{DetectionRule, basename, contains_wildcard};

/// tracked paths plus a lookup set of every path and every basename
#[derive(Debug, Clone, Default)]
pub struct TrackedIndex {
    files: Vec<String>,
    names: HashSet<String>,
}

impl TrackedIndex {
    pub fn new(files: Vec<String>) -> Self {
        let mut names = HashSet::with_capacity(files.len() * 2);
        for file in &files {
            names.insert(basename(file).to_string());
            names.insert(file.clone());
        }
        Self { files, names }
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

/// where file-level evidence for a rule comes from
#[derive(Debug, Clone, Copy)]
pub enum EvidenceSource<'a> {
    Tracked(&'a TrackedIndex),
    DirectoryScan(&'a Path),
}

impl EvidenceSource<'_> {
    pub fn method(&self) -> Method {
        match self {
            EvidenceSource::Tracked(_) => Method::GitTracked,
            EvidenceSource::DirectoryScan(_) => Method::DirectoryScan,
        }
    }

    pub fn evaluate(&self, rule: &DetectionRule) -> DetectionEvidence {
        let mut evidence = DetectionEvidence::new(rule.technology, self.method());
        for pattern in &rule.files {
            let matches = if contains_wildcard(pattern) {
                let matches = self.expand(pattern);
                if !matches.is_empty() {
                    evidence.pattern_counts.insert(pattern.to_string(), matches.len());
                }
                matches
            } else if self.exists(pattern) {
                vec![pattern.to_string()]
            } else {
                Vec::new()
            };

            if !matches.is_empty() {
                evidence.found = true;
                evidence.matched_files.extend(matches);
            }
        }
        evidence
    }

    fn exists(&self, pattern: &str) -> bool {
        match self {
            EvidenceSource::Tracked(index) => index.contains(pattern),
            EvidenceSource::DirectoryScan(dir) => dir.join(pattern).exists(),
        }
    }

    fn expand(&self, pattern: &str) -> Vec<String> {
        match self {
            EvidenceSource::Tracked(index) => {
                let Some(matcher) = compile(pattern) else {
                    return Vec::new();
                };
                // a directory part anchors the pattern to the full relative path
                let anchored = pattern.contains('/');
                index
                    .files()
                    .iter()
                    .filter(|file| {
                        let subject = if anchored { file.as_str() } else { basename(file) };
                        matcher.is_match(subject)
                    })
                    .cloned()
                    .collect()
            }
            EvidenceSource::DirectoryScan(dir) => {
                let Some(matcher) = compile(basename(pattern)) else {
                    return Vec::new();
                };
                scan_directory(dir, pattern, &matcher)
            }
        }
    }
}

/// non-recursive glob expansion of `<dir>/<pattern>`, reported by basename
fn scan_directory(dir: &Path, pattern: &str, matcher: &GlobMatcher) -> Vec<String> {
    let parent = match pattern.rfind('/') {
        Some(idx) => dir.join(&pattern[..idx]),
        None => dir.to_path_buf(),
    };
    let Ok(entries) = fs::read_dir(&parent) else {
        return Vec::new();
    };

    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().to_string())
        .filter(|name| matcher.is_match(name))
        .collect();
    names.sort();
    names
}

fn compile(pattern: &str) -> Option<GlobMatcher> {
    match GlobBuilder::new(pattern).literal_separator(true).build() {
        Ok(glob) => Some(glob.compile_matcher()),
        Err(err) => {
            debug!("ignoring malformed pattern {pattern:?}: {err}");
            None
        }
    }
}

/// case-sensitive glob match of a single filename, malformed patterns never match
pub fn glob_matches(pattern: &str, name: &str) -> bool {
    compile(pattern).is_some_and(|matcher| matcher.is_match(name))
}
