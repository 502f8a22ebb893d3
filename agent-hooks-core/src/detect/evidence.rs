use std::collections::BTreeMap;
use std::fmt;

use super::source::glob_matches;
use crate::technology::Technology;

const MAX_LISTED_FILES: usize = 3;

/// how a detection outcome was reached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    VcsDetection,
    GitTracked,
    DirectoryScan,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::VcsDetection => "vcs-detection",
            Method::GitTracked => "git-tracked",
            Method::DirectoryScan => "directory-scan",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// the justification behind one rule's outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectionEvidence {
    pub technology: Technology,
    pub found: bool,
    pub matched_files: Vec<String>,
    /// match count per wildcard pattern
    pub pattern_counts: BTreeMap<String, usize>,
    pub method: Method,
}

impl DetectionEvidence {
    pub fn new(technology: Technology, method: Method) -> Self {
        Self {
            technology,
            found: false,
            matched_files: Vec::new(),
            pattern_counts: BTreeMap::new(),
            method,
        }
    }

    /// compact human readable summary of the matched files
    pub fn format_evidence(&self) -> String {
        if !self.found {
            return "not detected".to_string();
        }
        if self.matched_files.is_empty() {
            return "detected".to_string();
        }

        let summarized: Vec<(&str, usize)> = self
            .pattern_counts
            .iter()
            .filter(|(_, count)| **count > MAX_LISTED_FILES)
            .map(|(pattern, count)| (pattern.as_str(), *count))
            .collect();

        let listed: Vec<&str> = self
            .matched_files
            .iter()
            .map(String::as_str)
            .filter(|file| {
                !summarized
                    .iter()
                    .any(|(pattern, _)| glob_matches(pattern, base_of(file)))
            })
            .collect();

        let mut parts = Vec::new();
        if listed.len() > MAX_LISTED_FILES {
            parts.push(format!("{} files", listed.len()));
        } else if !listed.is_empty() {
            parts.push(join_files(&listed));
        }
        for (pattern, count) in summarized {
            parts.push(format!("{pattern:?} ({count} files)"));
        }
        parts.join(", ")
    }
}

fn base_of(path: &str) -> &str {
    super::rules::basename(path)
}

fn join_files(files: &[&str]) -> String {
    files
        .iter()
        .map(|file| format!("{file:?}"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evidence(files: &[&str], counts: &[(&str, usize)]) -> DetectionEvidence {
        let mut ev = DetectionEvidence::new(Technology::Go, Method::DirectoryScan);
        ev.found = true;
        ev.matched_files = files.iter().map(|f| f.to_string()).collect();
        ev.pattern_counts = counts.iter().map(|(p, c)| (p.to_string(), *c)).collect();
        ev
    }

    #[test]
    fn missing_technology_is_not_detected() {
        let ev = DetectionEvidence::new(Technology::Go, Method::DirectoryScan);
        assert_eq!(ev.format_evidence(), "not detected");
    }

    #[test]
    fn found_without_files_is_just_detected() {
        let mut ev = DetectionEvidence::new(Technology::Git, Method::VcsDetection);
        ev.found = true;
        assert_eq!(ev.format_evidence(), "detected");
    }

    #[test]
    fn small_matches_are_listed_verbatim() {
        let ev = evidence(&["go.mod", "main.go"], &[("*.go", 1)]);
        assert_eq!(ev.format_evidence(), r#""go.mod", "main.go""#);
    }

    #[test]
    fn large_wildcard_matches_are_summarized() {
        let ev = evidence(
            &["go.mod", "a.go", "b.go", "cmd/c.go", "cmd/d.go"],
            &[("*.go", 4)],
        );
        assert_eq!(ev.format_evidence(), r#""go.mod", "*.go" (4 files)"#);
    }

    #[test]
    fn many_exact_matches_are_counted() {
        let ev = evidence(&["pom.xml", "a/pom.xml", "b/pom.xml", "c/pom.xml"], &[]);
        assert_eq!(ev.format_evidence(), "4 files");
    }
}
