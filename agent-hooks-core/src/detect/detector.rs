use std::path::Path;
use std::time::Instant;

use tracing::debug;

use super::evidence::{DetectionEvidence, Method};
use super::rules::DetectionRule;
use super::source::{EvidenceSource, TrackedIndex};
use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::technology::Technology;
use crate::vcs::{self, Vcs};

/// evaluates every detection rule of a catalog against a project directory
///
/// the vcs type and tracked file index are computed on first use and reused
/// for the lifetime of the detector, build a new one per run
pub struct Detector<'a> {
    catalog: &'a Catalog,
    vcs: Option<Vcs>,
    tracked: Option<TrackedIndex>,
}

impl<'a> Detector<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            vcs: None,
            tracked: None,
        }
    }

    /// detected technologies in catalog order
    pub fn detect(&mut self, dir: &Path) -> Result<Vec<Technology>> {
        let evidence = self.detect_with_evidence(dir)?;
        Ok(evidence
            .into_iter()
            .filter(|ev| ev.found)
            .map(|ev| ev.technology)
            .collect())
    }

    /// one evidence entry per rule in catalog order, including misses
    pub fn detect_with_evidence(&mut self, dir: &Path) -> Result<Vec<DetectionEvidence>> {
        let start = Instant::now();
        let vcs = *self.vcs.get_or_insert_with(|| vcs::detect_vcs(dir));
        let vcs_time = start.elapsed();

        let start = Instant::now();
        if vcs == Vcs::Git && self.tracked.is_none() {
            let files = vcs::list_tracked_files(dir)?;
            self.tracked = Some(TrackedIndex::new(files));
        }
        let index_time = start.elapsed();

        let start = Instant::now();
        let evidence = self
            .catalog
            .rules
            .iter()
            .map(|rule| self.check_rule_with_evidence(dir, rule))
            .collect();
        let rules_time = start.elapsed();

        debug!(
            vcs = %vcs,
            ?vcs_time,
            ?index_time,
            ?rules_time,
            "evaluated detection rules"
        );
        Ok(evidence)
    }

    /// evaluate one rule, preferring tracked files and falling back to a directory scan
    pub fn check_rule_with_evidence(&self, dir: &Path, rule: &DetectionRule) -> DetectionEvidence {
        let vcs = self.vcs.unwrap_or_else(|| vcs::detect_vcs(dir));

        if rule.technology == Technology::Git {
            let mut evidence = DetectionEvidence::new(rule.technology, Method::VcsDetection);
            evidence.found = vcs == Vcs::Git;
            if evidence.found {
                evidence.matched_files.push(".git".to_string());
            }
            return evidence;
        }

        if let Some(index) = &self.tracked {
            let evidence = EvidenceSource::Tracked(index).evaluate(rule);
            if evidence.found {
                return evidence;
            }
        }

        EvidenceSource::DirectoryScan(dir).evaluate(rule)
    }
}

/// detect technologies in `dir` with a fresh detector
pub fn detect_in_directory(catalog: &Catalog, dir: &Path) -> Result<Vec<Technology>> {
    Detector::new(catalog).detect(dir)
}

pub fn detect_in_current_directory(catalog: &Catalog) -> Result<Vec<Technology>> {
    let cwd = std::env::current_dir().map_err(Error::CurrentDir)?;
    detect_in_directory(catalog, &cwd)
}
