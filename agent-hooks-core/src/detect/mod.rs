// technology detection from tracked files or a directory scan

pub mod detector;
pub mod evidence;
pub mod rules;
pub mod source;

pub use detector::{Detector, detect_in_current_directory, detect_in_directory};
pub use evidence::{DetectionEvidence, Method};
pub use rules::{DetectionRule, builtin_rules, contains_wildcard};
pub use source::{EvidenceSource, TrackedIndex, glob_matches};
