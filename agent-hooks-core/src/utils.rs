use lazy_static::lazy_static;
use regex::Regex;
use semver::Version;

lazy_static! {
    // "Swift version 5.9.2 (swift-5.9.2-RELEASE)" or "Apple Swift version 5.9.2 (...)"
    static ref SWIFT_VERSION: Regex = Regex::new(r"Swift version (\d+(?:\.\d+)*)").unwrap();

    // "// swift-tools-version:5.9" with optional spaces and trailing settings
    static ref SWIFT_TOOLS_VERSION: Regex =
        Regex::new(r"^//\s*swift-tools-version:\s*(\d+(?:\.\d+)*)").unwrap();
}

/// render a list the way reports show candidate sets: `[a, b, c]`
pub fn bracketed<S: AsRef<str>>(items: &[S]) -> String {
    let joined = items
        .iter()
        .map(|item| item.as_ref())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{joined}]")
}

/// first non-empty line, trimmed
pub fn first_line(text: &str) -> Option<&str> {
    text.lines().map(str::trim).find(|line| !line.is_empty())
}

/// toolchain version out of `swift --version` output
pub fn parse_swift_version(output: &str) -> Option<String> {
    SWIFT_VERSION
        .captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// the `swift-tools-version` declared in the leading comments of a Package.swift
pub fn parse_swift_tools_version(manifest: &str) -> Option<String> {
    for line in manifest.lines() {
        let line = line.trim();
        if let Some(caps) = SWIFT_TOOLS_VERSION.captures(line) {
            return caps.get(1).map(|m| m.as_str().to_string());
        }
        if !line.is_empty() && !line.starts_with("//") {
            break;
        }
    }
    None
}

/// lenient parse of `5`, `5.9` or `5.9.2.1` into a semver version
pub fn parse_loose_version(version: &str) -> Option<Version> {
    let mut parts = version.trim().split('.').map(|part| part.parse::<u64>());
    let major = parts.next()?.ok()?;
    let minor = match parts.next() {
        Some(part) => part.ok()?,
        None => 0,
    };
    let patch = match parts.next() {
        Some(part) => part.ok()?,
        None => 0,
    };
    Some(Version::new(major, minor, patch))
}

/// a toolchain satisfies a requirement with the same major and at least its minor
pub fn is_swift_version_compatible(current: &str, required: &str) -> bool {
    match (parse_loose_version(current), parse_loose_version(required)) {
        (Some(current), Some(required)) => {
            current.major == required.major && current.minor >= required.minor
        }
        _ => false,
    }
}
