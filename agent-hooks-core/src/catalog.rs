use std::collections::HashSet;

use crate::detect::{DetectionRule, builtin_rules, contains_wildcard};
use crate::doctor::{
    ToolDefinition, ToolRequirement, builtin_core_tools, builtin_requirements, builtin_tools,
};
use crate::format::{
    Formatter, FormattingToolSupport, builtin_formatters, builtin_formatting_support,
};
use crate::technology::Technology;

/// inconsistencies between the lookup tables
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate detection rule for {0}")]
    DuplicateRule(Technology),

    #[error("duplicate pattern {pattern:?} in the {technology} rule")]
    DuplicatePattern {
        technology: Technology,
        pattern: &'static str,
    },

    #[error(
        "invalid pattern {pattern:?} in the {technology} rule: \
         at most one '*' at the start or end of the file name"
    )]
    InvalidPattern {
        technology: Technology,
        pattern: &'static str,
    },

    #[error("duplicate tool definition: {0}")]
    DuplicateTool(&'static str),

    #[error("duplicate requirement of {tool} for {technology}")]
    DuplicateRequirement {
        technology: Technology,
        tool: &'static str,
    },

    #[error("{referrer} refers to unknown tool {tool}")]
    UnknownTool { referrer: String, tool: &'static str },

    #[error("extension {0} appears in more than one formatting group")]
    DuplicateExtension(&'static str),

    #[error("no formatter defined for tool {0}")]
    MissingFormatter(&'static str),
}

/// every lookup table, built once and passed explicitly to the components reading them
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub rules: Vec<DetectionRule>,
    pub tools: Vec<ToolDefinition>,
    pub requirements: Vec<ToolRequirement>,
    pub formatting: Vec<FormattingToolSupport>,
    pub formatters: Vec<Formatter>,
    /// tools checked as required for every project
    pub core_tools: Vec<&'static str>,
}

impl Catalog {
    /// validated tables
    pub fn new(
        rules: Vec<DetectionRule>,
        tools: Vec<ToolDefinition>,
        requirements: Vec<ToolRequirement>,
        formatting: Vec<FormattingToolSupport>,
        formatters: Vec<Formatter>,
        core_tools: Vec<&'static str>,
    ) -> Result<Self, CatalogError> {
        let catalog = Self {
            rules,
            tools,
            requirements,
            formatting,
            formatters,
            core_tools,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// the compiled-in tables
    pub fn builtin() -> Self {
        Self {
            rules: builtin_rules(),
            tools: builtin_tools(),
            requirements: builtin_requirements(),
            formatting: builtin_formatting_support(),
            formatters: builtin_formatters(),
            core_tools: builtin_core_tools(),
        }
    }

    pub fn rule(&self, technology: Technology) -> Option<&DetectionRule> {
        self.rules.iter().find(|rule| rule.technology == technology)
    }

    pub fn tool(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.iter().find(|tool| tool.name == name)
    }

    pub fn formatter(&self, tool: &str) -> Option<&Formatter> {
        self.formatters.iter().find(|formatter| formatter.tool == tool)
    }

    /// first violation of the table invariants, if any
    pub fn validate(&self) -> Result<(), CatalogError> {
        self.validate_rules()?;

        let mut names = HashSet::new();
        for tool in &self.tools {
            if !names.insert(tool.name) {
                return Err(CatalogError::DuplicateTool(tool.name));
            }
        }

        let mut pairs = HashSet::new();
        for req in &self.requirements {
            if !pairs.insert((req.technology, req.tool)) {
                return Err(CatalogError::DuplicateRequirement {
                    technology: req.technology,
                    tool: req.tool,
                });
            }
            self.require_tool(req.tool, || format!("requirement for {}", req.technology))?;
        }

        for &tool in &self.core_tools {
            self.require_tool(tool, || "core tool list".to_string())?;
        }

        let mut extensions = HashSet::new();
        for group in &self.formatting {
            for &ext in &group.extensions {
                if !extensions.insert(ext) {
                    return Err(CatalogError::DuplicateExtension(ext));
                }
            }
            for &tool in &group.tools {
                self.require_tool(tool, || {
                    format!("formatting group {}", group.extensions.join(" "))
                })?;
                if self.formatter(tool).is_none() {
                    return Err(CatalogError::MissingFormatter(tool));
                }
            }
        }

        for formatter in &self.formatters {
            self.require_tool(formatter.tool, || "formatter table".to_string())?;
        }

        Ok(())
    }

    fn validate_rules(&self) -> Result<(), CatalogError> {
        let mut technologies = HashSet::new();
        for rule in &self.rules {
            if !technologies.insert(rule.technology) {
                return Err(CatalogError::DuplicateRule(rule.technology));
            }

            let mut patterns = HashSet::new();
            for &pattern in &rule.files {
                if !patterns.insert(pattern) {
                    return Err(CatalogError::DuplicatePattern {
                        technology: rule.technology,
                        pattern,
                    });
                }
                if !is_valid_pattern(pattern) {
                    return Err(CatalogError::InvalidPattern {
                        technology: rule.technology,
                        pattern,
                    });
                }
            }
        }
        Ok(())
    }

    fn require_tool(
        &self,
        tool: &'static str,
        referrer: impl FnOnce() -> String,
    ) -> Result<(), CatalogError> {
        match self.tool(tool) {
            Some(_) => Ok(()),
            None => Err(CatalogError::UnknownTool {
                referrer: referrer(),
                tool,
            }),
        }
    }
}

fn is_valid_pattern(pattern: &str) -> bool {
    if pattern.is_empty() {
        return false;
    }
    let stars = pattern.matches('*').count();
    match stars {
        0 => true,
        1 => contains_wildcard(pattern),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_consistent() {
        assert_eq!(Catalog::builtin().validate(), Ok(()));
    }

    #[test]
    fn lookups_by_name() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.tool("npx").map(|t| t.name), Some("npx"));
        assert!(catalog.tool("emacs").is_none());
        assert_eq!(
            catalog.rule(Technology::Go).map(|r| r.files.clone()),
            Some(vec!["go.mod", "*.go"])
        );
        assert_eq!(catalog.formatter("prettier").map(|f| f.executable), Some("npx"));
    }

    #[test]
    fn rejects_middle_and_repeated_wildcards() {
        assert!(is_valid_pattern("*.go"));
        assert!(is_valid_pattern("Dockerfile*"));
        assert!(is_valid_pattern("go.mod"));
        assert!(!is_valid_pattern("foo*bar"));
        assert!(!is_valid_pattern("*.*"));
        assert!(!is_valid_pattern("*/go.mod"));
        assert!(!is_valid_pattern(""));
    }

    #[test]
    fn new_reports_the_first_violation() {
        let builtin = Catalog::builtin();

        let mut requirements = builtin.requirements.clone();
        requirements.push(ToolRequirement {
            technology: Technology::Go,
            tool: "gopls",
            required: false,
            desc: "Go language server",
        });
        let err = Catalog::new(
            builtin.rules.clone(),
            builtin.tools.clone(),
            requirements,
            builtin.formatting.clone(),
            builtin.formatters.clone(),
            builtin.core_tools.clone(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            CatalogError::UnknownTool {
                referrer: "requirement for go".to_string(),
                tool: "gopls"
            }
        );

        let mut formatting = builtin.formatting.clone();
        formatting.push(FormattingToolSupport::new(&[".go"], &["gofmt"]));
        let err = Catalog::new(
            builtin.rules.clone(),
            builtin.tools.clone(),
            builtin.requirements.clone(),
            formatting,
            builtin.formatters.clone(),
            builtin.core_tools.clone(),
        )
        .unwrap_err();
        assert_eq!(err, CatalogError::DuplicateExtension(".go"));
    }

    #[test]
    fn duplicate_rules_are_rejected() {
        let catalog = Catalog {
            rules: vec![
                DetectionRule::new(Technology::Go, &["go.mod"], "Go", "https://go.dev"),
                DetectionRule::new(Technology::Go, &["*.go"], "Go", "https://go.dev"),
            ],
            ..Catalog::default()
        };
        assert_eq!(catalog.validate(), Err(CatalogError::DuplicateRule(Technology::Go)));
    }
}
