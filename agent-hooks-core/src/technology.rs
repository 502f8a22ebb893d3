use std::fmt;
use std::str::FromStr;

/// a language, framework or ecosystem that can be detected in a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Technology {
    Angular,
    Biome,
    Clojure,
    Direnv,
    Git,
    Go,
    Hurl,
    Java,
    NextJs,
    NodeJs,
    Nuxt,
    Prettier,
    Procfile,
    Python,
    React,
    Ruby,
    Ruff,
    Rust,
    Svelte,
    Swift,
    Transcript,
    TypeScript,
    Vue,
}

impl Technology {
    pub const ALL: &'static [Technology] = &[
        Technology::Angular,
        Technology::Biome,
        Technology::Clojure,
        Technology::Direnv,
        Technology::Git,
        Technology::Go,
        Technology::Hurl,
        Technology::Java,
        Technology::NextJs,
        Technology::NodeJs,
        Technology::Nuxt,
        Technology::Prettier,
        Technology::Procfile,
        Technology::Python,
        Technology::React,
        Technology::Ruby,
        Technology::Ruff,
        Technology::Rust,
        Technology::Svelte,
        Technology::Swift,
        Technology::Transcript,
        Technology::TypeScript,
        Technology::Vue,
    ];

    /// the identifier used on the command line and in reports
    pub fn as_str(self) -> &'static str {
        match self {
            Technology::Angular => "angular",
            Technology::Biome => "biome",
            Technology::Clojure => "clojure",
            Technology::Direnv => "direnv",
            Technology::Git => "git",
            Technology::Go => "go",
            Technology::Hurl => "hurl",
            Technology::Java => "java",
            Technology::NextJs => "nextjs",
            Technology::NodeJs => "nodejs",
            Technology::Nuxt => "nuxt",
            Technology::Prettier => "prettier",
            Technology::Procfile => "procfile",
            Technology::Python => "python",
            Technology::React => "react",
            Technology::Ruby => "ruby",
            Technology::Ruff => "ruff",
            Technology::Rust => "rust",
            Technology::Svelte => "svelte",
            Technology::Swift => "swift",
            Technology::Transcript => "transcript",
            Technology::TypeScript => "typescript",
            Technology::Vue => "vue",
        }
    }
}

impl fmt::Display for Technology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown technology: {0}")]
pub struct UnknownTechnology(pub String);

impl FromStr for Technology {
    type Err = UnknownTechnology;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Technology::ALL
            .iter()
            .copied()
            .find(|tech| tech.as_str() == s)
            .ok_or_else(|| UnknownTechnology(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for tech in Technology::ALL {
            assert_eq!(tech.as_str().parse::<Technology>(), Ok(*tech));
        }
    }

    #[test]
    fn names_are_case_sensitive() {
        assert!("Go".parse::<Technology>().is_err());
        assert_eq!(
            "golang".parse::<Technology>(),
            Err(UnknownTechnology("golang".to_string()))
        );
    }
}
