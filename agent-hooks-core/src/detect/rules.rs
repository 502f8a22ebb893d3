use crate::technology::Technology;

/// file patterns whose presence signals a technology
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectionRule {
    pub technology: Technology,
    /// exact basenames or single-wildcard globs such as `*.go`
    pub files: Vec<&'static str>,
    pub desc: &'static str,
    pub url: &'static str,
}

impl DetectionRule {
    pub fn new(
        technology: Technology,
        files: &[&'static str],
        desc: &'static str,
        url: &'static str,
    ) -> Self {
        Self {
            technology,
            files: files.to_vec(),
            desc,
            url,
        }
    }
}

/// true when the basename of `pattern` starts or ends with `*`
pub fn contains_wildcard(pattern: &str) -> bool {
    let base = basename(pattern);
    !base.is_empty() && (base.starts_with('*') || base.ends_with('*'))
}

pub(crate) fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

// sorted alphabetically by technology, keep it that way
pub fn builtin_rules() -> Vec<DetectionRule> {
    vec![
        DetectionRule::new(
            Technology::Angular,
            &["angular.json"],
            "Angular web application framework",
            "https://angular.dev",
        ),
        DetectionRule::new(
            Technology::Biome,
            &["biome.json", "biome.jsonc"],
            "Biome formatter and linter configuration",
            "https://biomejs.dev",
        ),
        DetectionRule::new(
            Technology::Clojure,
            &["deps.edn", "project.clj", "*.clj"],
            "Clojure programming language",
            "https://clojure.org",
        ),
        DetectionRule::new(
            Technology::Direnv,
            &[".envrc"],
            "direnv per-directory environment",
            "https://direnv.net",
        ),
        DetectionRule::new(
            Technology::Git,
            &[".git"],
            "Git version control",
            "https://git-scm.com",
        ),
        DetectionRule::new(
            Technology::Go,
            &["go.mod", "*.go"],
            "Go programming language",
            "https://go.dev",
        ),
        DetectionRule::new(
            Technology::Hurl,
            &["*.hurl"],
            "Hurl HTTP request files",
            "https://hurl.dev",
        ),
        DetectionRule::new(
            Technology::Java,
            &["pom.xml", "build.gradle", "build.gradle.kts", "*.java"],
            "Java programming language",
            "https://dev.java",
        ),
        DetectionRule::new(
            Technology::NextJs,
            &["next.config.js", "next.config.mjs", "next.config.ts"],
            "Next.js React framework",
            "https://nextjs.org",
        ),
        DetectionRule::new(
            Technology::NodeJs,
            &["package.json"],
            "Node.js JavaScript runtime",
            "https://nodejs.org",
        ),
        DetectionRule::new(
            Technology::Nuxt,
            &["nuxt.config.js", "nuxt.config.ts"],
            "Nuxt Vue framework",
            "https://nuxt.com",
        ),
        DetectionRule::new(
            Technology::Prettier,
            &[
                ".prettierrc",
                ".prettierrc.json",
                ".prettierrc.yaml",
                ".prettierrc.yml",
                ".prettierrc.js",
                "prettier.config.js",
            ],
            "Prettier code formatter configuration",
            "https://prettier.io",
        ),
        DetectionRule::new(
            Technology::Procfile,
            &["Procfile"],
            "Procfile process definitions",
            "https://devcenter.heroku.com/articles/procfile",
        ),
        DetectionRule::new(
            Technology::Python,
            &["pyproject.toml", "requirements.txt", "setup.py", "*.py"],
            "Python programming language",
            "https://www.python.org",
        ),
        DetectionRule::new(
            Technology::React,
            &["*.jsx", "*.tsx"],
            "React user interface library",
            "https://react.dev",
        ),
        DetectionRule::new(
            Technology::Ruby,
            &["Gemfile", "*.rb"],
            "Ruby programming language",
            "https://www.ruby-lang.org",
        ),
        DetectionRule::new(
            Technology::Ruff,
            &["ruff.toml", ".ruff.toml"],
            "Ruff Python formatter and linter configuration",
            "https://docs.astral.sh/ruff",
        ),
        DetectionRule::new(
            Technology::Rust,
            &["Cargo.toml", "*.rs"],
            "Rust programming language",
            "https://www.rust-lang.org",
        ),
        DetectionRule::new(
            Technology::Svelte,
            &["svelte.config.js", "*.svelte"],
            "Svelte user interface framework",
            "https://svelte.dev",
        ),
        DetectionRule::new(
            Technology::Swift,
            &["Package.swift", "*.swift"],
            "Swift programming language",
            "https://swift.org",
        ),
        DetectionRule::new(
            Technology::Transcript,
            &["*.cmdt"],
            "Transcript command-line tests",
            "https://github.com/deref/transcript",
        ),
        DetectionRule::new(
            Technology::TypeScript,
            &["tsconfig.json", "*.ts"],
            "TypeScript programming language",
            "https://www.typescriptlang.org",
        ),
        DetectionRule::new(
            Technology::Vue,
            &["vue.config.js", "*.vue"],
            "Vue.js user interface framework",
            "https://vuejs.org",
        ),
    ]
}
