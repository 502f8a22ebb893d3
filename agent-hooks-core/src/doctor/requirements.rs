use crate::technology::Technology;

/// a tool a detected technology needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolRequirement {
    pub technology: Technology,
    pub tool: &'static str,
    /// missing required tools are errors, missing optional ones are warnings
    pub required: bool,
    pub desc: &'static str,
}

const fn req(
    technology: Technology,
    tool: &'static str,
    required: bool,
    desc: &'static str,
) -> ToolRequirement {
    ToolRequirement {
        technology,
        tool,
        required,
        desc,
    }
}

// sorted alphabetically by technology, keep it that way
pub fn builtin_requirements() -> Vec<ToolRequirement> {
    use Technology::*;

    vec![
        req(Angular, "node", true, "Node.js runtime for Angular"),
        req(Angular, "npm", false, "Package manager for Angular"),
        req(Angular, "ng", false, "Angular CLI"),
        req(Biome, "biome", false, "Biome formatter and linter"),
        req(Clojure, "clojure", true, "Clojure CLI tool"),
        req(Clojure, "lein", false, "Leiningen build tool"),
        req(Direnv, "direnv", false, "direnv environment loader"),
        req(Git, "git", true, "Git version control system"),
        req(Go, "go", true, "Go compiler and toolchain"),
        req(Go, "gofmt", false, "Go code formatter"),
        req(Hurl, "hurl", true, "Hurl HTTP testing tool"),
        req(Java, "java", true, "Java runtime"),
        req(Java, "javac", true, "Java compiler"),
        req(NextJs, "node", true, "Node.js runtime for Next.js"),
        req(NextJs, "npm", false, "Package manager for Next.js"),
        req(NodeJs, "node", true, "Node.js runtime"),
        req(NodeJs, "npm", false, "Node.js package manager"),
        req(Nuxt, "node", true, "Node.js runtime for Nuxt"),
        req(Nuxt, "npm", false, "Package manager for Nuxt"),
        req(Prettier, "npx", false, "Package runner used to invoke Prettier"),
        req(Procfile, "procfile-runner", false, "Procfile process runner"),
        req(Python, "python", true, "Python interpreter"),
        req(Python, "pip", false, "Python package manager"),
        req(React, "node", true, "Node.js runtime for React"),
        req(React, "npm", false, "Package manager for React"),
        req(Ruby, "ruby", true, "Ruby interpreter"),
        req(Ruby, "gem", false, "Ruby package manager"),
        req(Ruff, "ruff", false, "Ruff formatter and linter"),
        req(Rust, "cargo", true, "Rust package manager"),
        req(Rust, "rustc", true, "Rust compiler"),
        req(Svelte, "node", true, "Node.js runtime for Svelte"),
        req(Svelte, "npm", false, "Package manager for Svelte"),
        req(Swift, "swift", true, "Swift toolchain"),
        req(Transcript, "transcript", true, "Transcript testing tool"),
        req(TypeScript, "node", false, "Node.js runtime for TypeScript"),
        req(Vue, "node", true, "Node.js runtime for Vue.js"),
        req(Vue, "npm", false, "Package manager for Vue.js"),
    ]
}

/// the requirements of one technology, in table order
pub fn requirements_for(
    requirements: &[ToolRequirement],
    technology: Technology,
) -> Vec<&ToolRequirement> {
    requirements
        .iter()
        .filter(|req| req.technology == technology)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requiredness_belongs_to_the_association() {
        let requirements = builtin_requirements();
        let node_for_react = requirements_for(&requirements, Technology::React)
            .into_iter()
            .find(|r| r.tool == "node")
            .unwrap();
        let node_for_typescript = requirements_for(&requirements, Technology::TypeScript)
            .into_iter()
            .find(|r| r.tool == "node")
            .unwrap();
        assert!(node_for_react.required);
        assert!(!node_for_typescript.required);
    }

    #[test]
    fn lookups_keep_table_order() {
        let requirements = builtin_requirements();
        let tools: Vec<&str> = requirements_for(&requirements, Technology::Java)
            .iter()
            .map(|r| r.tool)
            .collect();
        assert_eq!(tools, vec!["java", "javac"]);
        assert!(requirements_for(&[], Technology::Go).is_empty());
    }
}
