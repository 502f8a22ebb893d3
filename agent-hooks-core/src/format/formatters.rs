use crate::technology::Technology;

/// a group of file extensions and the tools that can format them, in preference order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattingToolSupport {
    /// suffixes including the leading dot, such as `.go`
    pub extensions: Vec<&'static str>,
    pub tools: Vec<&'static str>,
}

impl FormattingToolSupport {
    pub fn new(extensions: &[&'static str], tools: &[&'static str]) -> Self {
        Self {
            extensions: extensions.to_vec(),
            tools: tools.to_vec(),
        }
    }

    pub fn handles(&self, file: &str) -> bool {
        self.extensions.iter().any(|ext| file.ends_with(ext))
    }
}

/// how to invoke a formatting tool on one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatter {
    pub tool: &'static str,
    pub executable: &'static str,
    /// arguments placed before the file path
    pub args: Vec<&'static str>,
    /// project configuration that signals the project prefers this tool
    pub config: Option<Technology>,
    /// when set, the tool is only eligible if `config` was detected
    pub requires_config: bool,
}

impl Formatter {
    pub fn new(tool: &'static str, args: &[&'static str]) -> Self {
        Self {
            tool,
            executable: tool,
            args: args.to_vec(),
            config: None,
            requires_config: false,
        }
    }

    pub fn via(mut self, executable: &'static str) -> Self {
        self.executable = executable;
        self
    }

    /// preferred when `technology` is detected
    pub fn configured_by(mut self, technology: Technology) -> Self {
        self.config = Some(technology);
        self
    }

    /// only usable when `technology` is detected
    pub fn requires(mut self, technology: Technology) -> Self {
        self.config = Some(technology);
        self.requires_config = true;
        self
    }

    pub fn is_configured(&self, detected: &[Technology]) -> bool {
        self.config.is_some_and(|tech| detected.contains(&tech))
    }

    pub fn is_eligible(&self, detected: &[Technology]) -> bool {
        !self.requires_config || self.is_configured(detected)
    }

    /// full argument list for formatting `file`
    pub fn command_args(&self, file: &str) -> Vec<String> {
        self.args
            .iter()
            .map(|arg| arg.to_string())
            .chain(std::iter::once(file.to_string()))
            .collect()
    }
}

pub fn builtin_formatting_support() -> Vec<FormattingToolSupport> {
    vec![
        FormattingToolSupport::new(&[".go"], &["goimports", "gofmt"]),
        FormattingToolSupport::new(
            &[".js", ".jsx", ".ts", ".tsx", ".mjs", ".cjs"],
            &["biome", "prettier"],
        ),
        FormattingToolSupport::new(&[".rs"], &["rustfmt"]),
        FormattingToolSupport::new(&[".py"], &["ruff", "black"]),
    ]
}

pub fn builtin_formatters() -> Vec<Formatter> {
    vec![
        Formatter::new("goimports", &["-w"]),
        Formatter::new("gofmt", &["-w"]),
        Formatter::new("biome", &["format", "--write"]).requires(Technology::Biome),
        Formatter::new("prettier", &["prettier", "--write"])
            .via("npx")
            .requires(Technology::Prettier),
        Formatter::new("rustfmt", &[]),
        Formatter::new("ruff", &["format"]).configured_by(Technology::Ruff),
        Formatter::new("black", &[]),
    ]
}
