use clap::{Args, Parser, Subcommand};

/// zero-config convenience commands for humans and ai agents
#[derive(Parser, Debug)]
#[command(
    name = "agent-hooks",
    version,
    about = "Zero-config convenience commands for humans and AI agents",
    long_about = "agent-hooks provides zero-config convenience commands that can be used \
                  by both humans and AI agents. It respects existing project configurations \
                  when available but requires no special setup to be useful."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// show debug logs on stderr (overrides AGENT_HOOKS_LOG)
    #[arg(long, global = true)]
    pub debug: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show information about a technology or tool
    #[command(
        long_about = "Show detailed information about a technology or tool that agent-hooks \
                      knows about.\n\n\
                      Examples:\n  \
                      agent-hooks about go\n  \
                      agent-hooks about git\n  \
                      agent-hooks about typescript"
    )]
    About {
        /// technology or tool name
        name: String,
    },

    /// Detect technologies and tools in the current project
    Detect {
        /// show all detection attempts, not just detected technologies
        #[arg(short, long)]
        verbose: bool,
    },

    /// Check development environment and Claude Code setup
    Doctor {
        /// show all checks, not just problems
        #[arg(short, long)]
        verbose: bool,
    },

    /// Format code in the current project
    #[command(
        long_about = "Formats code in the current project using appropriate tools.\n\
                      With no arguments, formats only changed files.\n\
                      With file arguments, formats only those specific files.\n\
                      Use --all-files to format all tracked files.\n\
                      Use --dry-run to preview what would be formatted without making changes."
    )]
    Format(FormatArgs),

    /// Hook command for Claude Code PostToolUse events
    #[command(
        long_about = "Checks the .agenthooks configuration file for the disable setting and \
                      only runs formatting if hooks are not disabled. Use this in Claude Code \
                      hooks instead of calling 'format' directly."
    )]
    PostToolUse(FormatArgs),

    /// Show version information
    Version,

    /// Detect which version control system is in use
    WhichVcs,
}

#[derive(Args, Debug, Clone, Default)]
pub struct FormatArgs {
    /// files to format, relative to the project root
    pub files: Vec<String>,

    /// format all tracked files instead of just changed files
    #[arg(long)]
    pub all_files: bool,

    /// show detailed output about formatting operations
    #[arg(short, long)]
    pub verbose: bool,

    /// preview what would be formatted without making changes
    #[arg(short = 'n', long)]
    pub dry_run: bool,
}
