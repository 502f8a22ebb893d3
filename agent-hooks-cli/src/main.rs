use agent_hooks_core::style;
use clap::Parser;

mod cli;
mod commands;
mod logging;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.debug);

    let result = match cli.command {
        Commands::About { name } => commands::about::run(&name),
        Commands::Detect { verbose } => commands::detect::run(verbose),
        Commands::Doctor { verbose } => commands::doctor::run(verbose),
        Commands::Format(args) => commands::format::run(&args),
        Commands::PostToolUse(args) => commands::format::run_post_tool_use(&args),
        Commands::Version => commands::version::run(),
        Commands::WhichVcs => commands::which_vcs::run(),
    };

    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), style(format!("{e:#}")).red());
        std::process::exit(1);
    }
}
