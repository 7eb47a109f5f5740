use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "tabgroup-cli", version, about = "Tabgroup CLI")]
struct Cli {
    /// Log engine decisions at debug level (stderr)
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Config file to use instead of ~/.config/tabgroup/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest a workspace for a tab snapshot
    Evaluate(commands::evaluate::EvaluateArgs),
    /// Show how a single URL is classified
    Classify(commands::classify::ClassifyArgs),
    /// Category rule tables
    Rules {
        #[command(subcommand)]
        action: commands::rules::RulesAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config_path = cli.config.as_deref();
    let result = match cli.command {
        Commands::Evaluate(args) => commands::evaluate::run(args, config_path),
        Commands::Classify(args) => commands::classify::run(args, config_path),
        Commands::Rules { action } => commands::rules::run(action, config_path),
        Commands::Config { action } => commands::config::run(action, config_path),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
