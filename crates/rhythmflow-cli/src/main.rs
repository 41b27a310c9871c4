use clap::{Parser, Subcommand};
use rhythmflow_core::Config;

mod commands;
mod common;

#[derive(Parser)]
#[command(name = "rhythmflow-cli", version, about = "Rhythmflow daily time-blocking planner")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Today's schedule
    Day {
        #[command(subcommand)]
        action: commands::day::DayAction,
    },
    /// Add, edit and complete blocks
    Block {
        #[command(subcommand)]
        action: commands::block::BlockAction,
    },
    /// List half-hour slots on the grid
    Slots {
        /// Only slots with no block in them
        #[arg(long)]
        free: bool,
    },
    /// Compute the points for a block without adding it
    Score(commands::score::ScoreArgs),
    /// Completion and distribution statistics for today
    Summary {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Tip for the current (or given) hour
    Tip {
        /// Hour of day (0-23), defaults to now
        #[arg(long)]
        hour: Option<u32>,
    },
    /// General productivity tips
    Tips {
        /// How many tips to show (defaults to tips.list_limit)
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

/// Initializes the tracing subscriber, preferring RUST_LOG over the config.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("rhythmflow_core={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    let config = Config::load_or_default();
    init_tracing(&config.log.level);

    let result = match cli.command {
        Commands::Day { action } => commands::day::run(action, &config),
        Commands::Block { action } => commands::block::run(action, &config),
        Commands::Slots { free } => commands::day::slots(free, &config),
        Commands::Score(args) => commands::score::run(args),
        Commands::Summary { json } => commands::summary::run(json, &config),
        Commands::Tip { hour } => commands::tips::tip(hour),
        Commands::Tips { limit } => commands::tips::list(limit, &config),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
