use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;

use commands::{
    CalendarCommand, ConfigCommand, DayCommand, HistoryCommand, MealCommand, TargetCommand,
};
use config::Config;
use daily_carb_core::{CarbStore, JsonFileStorage};

#[derive(Parser)]
#[command(name = "carb")]
#[command(version)]
#[command(about = "Track planned and actual carbs per meal, per day", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show, delete or copy a day
    Day(DayCommand),

    /// Record planned and actual grams for a meal
    Meal(MealCommand),

    /// Manage the whole-day target
    Target(TargetCommand),

    /// List every tracked day, newest first
    History(HistoryCommand),

    /// Show a month with days coloured by target
    Calendar(CalendarCommand),

    /// Manage configuration
    Config(ConfigCommand),
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config)?;

    init_tracing(&config);
    tracing::debug!("Data directory: {}", config.data_dir.value.display());

    let store = CarbStore::new(JsonFileStorage::new(config.data_dir.value.clone()));

    match &cli.command {
        Some(Commands::Day(cmd)) => cmd.run(&store)?,
        Some(Commands::Meal(cmd)) => cmd.run(&store)?,
        Some(Commands::Target(cmd)) => cmd.run(&store)?,
        Some(Commands::History(cmd)) => cmd.run(&store)?,
        Some(Commands::Calendar(cmd)) => cmd.run(&store)?,
        Some(Commands::Config(cmd)) => cmd.run(&config)?,
        None => {
            println!("Use --help to see available commands");
        }
    }

    Ok(())
}

/// Logs go to stderr so command output stays clean. `RUST_LOG` wins over
/// the configured level.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level.value));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
