use clap::{Args, Subcommand};
use std::fs;
use std::path::Path;

use daily_carb_core::JsonFileStorage;

use super::OutputFormat;
use crate::config::Config;

#[derive(Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Show current configuration values
    Show {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Initialize configuration file
    Init,
}

impl ConfigCommand {
    pub fn run(&self, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            ConfigSubcommand::Show { format } => {
                match format {
                    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(config)?),
                    OutputFormat::Text => print_config(config),
                }
                Ok(())
            }

            ConfigSubcommand::Init => {
                let path = Config::default_config_path();
                if write_default_config(&path)? {
                    println!("Created config file: {}", path.display());
                } else {
                    println!("Config file already exists: {}", path.display());
                    println!("Use 'carb config show' to view current configuration.");
                }
                Ok(())
            }
        }
    }
}

fn print_config(config: &Config) {
    match &config.config_file {
        Some(path) => println!("Config file: {}", path.display()),
        None => println!(
            "Config file: {} (not found)",
            Config::default_config_path().display()
        ),
    }

    let storage = JsonFileStorage::new(config.data_dir.value.clone());
    let created = if storage.exists() {
        ""
    } else {
        " (not created yet)"
    };
    println!();
    println!(
        "data_dir   {}  [{}]",
        config.data_dir.value.display(),
        config.data_dir.source
    );
    println!("data file  {}{}", storage.path().display(), created);
    println!(
        "log_level  {}  [{}]",
        config.log_level.value, config.log_level.source
    );
}

const DEFAULT_CONFIG: &str = "\
# carb configuration

# Where dailycarb_data.json lives
# data_dir: ~/.local/share/carb

# tracing filter, overridden by RUST_LOG
log_level: warn
";

/// Writes the starter file unless one is already there. Returns whether it
/// wrote anything.
fn write_default_config(path: &Path) -> std::io::Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, DEFAULT_CONFIG)?;
    Ok(true)
}
