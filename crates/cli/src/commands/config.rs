//! Config file commands

use anyhow::Result;
use tracing::info;

use super::{ConfigCommands, Settings};
use crate::config::MokeConfig;

/// Execute a config subcommand
pub fn execute(settings: &Settings, command: ConfigCommands) -> Result<()> {
    let config_path = &settings.config_path;

    match command {
        ConfigCommands::Init { overwrite } => {
            if config_path.exists() && !overwrite {
                anyhow::bail!(
                    "Configuration already exists at {}. Use --overwrite to replace.",
                    config_path.display()
                );
            }

            MokeConfig::default().save(config_path)?;
            info!(path = %config_path.display(), "Wrote default configuration");
            println!("Wrote {}", config_path.display());
        }

        ConfigCommands::Show => {
            println!("{}", serde_json::to_string_pretty(&settings.config)?);
        }

        ConfigCommands::Path => {
            println!("{}", config_path.display());
        }
    }

    Ok(())
}
