//! Configuration command handlers

use std::path::PathBuf;
use trade_smoke::{ClientError, ClientResult, SmokeConfig};

use crate::ConfigCommands;

pub fn handle_config_command(cmd: ConfigCommands, config: &SmokeConfig) -> ClientResult<()> {
    match cmd {
        ConfigCommands::Show => {
            let rendered = toml::to_string_pretty(&config.redacted()).map_err(|e| {
                ClientError::config_error(format!("Failed to render config: {}", e))
            })?;
            println!("{}", rendered);
        }
        ConfigCommands::Init { output } => {
            let path = match output {
                Some(path) => PathBuf::from(path),
                None => SmokeConfig::default_config_path()?,
            };
            if path.exists() {
                return Err(ClientError::config_error(format!(
                    "Refusing to overwrite existing config at {}",
                    path.display()
                )));
            }
            SmokeConfig::default().save_to_file(&path)?;
            println!("Wrote default configuration to {}", path.display());
        }
    }
    Ok(())
}
