use crate::config::toml_config::MachineConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_machine_name, validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "coffee-machine")]
#[command(about = "Interactive coffee machine: pick a coffee, pick components, get a brew")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the machine name from the config file
    #[arg(long)]
    pub name: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Loads the config file when one is given, then applies command line overrides.
    pub fn machine_config(&self) -> Result<MachineConfig> {
        let mut config = match &self.config {
            Some(path) => MachineConfig::from_file(path)?,
            None => MachineConfig::default(),
        };

        if let Some(name) = &self.name {
            config.machine.name = name.clone();
        }

        Ok(config)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        if let Some(name) = &self.name {
            validate_machine_name("name", name)?;
        }
        Ok(())
    }
}
