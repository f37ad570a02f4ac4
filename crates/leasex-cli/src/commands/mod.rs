//! Subcommand implementations.

pub mod config;
pub mod extract;
pub mod scan;

use std::path::Path;

use leasex_core::models::config::{LeaseConfig, Preset};

/// Extraction profile selectable on the command line.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum PresetArg {
    /// Amounts 500 to 50,000, bare numbers accepted
    Interactive,
    /// Amounts 1,000 to 100,000, currency marker required
    Batch,
}

impl From<PresetArg> for Preset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Interactive => Preset::Interactive,
            PresetArg::Batch => Preset::Batch,
        }
    }
}

/// Load configuration from an explicit path, the default location, or defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<LeaseConfig> {
    if let Some(path) = config_path {
        return Ok(LeaseConfig::from_file(Path::new(path))?);
    }

    let default_path = config::default_config_path();
    if default_path.exists() {
        Ok(LeaseConfig::from_file(&default_path)?)
    } else {
        Ok(LeaseConfig::default())
    }
}
