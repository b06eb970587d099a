pub mod models;

use anyhow::{Context, Result};
use std::{fs::File, io::Read, path::Path};
use validator::Validate;

pub use models::{AwsSetting, Config, IpResolvers, MatchPolicy, RecordSettings};

/// Reads, parses and validates the YAML configuration at `path`.
///
/// Missing or empty required keys fail here rather than surfacing later as
/// empty strings.
pub fn load_config(path: &Path) -> Result<Config> {
    let mut file = File::open(path)
        .with_context(|| format!("Failed to open config file: {}", path.display()))?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_config(&contents)
        .with_context(|| format!("Invalid config file: {}", path.display()))
}

pub fn parse_config(contents: &str) -> Result<Config> {
    let config: Config =
        serde_yaml::from_str(contents).context("Failed to parse config as YAML")?;
    config.validate().context("Config validation failed")?;
    Ok(config)
}
