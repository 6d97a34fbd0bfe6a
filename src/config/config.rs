use crate::errors::LocalityError;
use anyhow::anyhow;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "~/.skate/locality.yaml";
pub const DEFAULT_DISCOVERY_LOCALITY: &str = "RegionOne";

/// Settings for the discovery locality filter.
///
/// Loaded once at process start and handed to the filter by value. Nothing
/// mutates it afterwards, so it can be shared across scheduling threads freely.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LocalityConfig {
    /// Host name prefix that identifies the locality.
    pub discovery_locality: String,
    /// The filter passes every host unless this is set.
    pub enable_discovery_locality: bool,
}

impl Default for LocalityConfig {
    fn default() -> Self {
        LocalityConfig {
            discovery_locality: DEFAULT_DISCOVERY_LOCALITY.to_string(),
            enable_discovery_locality: false,
        }
    }
}

impl LocalityConfig {
    pub fn from_yaml_str(contents: &str) -> Result<Self, LocalityError> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Reads the config file at `path`, or the default location.
    /// A missing file means defaults.
    pub fn load(path: Option<String>) -> Result<Self, LocalityError> {
        let path = path.unwrap_or(DEFAULT_CONFIG_PATH.to_string());
        let path = shellexpand::tilde(&path).to_string();
        let path = Path::new(&path);

        if !path.exists() {
            debug!("no locality config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        if !path.is_file() {
            return Err(format!("locality config {} is not a file", path.display()).into());
        }

        let contents = fs::read_to_string(path)
            .map_err(|e| anyhow!("failed to read locality config {}", path.display()).context(e))?;

        Self::from_yaml_str(&contents)
    }
}
