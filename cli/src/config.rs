//! Configuration for the catalog endpoint and the session storage key.

use color_eyre::eyre::Result;
use derive_builder::Builder;
use ecsite_store::{catalog::DEFAULT_CATALOG_URL, persist::DEFAULT_STORAGE_KEY};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub catalog_url: String,
    pub storage_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

/// Persists and retrieves the configuration from a YAML file.
#[derive(Builder)]
#[builder(setter(into), build_fn(private, name = "_build"))]
pub struct ConfigManager {
    /// The path the config file
    path: String,
    #[builder(setter(skip))]
    config: Config,
}

impl ConfigManagerBuilder {
    pub fn build(&self) -> Result<ConfigManager> {
        let mut manager = self._build()?;

        match std::fs::File::open(&manager.path) {
            Ok(file) => {
                manager.config = match serde_yaml::from_reader(file) {
                    Ok(c) => c,
                    Err(e) => {
                        log::warn!(
                            "Failed to parse config file, using defaults: {}",
                            e
                        );
                        Config::default()
                    }
                };
                Ok(manager)
            }
            Err(_) => {
                manager.config = Config::default();
                manager.write()?;
                Ok(manager)
            }
        }
    }
}

impl ConfigManager {
    /// Returns a new instance of ConfigManagerBuilder.
    pub fn builder() -> ConfigManagerBuilder {
        ConfigManagerBuilder::default()
    }

    /// Returns the current config.
    pub fn get(&self) -> &Config {
        &self.config
    }

    /// Returns the path of the config file.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Replaces the config and persists it to disk.
    pub fn update_config(&mut self, new_config: Config) -> Result<()> {
        self.config = new_config;
        self.write()
    }

    fn write(&mut self) -> Result<()> {
        let serialized = serde_yaml::to_string(&self.config)?;
        std::fs::write(&self.path, serialized)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "./config_tests.rs"]
mod tests;
