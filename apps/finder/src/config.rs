use crate::error::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default = "default_config", deny_unknown_fields)]
pub struct Config {
    /// Fault catalog (JSON array of entries)
    pub catalog_path: PathBuf,
    /// Where `export` writes its report
    pub export_path: PathBuf,
    pub keyword_boost: bool,
    pub strict_boost: bool,
    pub show_scores: bool,
}

fn default_config() -> Config {
    Config {
        catalog_path: ::config::default_catalog_path(),
        export_path: PathBuf::from(::config::constants::EXPORT_FILE_NAME),
        keyword_boost: true,
        strict_boost: true,
        show_scores: false,
    }
}

impl Default for Config {
    fn default() -> Self {
        default_config()
    }
}

const EXAMPLE_CONFIG: &str = r#"# fault-finder configuration
#
# Created on first run. Command line flags override these values.

# Fault catalog to search (JSON array of fault entries).
# The FAULT_FINDER_CATALOG environment variable is used when this is not set.
# catalog-path = "/srv/atm/faults.json"

# Report file written by `fault-finder export`
# export-path = "atm-fault-finder-results.txt"

# Boost entries by how many query words they mention
keyword-boost = true

# Boost entries that declare the selected model/module
strict-boost = true

# Print scores next to results
show-scores = false
"#;

impl Config {
    fn load_str(user_config_str: &str) -> Result<Config> {
        let user_config: Config = toml::from_str(user_config_str)?;
        Ok(user_config)
    }

    /// Load `finder.toml` from the platform config directory, writing an example
    /// file the first time.
    pub fn load() -> Result<Config> {
        let Some(config_path) = ::config::finder_config_path() else {
            tracing::warn!("no home directory, using default configuration");
            return Ok(Config::default());
        };
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<Config> {
        match std::fs::read_to_string(config_path) {
            Ok(user_config_str) => Self::load_str(&user_config_str)
                .wrap_err_with(|| format!("Invalid configuration file {:?}", config_path)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                if let Err(e) = Self::create_example_config(config_path) {
                    tracing::warn!("could not write example config {:?}: {}", config_path, e);
                }
                Self::load_str("")
            }
            Err(e) => Err(e.into()),
        }
    }

    fn create_example_config(config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(config_path, EXAMPLE_CONFIG)?;
        tracing::info!("created example configuration at {:?}", config_path);
        Ok(())
    }
}
