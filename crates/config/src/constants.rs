pub const TOP_LEVEL_DOMAIN: &str = "org";
pub const AUTHOR: &str = "atm-tools";
pub const APP_NAME: &str = "fault-finder";

/// File name of the CLI configuration inside the config directory
pub const FINDER_CONFIG_FILE_NAME: &str = "finder.toml";

/// File name of the fault catalog inside the data directory
pub const CATALOG_FILE_NAME: &str = "faults.json";

/// Environment variable overriding the catalog location
pub const CATALOG_ENV_KEY: &str = "FAULT_FINDER_CATALOG";

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV_KEY: &str = "FAULT_FINDER_DATA_DIR";

/// Default file name for exported reports
pub const EXPORT_FILE_NAME: &str = "atm-fault-finder-results.txt";
