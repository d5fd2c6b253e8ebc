pub mod constants;

pub use etcetera::AppStrategy;
use etcetera::{AppStrategyArgs, choose_app_strategy};

use std::path::PathBuf;
use std::env;


pub fn create_strategy() -> std::result::Result<impl AppStrategy, etcetera::HomeDirError> {
    choose_app_strategy(AppStrategyArgs {
        top_level_domain: constants::TOP_LEVEL_DOMAIN.to_string(),
        author: constants::AUTHOR.to_string(),
        app_name: constants::APP_NAME.to_string(),
    })
}

/// Resolve a directory: the `env_key` variable wins, then the platform strategy,
/// then a folder under the system temp dir.
pub fn resolve_dir<S, F>(env_key: &str, strategy: &S, strategy_fn: F) -> PathBuf
where
    S: AppStrategy,
    F: FnOnce(&S) -> Option<PathBuf>,
{
    env::var_os(env_key)
        .map(PathBuf::from)
        .or_else(|| strategy_fn(strategy))
        .unwrap_or_else(|| env::temp_dir().join(constants::APP_NAME))
}

/// Location of the fault catalog when the user has not configured one.
///
/// `FAULT_FINDER_CATALOG` points at the file itself; otherwise `faults.json` is looked
/// up in `FAULT_FINDER_DATA_DIR` or the platform data directory.
pub fn default_catalog_path() -> PathBuf {
    if let Some(path) = env::var_os(constants::CATALOG_ENV_KEY) {
        return PathBuf::from(path);
    }

    let data_dir = match create_strategy() {
        Ok(strategy) => resolve_dir(constants::DATA_DIR_ENV_KEY, &strategy, |s| {
            Some(s.data_dir())
        }),
        Err(_) => env::var_os(constants::DATA_DIR_ENV_KEY)
            .map(PathBuf::from)
            .unwrap_or_else(|| env::temp_dir().join(constants::APP_NAME)),
    };
    data_dir.join(constants::CATALOG_FILE_NAME)
}

/// Location of `finder.toml`, if a home directory can be determined.
pub fn finder_config_path() -> Option<PathBuf> {
    create_strategy()
        .ok()
        .map(|s| s.config_dir().join(constants::FINDER_CONFIG_FILE_NAME))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_resolve_dir_falls_back_to_temp() {
        let strategy = create_strategy().expect("home dir");
        let dir = resolve_dir("FAULT_FINDER_TEST_UNSET_KEY", &strategy, |_| None);
        assert_eq!(dir, env::temp_dir().join(constants::APP_NAME));
    }

    #[test]
    fn test_resolve_dir_uses_strategy() {
        let strategy = create_strategy().expect("home dir");
        let dir = resolve_dir("FAULT_FINDER_TEST_UNSET_KEY", &strategy, |s| {
            Some(s.cache_dir())
        });
        assert_eq!(dir, strategy.cache_dir());
    }

    #[test]
    fn test_catalog_file_name() {
        let path = default_catalog_path();
        if env::var_os(constants::CATALOG_ENV_KEY).is_none() {
            assert!(path.ends_with(constants::CATALOG_FILE_NAME));
        }
    }
}
