pub mod export;
pub mod search;
pub mod show;
pub mod vocab;

use crate::config::Config;
use crate::error::{Result, WrapErr};
use fault_core::FaultFinder;

pub use export::ExportCommand;
pub use search::SearchCommand;
pub use show::ShowCommand;
pub use vocab::VocabCommand;

#[async_trait::async_trait]
pub trait Command {
    async fn execute(&self) -> Result<()>;
}

/// Load the configured catalog. A failure here stops the command instead of
/// falling through to an empty search.
pub async fn load_finder(config: &Config) -> Result<FaultFinder> {
    FaultFinder::load(&config.catalog_path)
        .await
        .wrap_err_with(|| {
            format!(
                "Could not load fault catalog from {:?}. Point `catalog-path` or --catalog at a valid faults.json",
                config.catalog_path
            )
        })
}
