use super::{Command, load_finder};
use crate::cli::QueryArgs;
use crate::config::Config;
use crate::error::{Result, WrapErr};
use std::path::PathBuf;

pub struct ExportCommand {
    config: Config,
    query: QueryArgs,
    output: Option<PathBuf>,
}

impl ExportCommand {
    pub fn new(config: Config, query: QueryArgs, output: Option<PathBuf>) -> Self {
        Self {
            config,
            query,
            output,
        }
    }

    fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.config.export_path.clone())
    }
}

#[async_trait::async_trait]
impl Command for ExportCommand {
    async fn execute(&self) -> Result<()> {
        let mut finder = load_finder(&self.config).await?;
        let count = finder.search(&self.query.to_filters(&self.config)).len();

        let path = self.output_path();
        tokio::fs::write(&path, finder.export())
            .await
            .wrap_err_with(|| format!("Failed to write report {:?}", path))?;

        println!("Exported {} result(s) to {}", count, path.display());
        Ok(())
    }
}
