use std::num::NonZeroUsize;

use super::{Command, load_finder};
use crate::cli::{OutputFormat, QueryArgs};
use crate::config::Config;
use crate::error::Result;
use crate::render::{render_json, render_results};

pub struct SearchCommand {
    config: Config,
    query: QueryArgs,
    format: OutputFormat,
    limit: Option<NonZeroUsize>,
}

impl SearchCommand {
    pub fn new(
        config: Config,
        query: QueryArgs,
        format: OutputFormat,
        limit: Option<NonZeroUsize>,
    ) -> Self {
        Self {
            config,
            query,
            format,
            limit,
        }
    }

    /// Run the search and render what would be printed
    pub async fn output(&self) -> Result<String> {
        let mut finder = load_finder(&self.config).await?;
        let filters = self.query.to_filters(&self.config);

        let results = finder.search(&filters);
        let limit = self.limit.map_or(results.len(), NonZeroUsize::get);
        let shown = &results[..limit.min(results.len())];
        tracing::info!("{} matches, showing {}", results.len(), shown.len());

        Ok(match self.format {
            OutputFormat::Text => render_results(shown, filters.show_scores),
            OutputFormat::Json => format!("{}\n", render_json(shown)?),
        })
    }
}

#[async_trait::async_trait]
impl Command for SearchCommand {
    async fn execute(&self) -> Result<()> {
        print!("{}", self.output().await?);
        Ok(())
    }
}
