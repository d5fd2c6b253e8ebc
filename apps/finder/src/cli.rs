use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::num::NonZeroUsize;
use std::path::PathBuf;

use crate::config::Config;
use fault_core::{Boosts, QueryFilters};

#[derive(Parser, Debug)]
#[command(version, about = "Find and rank ATM fault entries")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase verbosity. Can be used multiple times (e.g., -v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Fault catalog to load instead of the configured one
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search the catalog and show ranked matches
    Search {
        #[command(flatten)]
        query: QueryArgs,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Show at most this many results (at least 1)
        #[arg(long)]
        limit: Option<NonZeroUsize>,
    },
    /// Search the catalog and write the ranked matches to a text report
    Export {
        #[command(flatten)]
        query: QueryArgs,

        /// Report file (defaults to `export-path` from the config)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the models and modules available as filters
    Vocab,
    /// Show a single fault entry
    Show {
        /// Entry id
        id: String,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct QueryArgs {
    /// Free-text query
    pub query: Vec<String>,

    /// Only entries that apply to this model
    #[arg(long)]
    pub model: Option<String>,

    /// Only entries that apply to this module
    #[arg(long)]
    pub module: Option<String>,

    /// Quick tag appended to the query. Can be repeated.
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Boost entries by the number of query words they mention
    #[arg(long, value_name = "BOOL")]
    pub keyword_boost: Option<bool>,

    /// Boost entries that declare the selected model/module
    #[arg(long, value_name = "BOOL")]
    pub strict_boost: Option<bool>,

    /// Print the score next to each result
    #[arg(long)]
    pub show_scores: bool,
}

impl QueryArgs {
    /// Query words followed by quick tags, space separated
    pub fn query_text(&self) -> String {
        self.query
            .iter()
            .chain(self.tags.iter())
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Combine the command line with config defaults; flags win.
    pub fn to_filters(&self, cfg: &Config) -> QueryFilters {
        QueryFilters::new(self.query_text())
            .with_model(self.model.clone())
            .with_module(self.module.clone())
            .with_boosts(Boosts {
                keyword: self.keyword_boost.unwrap_or(cfg.keyword_boost),
                strict: self.strict_boost.unwrap_or(cfg.strict_boost),
            })
            .with_show_scores(self.show_scores || cfg.show_scores)
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
