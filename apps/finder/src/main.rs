mod cli;
mod command;
mod config;
mod error;
mod render;

use error::WrapErr;

use clap::CommandFactory;
use clap::Parser;

#[tokio::main]
async fn main() -> error::Result<()> {
    color_eyre::install()?;
    let command_line = cli::Cli::parse();
    init_logging(command_line.verbose);

    let mut cfg = config::Config::load().context("Load configuration error")?;
    if let Some(catalog) = command_line.catalog {
        cfg.catalog_path = catalog;
    }

    if let Some(command) = command_line.command {
        let cmd: Box<dyn command::Command> = match command {
            cli::Commands::Search {
                query,
                format,
                limit,
            } => Box::new(command::SearchCommand::new(cfg, query, format, limit)),
            cli::Commands::Export { query, output } => {
                Box::new(command::ExportCommand::new(cfg, query, output))
            }
            cli::Commands::Vocab => Box::new(command::VocabCommand::new(cfg)),
            cli::Commands::Show { id } => Box::new(command::ShowCommand::new(cfg, id)),
        };
        cmd.execute().await?;
    } else {
        cli::Cli::command().print_help()?;
    }

    Ok(())
}

/// Logs go to stderr so results on stdout stay pipeable.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
