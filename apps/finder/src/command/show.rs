use super::{Command, load_finder};
use crate::config::Config;
use crate::error::{Result, error};
use crate::render::render_card;

pub struct ShowCommand {
    config: Config,
    id: String,
}

impl ShowCommand {
    pub fn new(config: Config, id: String) -> Self {
        Self { config, id }
    }

    /// Render the card for the requested id; an unknown id is an error.
    pub async fn output(&self) -> Result<String> {
        let finder = load_finder(&self.config).await?;
        let entry = finder
            .catalog()
            .get(&self.id)
            .ok_or_else(|| error!("No fault entry with id '{}'", self.id))?;

        let score = self.config.show_scores.then(|| entry.base_likelihood());
        Ok(render_card(entry, score))
    }
}

#[async_trait::async_trait]
impl Command for ShowCommand {
    async fn execute(&self) -> Result<()> {
        print!("{}", self.output().await?);
        Ok(())
    }
}
