use super::{Command, load_finder};
use crate::config::Config;
use crate::error::Result;

pub struct VocabCommand {
    config: Config,
}

impl VocabCommand {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

fn render_vocab(title: &str, items: &[String]) -> String {
    let mut out = format!("{title}:\n");
    for item in items {
        out.push_str("  ");
        out.push_str(item);
        out.push('\n');
    }
    out
}

#[async_trait::async_trait]
impl Command for VocabCommand {
    async fn execute(&self) -> Result<()> {
        let finder = load_finder(&self.config).await?;
        let catalog = finder.catalog();

        print!("{}", render_vocab("Models", catalog.models()));
        print!("{}", render_vocab("Modules", catalog.modules()));
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_render_vocab() {
        let items = vec!["DFM".to_string(), "EPP".to_string()];
        assert_eq!(render_vocab("Modules", &items), "Modules:\n  DFM\n  EPP\n");
        assert_eq!(render_vocab("Models", &[]), "Models:\n");
    }
}
