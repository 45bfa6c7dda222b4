//! Suggest command - follow-up questions for a saved conversation

use std::path::Path;

use anyhow::Context;

use crate::infrastructure::assistant::{GenerationSettings, QuestionSuggester};
use crate::infrastructure::credentials::EnvCredentialProvider;

pub async fn run(history: &Path, context: Option<String>) -> anyhow::Result<()> {
    let config = super::bootstrap()?;

    let content = tokio::fs::read_to_string(history)
        .await
        .with_context(|| format!("Cannot read conversation '{}'", history.display()))?;
    let conversation = read_turns(&content);

    let providers = crate::create_providers(&config, &EnvCredentialProvider::default()).await?;
    let settings = GenerationSettings::new(&config.llm.model)
        .with_temperature(config.llm.temperature)
        .with_max_tokens(config.llm.max_tokens);

    let suggestions = QuestionSuggester::new(providers.llm, settings)
        .suggest(&conversation, context.as_deref())
        .await?;

    for (i, question) in suggestions.questions.iter().enumerate() {
        println!("{}. {}", i + 1, question);
    }

    Ok(())
}

/// One turn per non-empty line
fn read_turns(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
