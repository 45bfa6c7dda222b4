//! Ask command - one question through the full pipeline

use crate::api::types::AskResponse;
use crate::infrastructure::credentials::EnvCredentialProvider;

pub async fn run(question: String, json: bool) -> anyhow::Result<()> {
    let config = super::bootstrap()?;
    let state = crate::create_app_state(&config, &EnvCredentialProvider::default()).await?;

    let outcome = state.chatbot.run_once(&question).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&AskResponse::from(outcome))?);
    } else {
        println!("{}", outcome.answer);
    }

    Ok(())
}
