//! Index-stats command - builds the index and reports its size

use crate::domain::Retriever;
use crate::infrastructure::credentials::EnvCredentialProvider;

pub async fn run() -> anyhow::Result<()> {
    let config = super::bootstrap()?;

    let providers = crate::create_providers(&config, &EnvCredentialProvider::default()).await?;
    let index = crate::build_index(&config, providers.embedding).await?;

    println!("corpus:    {}", config.corpus.path.display());
    println!("documents: {}", index.document_count());
    println!("chunks:    {}", index.len());

    Ok(())
}
