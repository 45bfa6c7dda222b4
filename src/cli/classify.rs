//! Classify command - prints 0 (simple) or 1 (complex)

use crate::infrastructure::assistant::QuestionClassifier;
use crate::infrastructure::corpus::EhrRecord;
use crate::infrastructure::credentials::EnvCredentialProvider;

pub async fn run(question: String) -> anyhow::Result<()> {
    let config = super::bootstrap()?;

    let providers = crate::create_providers(&config, &EnvCredentialProvider::default()).await?;
    let ehr = EhrRecord::load(&config.ehr.path).await?;

    let classifier =
        QuestionClassifier::new(providers.llm, ehr).with_model(&config.llm.classifier_model);
    let complexity = classifier.classify(&question).await?;

    println!("{}", complexity.code());

    Ok(())
}
