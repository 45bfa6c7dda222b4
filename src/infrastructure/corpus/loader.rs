use std::path::Path;

use tracing::info;

use crate::domain::{Corpus, DomainError};

/// Read and parse the JSON corpus; any failure is fatal for index building
pub async fn load_corpus(path: impl AsRef<Path>) -> Result<Corpus, DomainError> {
    let path = path.as_ref();

    let content = tokio::fs::read_to_string(path).await.map_err(|e| {
        DomainError::corpus(format!("Cannot read corpus '{}': {}", path.display(), e))
    })?;

    let corpus = Corpus::from_json_str(&content)?;

    info!(path = %path.display(), documents = corpus.len(), "Corpus loaded");

    Ok(corpus)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_load_corpus() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"doc1": {{"url": "http://x/a.pdf", "text": "short text"}}}}"#
        )
        .unwrap();

        let corpus = load_corpus(file.path()).await.unwrap();
        let documents = corpus.documents();

        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].id, "doc1");
        assert_eq!(documents[0].source_url, "http://x/a.pdf");
    }

    #[tokio::test]
    async fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_corpus(dir.path().join("absent.json")).await;

        assert!(matches!(result, Err(DomainError::Corpus { .. })));
    }

    #[tokio::test]
    async fn test_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"doc1": {{"url": 3}}"#).unwrap();

        let result = load_corpus(file.path()).await;
        assert!(matches!(result, Err(DomainError::Corpus { .. })));
    }
}
