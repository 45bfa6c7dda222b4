//! Curated document corpus

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Text of a corpus entry
///
/// Scraper output sometimes stores one string per page, so a list of
/// strings is accepted and joined with single spaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CorpusText {
    Single(String),
    Pages(Vec<String>),
}

impl CorpusText {
    pub fn to_text(&self) -> String {
        match self {
            Self::Single(text) => text.clone(),
            Self::Pages(pages) => pages.join(" "),
        }
    }
}

/// One labelled snippet as stored in the corpus file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusEntry {
    pub url: String,
    pub text: CorpusText,
}

/// A document ready for chunking
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub text: String,
    pub source_url: String,
}

impl Document {
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        source_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            source_url: source_url.into(),
        }
    }

    /// Text with surrounding whitespace removed; chunk offsets refer to this
    pub fn normalized_text(&self) -> &str {
        self.text.trim()
    }
}

/// Immutable mapping from identifier to entry, ordered by identifier
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Corpus {
    entries: BTreeMap<String, CorpusEntry>,
}

impl Corpus {
    pub fn from_json_str(json: &str) -> Result<Self, DomainError> {
        serde_json::from_str(json)
            .map_err(|e| DomainError::corpus(format!("Malformed corpus JSON: {}", e)))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn documents(&self) -> Vec<Document> {
        self.entries
            .iter()
            .map(|(id, entry)| Document::new(id, entry.text.to_text(), &entry.url))
            .collect()
    }
}
