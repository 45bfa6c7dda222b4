use std::fmt;

use serde::{Deserialize, Serialize};

use super::{HallucinationVerdict, RouteDecision};
use crate::domain::retrieval::RetrievedChunk;

/// Free-text LLM output for one prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Generation {
    pub content: String,
}

impl Generation {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// Context an answer was generated from
#[derive(Debug, Clone)]
pub enum AnswerContext {
    /// The patient's health record
    Ehr,
    /// Chunks retrieved from the corpus
    Documents(Vec<RetrievedChunk>),
}

/// What the grader checks an answer against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroundingPolicy {
    /// Always documents retrieved for the question, whatever the path
    Corpus,
    /// The EHR for simple answers, retrieved documents for complex ones
    #[default]
    AnswerContext,
}

/// Text returned in place of a hallucinated answer
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FallbackPolicy {
    /// The grader's explanation
    #[default]
    Explanation,
    /// A fixed message
    FixedMessage(String),
}

impl FallbackPolicy {
    pub fn from_message(message: Option<String>) -> Self {
        match message {
            Some(m) if !m.trim().is_empty() => Self::FixedMessage(m),
            _ => Self::Explanation,
        }
    }
}

/// Steps of one pipeline run; there are no transitions backwards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Route,
    Generate,
    Grade,
    Done,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Route => "route",
            Self::Generate => "generate",
            Self::Grade => "grade",
            Self::Done => "done",
        };
        f.write_str(name)
    }
}

/// Result of one question through the pipeline
#[derive(Debug, Clone, Serialize)]
pub struct ChatOutcome {
    pub route: RouteDecision,
    pub generation: Generation,
    pub verdict: HallucinationVerdict,
    /// Final text shown to the patient
    pub answer: String,
    /// Source urls of the documents the answer was generated from
    pub sources: Vec<String>,
}

impl ChatOutcome {
    /// Apply the final selection rule
    pub fn select(
        route: RouteDecision,
        generation: Generation,
        verdict: HallucinationVerdict,
        fallback: &FallbackPolicy,
        sources: Vec<String>,
    ) -> Self {
        let answer = if !verdict.is_hallucinated() {
            generation.content.clone()
        } else {
            match fallback {
                FallbackPolicy::Explanation => verdict.explanation.clone(),
                FallbackPolicy::FixedMessage(message) => message.clone(),
            }
        };

        Self {
            route,
            generation,
            verdict,
            answer,
            sources,
        }
    }

    pub fn is_hallucinated(&self) -> bool {
        self.verdict.is_hallucinated()
    }
}
