//! Assistant domain: routing, generation outcome and grading contracts

mod classification;
mod outcome;
pub mod prompts;
mod route;
mod suggestions;
mod template;
mod verdict;

pub use classification::QuestionComplexity;
pub use outcome::{
    AnswerContext, ChatOutcome, FallbackPolicy, Generation, GroundingPolicy, PipelineStage,
};
pub use route::{QueryRouter, RouteDecision, RouteQuery};
pub use suggestions::{SuggestedQuestions, CANNED_SUGGESTIONS};
pub use template::PromptTemplate;
pub use verdict::{HallucinationGrader, HallucinationScore, HallucinationVerdict};

#[cfg(test)]
pub use route::mock::FixedRouter;
