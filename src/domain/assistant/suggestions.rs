use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Questions offered as one-click buttons next to the input box
pub const CANNED_SUGGESTIONS: [&str; 4] = [
    "Are there any support services or resources you recommend for managing stress and anxiety related to my treatment?",
    "Who is Michael E. Jordan?",
    "How will my current medications, especially Lisinopril for hypertension and Ondansetron for nausea, be managed around the time of surgery?",
    "Quelle est la capitale de la France ?",
];

static NUMBERED_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*\d+\s*[.)]\s*(.+?)\s*$").expect("numbered line pattern is a valid regex")
});

/// Follow-up questions parsed from a numbered list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedQuestions {
    pub questions: Vec<String>,
}

impl SuggestedQuestions {
    /// Parse `1. ...` / `2) ...` lines; without numbering, every non-empty
    /// line is a question
    pub fn parse(text: &str) -> Self {
        let numbered: Vec<String> = text
            .lines()
            .filter_map(|line| NUMBERED_LINE.captures(line))
            .map(|caps| caps[1].to_string())
            .collect();

        let questions = if numbered.is_empty() {
            text.lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string)
                .collect()
        } else {
            numbered
        };

        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
