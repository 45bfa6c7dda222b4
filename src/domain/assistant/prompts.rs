//! Fixed prompt templates used by the assistant

use once_cell::sync::Lazy;

use super::PromptTemplate;

/// System instruction for the router
pub const ROUTER_SYSTEM_PROMPT: &str = "You are an expert at routing a patient's question to one of two answer paths.
The vectorstore contains documents about oncology data, medical guidelines and cancer symptoms.
Choose \"complex\" for precise medical questions on these topics, which are answered from the vectorstore.
Choose \"simple\" for everything else, which is answered from the patient's electronic health record.";

/// Simple path: EHR text plus the question
pub static SIMPLE_ANSWER_TEMPLATE: Lazy<PromptTemplate> = Lazy::new(|| {
    PromptTemplate::new(
        "You are an assistant helping a cancer patient.

Based on the conversation, suggest 4 relevant and helpful questions that the patient can ask their doctor or that can help clarify their situation.

The patient's Electronic Health Record: ${var:ehr}

The patient's question: ${var:question}

Please answer the question given the patient's personal health information.

Answer:",
    )
});

/// Complex path: retrieved chunks plus the question
pub static RAG_ANSWER_TEMPLATE: Lazy<PromptTemplate> = Lazy::new(|| {
    PromptTemplate::new(
        "You are an assistant helping a cancer patient. Based on the conversation, suggest 4 relevant and helpful questions that the patient can ask their doctor or that can help clarify their situation.
Please answer the following questions:
${var:question}

Context (if available):
${var:context}

After answering the patient's question please provide the 4 questions in a numbered list, separated by new lines.",
    )
});

/// System instruction for the hallucination grader
pub const GRADER_SYSTEM_PROMPT: &str = "You are a doctor double checking the consistency and truth of your student's answer.

You will be given FACTS and a STUDENT ANSWER.

Grade criteria:

(1) Ensure the STUDENT ANSWER is grounded in the FACTS.

(2) Ensure the STUDENT ANSWER does not contain \"hallucinated\" information outside the scope of the FACTS.

Score:

binary_score \"no\" means the student's answer meets all of the criteria.

binary_score \"yes\" means the student's answer contains hallucinated information and does not meet all of the criteria.

Explain your reasoning in a step-by-step manner in the explanation field to ensure your reasoning and conclusion are correct.

Avoid simply stating the correct answer at the outset.";

/// Grader user message: grounding facts and the generated answer
pub static GRADER_TEMPLATE: Lazy<PromptTemplate> = Lazy::new(|| {
    PromptTemplate::new("FACTS: \n\n ${var:documents} \n\n STUDENT ANSWER: ${var:generation}")
});

/// Numeric complexity classification with EHR context
pub static CLASSIFICATION_TEMPLATE: Lazy<PromptTemplate> = Lazy::new(|| {
    PromptTemplate::new(
        "You are an assistant helping a doctor. Classify the following patient question based on whether it is simple or complex:

- Simple (0): Questions that can be answered using general medical knowledge or from the patient's EHR.
- Complex (1): Questions that require detailed medical explanations, such as specific treatments, side effects, or guidelines beyond the EHR.

Patient's question: ${var:question}

EHR context: ${var:ehr}

Your answer should be 0 if it's simple and 1 if it's complex. Only respond with 0 or 1, without any other text.",
    )
});

/// Follow-up question suggestions from a conversation
pub static SUGGESTION_TEMPLATE: Lazy<PromptTemplate> = Lazy::new(|| {
    PromptTemplate::new(
        "You are an assistant helping a cancer patient. Based on the conversation, suggest 4 relevant and helpful questions that the patient can ask their doctor or that can help clarify their situation.

Conversation history:
${var:conversation}

Context (if available):
${var:context}

Provide the 4 questions in a numbered list, separated by new lines, without any other text.",
    )
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_variables() {
        assert_eq!(SIMPLE_ANSWER_TEMPLATE.variables(), vec!["ehr", "question"]);
        assert_eq!(RAG_ANSWER_TEMPLATE.variables(), vec!["question", "context"]);
        assert_eq!(GRADER_TEMPLATE.variables(), vec!["documents", "generation"]);
        assert_eq!(CLASSIFICATION_TEMPLATE.variables(), vec!["question", "ehr"]);
        assert_eq!(
            SUGGESTION_TEMPLATE.variables(),
            vec!["conversation", "context"]
        );
    }
}
