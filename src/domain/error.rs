use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Credential error: {message}")]
    Credential { message: String },

    #[error("Provider error: {provider} - {message}")]
    Provider { provider: String, message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Corpus error: {message}")]
    Corpus { message: String },

    #[error("Schema violation in '{schema}': {message}")]
    SchemaViolation { schema: String, message: String },

    #[error("Template error: {message}")]
    Template { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn credential(message: impl Into<String>) -> Self {
        Self::Credential {
            message: message.into(),
        }
    }

    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn corpus(message: impl Into<String>) -> Self {
        Self::Corpus {
            message: message.into(),
        }
    }

    pub fn schema_violation(schema: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SchemaViolation {
            schema: schema.into(),
            message: message.into(),
        }
    }

    pub fn template(message: impl Into<String>) -> Self {
        Self::Template {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = DomainError::validation("Question cannot be empty");
        assert_eq!(
            error.to_string(),
            "Validation error: Question cannot be empty"
        );
    }

    #[test]
    fn test_schema_violation_error() {
        let error = DomainError::schema_violation("route_query", "unknown variant `maybe`");
        assert_eq!(
            error.to_string(),
            "Schema violation in 'route_query': unknown variant `maybe`"
        );
    }
}
