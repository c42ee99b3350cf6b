use crate::domain::{entities::GeneratorConfig, error::DomainError};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across callers.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_config(config: &GeneratorConfig) -> Result<(), DomainError> {
        config.validate()
    }

    /// Trimmed, non-empty entity names in input order, duplicates dropped.
    pub fn normalize_entities<I, S>(entities: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<String> = Vec::new();
        for name in entities {
            let name = name.as_ref().trim();
            if !name.is_empty() && !out.iter().any(|seen| seen == name) {
                out.push(name.to_string());
            }
        }
        out
    }

    /// Split a comma-separated prompt answer into entity names.
    pub fn parse_entity_list(input: &str) -> Vec<String> {
        Self::normalize_entities(input.split(','))
    }
}
