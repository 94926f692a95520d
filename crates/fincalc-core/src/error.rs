use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FinCalcError {
    /// A required field is absent or violates a domain constraint.
    #[error("Invalid input: {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl FinCalcError {
    pub(crate) fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        FinCalcError::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Prefix the offending field, e.g. `principal` becomes `first.principal`.
    pub fn in_scope(self, scope: &str) -> Self {
        match self {
            FinCalcError::Validation { field, reason } => FinCalcError::Validation {
                field: format!("{scope}.{field}"),
                reason,
            },
            other => other,
        }
    }
}

impl From<serde_json::Error> for FinCalcError {
    fn from(e: serde_json::Error) -> Self {
        FinCalcError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message() {
        let err = FinCalcError::validation("principal", "must be positive");
        assert_eq!(err.to_string(), "Invalid input: principal: must be positive");
    }

    #[test]
    fn test_in_scope_prefixes_field() {
        let err = FinCalcError::validation("tenure_years", "must be positive").in_scope("second");
        assert_eq!(
            err,
            FinCalcError::Validation {
                field: "second.tenure_years".into(),
                reason: "must be positive".into(),
            }
        );
    }

    #[test]
    fn test_in_scope_leaves_serialization_alone() {
        let err = FinCalcError::Serialization("bad json".into()).in_scope("first");
        assert_eq!(err, FinCalcError::Serialization("bad json".into()));
    }
}
